//! Per-system configuration.
//!
//! Configuration is optional; [`RulesConfig::default`] matches the behaviour
//! most callers expect. It can also be read from a TOML document:
//!
//! ```toml
//! separator = "."
//! max_set_depth = 32
//! ```

use serde::Deserialize;

use crate::error::ConfigError;

/// Default separator joining compare-set prefixes and names.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Default nesting limit for compare sets.
pub const DEFAULT_MAX_SET_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
	/// Joins a compare-set prefix to each entry name (`simple` + `equal` -> `simple.equal`).
	pub separator: String,
	/// Maximum group nesting accepted by `register_compare_set`.
	pub max_set_depth: usize,
}

impl Default for RulesConfig {
	fn default() -> Self {
		Self {
			separator: DEFAULT_SEPARATOR.to_string(),
			max_set_depth: DEFAULT_MAX_SET_DEPTH,
		}
	}
}

impl RulesConfig {
	/// Parses and validates a TOML document. Missing fields take their defaults.
	pub fn from_toml_str(src: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(src)?;
		config.validate()?;
		Ok(config)
	}

	pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
		self.separator = separator.into();
		self
	}

	pub fn with_max_set_depth(mut self, depth: usize) -> Self {
		self.max_set_depth = depth;
		self
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.separator.is_empty() {
			return Err(ConfigError::Invalid {
				field: "separator",
				reason: "must not be empty",
			});
		}
		if self.max_set_depth == 0 {
			return Err(ConfigError::Invalid {
				field: "max_set_depth",
				reason: "must be at least 1",
			});
		}
		Ok(())
	}
}
