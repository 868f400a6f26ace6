//! Error types for registration, rule compilation and rule evaluation.

use serde_json::Value;
use thiserror::Error;

/// Boxed error returned by caller-supplied fetchers.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Which of the two registries an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryKind {
	/// Feature providers (fetcher plus optional validator).
	Feature,
	/// Comparators.
	Compare,
}

impl std::fmt::Display for RegistryKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Feature => write!(f, "feature"),
			Self::Compare => write!(f, "compare"),
		}
	}
}

/// Raised by a feature validator when a feature definition is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid feature definition: {message}")]
pub struct ValidationError {
	message: String,
}

impl ValidationError {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	pub fn message(&self) -> &str {
		&self.message
	}
}

/// Errors produced while registering providers, compiling rules or checking them.
#[derive(Debug, Error)]
pub enum RuleError {
	/// A feature or compare type was registered twice in the same system.
	#[error("{kind} {name} was defined already")]
	DuplicateDefinition { kind: RegistryKind, name: String },

	/// A rule referenced a feature type that was never registered.
	#[error("missing feature with type {0}")]
	MissingFeature(String),

	/// A rule referenced a compare type that was never registered.
	#[error("missing compare with type {0}")]
	MissingCompare(String),

	/// The feature's validator rejected the definition.
	#[error(transparent)]
	Validation(#[from] ValidationError),

	/// The feature fetcher failed while evaluating a rule.
	#[error("feature {feature_type} failed to fetch: {source}")]
	Fetch {
		feature_type: String,
		#[source]
		source: BoxError,
	},

	/// The comparator returned exactly `false`.
	#[error(
		"[assertion fail] compare type is {compare_type}, feature type is {feature_type}, feature {feature}, prediction is {prediction}"
	)]
	AssertionFailure {
		compare_type: String,
		feature_type: String,
		feature: Value,
		prediction: Value,
	},

	/// An argument to a public entry point has the wrong shape.
	#[error("{operation}: argument `{argument}` must be {expected}")]
	ArgumentShape {
		operation: &'static str,
		argument: &'static str,
		expected: &'static str,
	},

	/// A compare set nests groups deeper than the configured limit.
	#[error("compare set nested deeper than {limit} levels at {prefix:?}")]
	CompareSetTooDeep { prefix: String, limit: usize },
}

impl RuleError {
	/// Returns `true` for failures raised by a comparator rejecting a feature.
	pub fn is_assertion_failure(&self) -> bool {
		matches!(self, Self::AssertionFailure { .. })
	}
}

/// Errors that can occur when loading a [`RulesConfig`](crate::RulesConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or mapping it onto the config.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A field holds a value the registry cannot work with.
	#[error("invalid value for {field}: {reason}")]
	Invalid {
		field: &'static str,
		reason: &'static str,
	},
}
