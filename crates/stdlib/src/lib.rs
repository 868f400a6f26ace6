//! Standard library of built-in comparators and features for premise rule systems.
//!
//! - [`standard_compare_set`]: `=`, `!=`, `>`, `>=`, `<`, `<=` and `jsoneq`.
//! - [`fetch_path`] / [`validate_path`]: the `get` feature for JSON states.
//!
//! [`install`] registers both on a fresh system.

pub mod compare;
pub mod path;

pub use compare::{compare_values, json_eq, standard_compare_set, strict_eq};
pub use path::{fetch_path, validate_path};
use premise_registry::{Result, RuleSystem, Value};

/// Type name the path feature is registered under by [`install`].
pub const GET_FEATURE: &str = "get";

/// Registers the standard compare set (unprefixed) and the `get` feature.
pub fn install(system: &mut RuleSystem<Value>) -> Result<()> {
	system.register_compare_set(&standard_compare_set(), "")?;
	system.register_feature_with_validator(GET_FEATURE, fetch_path, validate_path)?;
	tracing::debug!(
		compares = system.compare_types().len(),
		"installed standard library"
	);
	Ok(())
}
