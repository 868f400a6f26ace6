//! Argument-shape checks for the public entry points.
//!
//! Every registration and compile call runs these before touching a registry,
//! so a rejected call never leaves a partial mutation behind.

use serde_json::Value;

use crate::error::{Result, RuleError};

/// Rejects empty type names. Any other string, whitespace included, is a valid name.
pub(crate) fn type_name(operation: &'static str, argument: &'static str, name: &str) -> Result<()> {
	if name.is_empty() {
		return Err(RuleError::ArgumentShape {
			operation,
			argument,
			expected: "a non-empty type name",
		});
	}
	Ok(())
}

/// Rejects `null` where a definition or prediction is required.
pub(crate) fn present(operation: &'static str, argument: &'static str, value: &Value) -> Result<()> {
	if value.is_null() {
		return Err(RuleError::ArgumentShape {
			operation,
			argument,
			expected: "a non-null value",
		});
	}
	Ok(())
}
