//! Feature providers: a fetcher that reads a feature out of a state, and an
//! optional validator that checks feature definitions when a rule is compiled.

use std::sync::Arc;

use serde_json::Value;

use crate::error::{BoxError, RegistryKind, Result, RuleError, ValidationError};
use crate::table::{TypeTable, TypedEntry};

/// Computes a feature value from a feature definition and a state.
pub type Fetcher<S> =
	Arc<dyn Fn(&Value, &S) -> std::result::Result<Value, BoxError> + Send + Sync>;

/// Checks a feature definition for well-formedness.
pub type Validator = Arc<dyn Fn(&Value) -> std::result::Result<(), ValidationError> + Send + Sync>;

pub struct FeatureEntry<S> {
	feature_type: Box<str>,
	fetcher: Fetcher<S>,
	validator: Option<Validator>,
}

impl<S> FeatureEntry<S> {
	pub(crate) fn new(feature_type: &str, fetcher: Fetcher<S>, validator: Option<Validator>) -> Self {
		Self {
			feature_type: Box::from(feature_type),
			fetcher,
			validator,
		}
	}

	pub fn feature_type(&self) -> &str {
		&self.feature_type
	}

	pub fn has_validator(&self) -> bool {
		self.validator.is_some()
	}

	/// Runs the validator, if any. Definitions are accepted when none is registered.
	pub fn validate(&self, definition: &Value) -> std::result::Result<(), ValidationError> {
		match &self.validator {
			Some(validator) => validator(definition),
			None => Ok(()),
		}
	}

	pub fn fetch(&self, definition: &Value, state: &S) -> Result<Value> {
		(self.fetcher)(definition, state).map_err(|source| RuleError::Fetch {
			feature_type: self.feature_type.to_string(),
			source,
		})
	}
}

impl<S> TypedEntry for FeatureEntry<S> {
	const KIND: RegistryKind = RegistryKind::Feature;

	fn type_name(&self) -> &str {
		&self.feature_type
	}
}

impl<S> std::fmt::Debug for FeatureEntry<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FeatureEntry")
			.field("feature_type", &self.feature_type)
			.field("has_validator", &self.has_validator())
			.finish_non_exhaustive()
	}
}

pub type FeatureRegistry<S> = TypeTable<FeatureEntry<S>>;
