//! Compiled assertion rules.
//!
//! # Role
//!
//! A rule pairs one feature (definition + fetcher) with one comparator and a
//! prediction. Compiling a rule resolves both providers by name and validates
//! the definition; checking a rule against a state fetches the feature and
//! compares it.
//!
//! # Failure policy
//!
//! A check fails only when the comparator returns exactly `false`. Any other
//! comparator result, including `0`, `null` and `""`, is returned unchanged.

use std::sync::Arc;

use serde_json::Value;

use crate::compare::{CompareEntry, CompareRegistry};
use crate::error::{Result, RuleError};
use crate::feature::{FeatureEntry, FeatureRegistry};
use crate::guard;

pub struct AssertionRule<S> {
	definition: Value,
	feature: Arc<FeatureEntry<S>>,
	prediction: Value,
	compare: Arc<CompareEntry>,
}

impl<S> Clone for AssertionRule<S> {
	fn clone(&self) -> Self {
		Self {
			definition: self.definition.clone(),
			feature: self.feature.clone(),
			prediction: self.prediction.clone(),
			compare: self.compare.clone(),
		}
	}
}

impl<S> AssertionRule<S> {
	/// Resolves providers and validates the definition. Nothing is evaluated yet.
	pub(crate) fn compile(
		features: &FeatureRegistry<S>,
		compares: &CompareRegistry,
		feature_type: &str,
		definition: Value,
		compare_type: &str,
		prediction: Value,
	) -> Result<Self> {
		const OP: &str = "define_assertion_rule";
		guard::type_name(OP, "feature_type", feature_type)?;
		guard::present(OP, "definition", &definition)?;
		guard::type_name(OP, "compare_type", compare_type)?;
		guard::present(OP, "prediction", &prediction)?;

		let feature = features
			.get(feature_type)
			.ok_or_else(|| RuleError::MissingFeature(feature_type.to_string()))?;
		feature.validate(&definition)?;

		let compare = compares
			.get(compare_type)
			.ok_or_else(|| RuleError::MissingCompare(compare_type.to_string()))?;

		tracing::debug!(feature_type, compare_type, "compiled assertion rule");
		Ok(Self {
			definition,
			feature: feature.clone(),
			prediction,
			compare: compare.clone(),
		})
	}

	/// Evaluates the rule against `state`.
	///
	/// Returns the comparator's result unless it is exactly `false`, in which
	/// case [`RuleError::AssertionFailure`] carries both names and both values.
	pub fn check(&self, state: &S) -> Result<Value> {
		let feature = self.feature.fetch(&self.definition, state)?;
		let verdict = self.compare.compare(&feature, &self.prediction);
		tracing::trace!(
			feature_type = self.feature.feature_type(),
			compare_type = self.compare.compare_type(),
			%feature,
			%verdict,
			"checked assertion rule"
		);

		if verdict == Value::Bool(false) {
			tracing::debug!(
				feature_type = self.feature.feature_type(),
				compare_type = self.compare.compare_type(),
				"assertion rule rejected feature"
			);
			return Err(RuleError::AssertionFailure {
				compare_type: self.compare.compare_type().to_string(),
				feature_type: self.feature.feature_type().to_string(),
				feature,
				prediction: self.prediction.clone(),
			});
		}
		Ok(verdict)
	}

	pub fn feature_type(&self) -> &str {
		self.feature.feature_type()
	}

	pub fn compare_type(&self) -> &str {
		self.compare.compare_type()
	}

	pub fn definition(&self) -> &Value {
		&self.definition
	}

	pub fn prediction(&self) -> &Value {
		&self.prediction
	}
}

impl<S> std::fmt::Debug for AssertionRule<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AssertionRule")
			.field("feature_type", &self.feature_type())
			.field("definition", &self.definition)
			.field("compare_type", &self.compare_type())
			.field("prediction", &self.prediction)
			.finish()
	}
}
