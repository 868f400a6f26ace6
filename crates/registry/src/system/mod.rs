//! The rule system: one feature registry, one compare registry, and the rule compiler.
//!
//! Each [`RuleSystem`] owns its registries. Two systems never see each other's
//! registrations, so isolated rule sets can coexist in one process.

use std::sync::Arc;

use rustc_hash::FxHashSet as HashSet;
use serde_json::Value;

use crate::compare::{CompareEntry, CompareRegistry};
use crate::compare_set::CompareSet;
use crate::config::RulesConfig;
use crate::error::{BoxError, RegistryKind, Result, RuleError, ValidationError};
use crate::feature::{FeatureEntry, FeatureRegistry, Fetcher, Validator};
use crate::guard;
use crate::rule::AssertionRule;

pub struct RuleSystem<S = Value> {
	config: RulesConfig,
	features: FeatureRegistry<S>,
	compares: CompareRegistry,
}

impl<S> Default for RuleSystem<S> {
	fn default() -> Self {
		Self::with_config(RulesConfig::default())
	}
}

impl<S> RuleSystem<S> {
	/// Creates a system with empty registries and the default configuration.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_config(config: RulesConfig) -> Self {
		Self {
			config,
			features: FeatureRegistry::default(),
			compares: CompareRegistry::default(),
		}
	}

	pub fn config(&self) -> &RulesConfig {
		&self.config
	}

	/// Registers a feature type without a definition validator.
	pub fn register_feature<F>(&mut self, feature_type: &str, fetcher: F) -> Result<()>
	where
		F: Fn(&Value, &S) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
	{
		self.insert_feature(feature_type, Arc::new(fetcher), None)
	}

	/// Registers a feature type whose definitions are checked by `validator`
	/// every time a rule is compiled against it.
	pub fn register_feature_with_validator<F, V>(
		&mut self,
		feature_type: &str,
		fetcher: F,
		validator: V,
	) -> Result<()>
	where
		F: Fn(&Value, &S) -> std::result::Result<Value, BoxError> + Send + Sync + 'static,
		V: Fn(&Value) -> std::result::Result<(), ValidationError> + Send + Sync + 'static,
	{
		self.insert_feature(feature_type, Arc::new(fetcher), Some(Arc::new(validator)))
	}

	fn insert_feature(
		&mut self,
		feature_type: &str,
		fetcher: Fetcher<S>,
		validator: Option<Validator>,
	) -> Result<()> {
		guard::type_name("register_feature", "feature_type", feature_type)?;
		self.features
			.insert(FeatureEntry::new(feature_type, fetcher, validator))
	}

	pub fn register_compare<F>(&mut self, compare_type: &str, comparator: F) -> Result<()>
	where
		F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
	{
		guard::type_name("register_compare", "compare_type", compare_type)?;
		self.compares
			.insert(CompareEntry::new(compare_type, Arc::new(comparator)))
	}

	/// Registers every comparator in `set`, keyed by its dotted path under `prefix`.
	///
	/// The set is checked as a whole first: if any key is malformed, already
	/// registered, or produced twice by the set itself, nothing is registered.
	pub fn register_compare_set(&mut self, set: &CompareSet, prefix: &str) -> Result<()> {
		let flat = set.flatten(prefix, &self.config.separator, self.config.max_set_depth)?;

		let mut seen = HashSet::default();
		for (key, _) in &flat {
			guard::type_name("register_compare_set", "set", key)?;
			self.compares.ensure_vacant(key)?;
			if !seen.insert(key.as_str()) {
				return Err(RuleError::DuplicateDefinition {
					kind: RegistryKind::Compare,
					name: key.clone(),
				});
			}
		}

		for (key, comparator) in flat {
			self.compares.insert(CompareEntry::new(&key, comparator))?;
		}
		Ok(())
	}

	/// Compiles a rule from a registered feature type and compare type.
	pub fn define_assertion_rule(
		&self,
		feature_type: &str,
		definition: impl Into<Value>,
		compare_type: &str,
		prediction: impl Into<Value>,
	) -> Result<AssertionRule<S>> {
		AssertionRule::compile(
			&self.features,
			&self.compares,
			feature_type,
			definition.into(),
			compare_type,
			prediction.into(),
		)
	}

	pub fn has_feature(&self, feature_type: &str) -> bool {
		self.features.contains(feature_type)
	}

	pub fn has_compare(&self, compare_type: &str) -> bool {
		self.compares.contains(compare_type)
	}

	/// Registered feature types in lexical order.
	pub fn feature_types(&self) -> Vec<&str> {
		self.features.names()
	}

	/// Registered compare types in lexical order.
	pub fn compare_types(&self) -> Vec<&str> {
		self.compares.names()
	}
}

impl<S> std::fmt::Debug for RuleSystem<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RuleSystem")
			.field("config", &self.config)
			.field("features", &self.feature_types())
			.field("compares", &self.compare_types())
			.finish()
	}
}
