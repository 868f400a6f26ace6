//! Registry-first assertion rules.
//!
//! Extracting a feature from some state and comparing it to an expected value
//! are registered separately, by name, and composed into rules at runtime:
//!
//! - **Features** pair a fetcher (`definition, state -> value`) with an
//!   optional validator that checks definitions when a rule is compiled.
//! - **Comparators** relate a feature value to a prediction. They can be
//!   registered one by one or as a nested [`CompareSet`] flattened into dotted
//!   keys (`simple.equal`).
//! - **Rules** are compiled with [`RuleSystem::define_assertion_rule`] and
//!   checked against any number of states.
//!
//! ```
//! use premise_registry::{RuleSystem, Value, json};
//!
//! let mut rules = RuleSystem::<Value>::new();
//! rules
//! 	.register_feature("get", |definition, state| {
//! 		Ok(state[definition.as_str().unwrap_or_default()].clone())
//! 	})
//! 	.unwrap();
//! rules
//! 	.register_compare("=", |feature, prediction| json!(feature == prediction))
//! 	.unwrap();
//!
//! let rule = rules.define_assertion_rule("get", "number", "=", 10).unwrap();
//! assert_eq!(rule.check(&json!({ "number": 10 })).unwrap(), json!(true));
//! assert!(rule.check(&json!({ "number": 5 })).is_err());
//! ```
//!
//! Registries are owned by their [`RuleSystem`]; nothing is global.

pub mod compare;
pub mod compare_set;
pub mod config;
pub mod error;
pub mod feature;
mod guard;
pub mod rule;
mod system;
pub mod table;

pub use compare::{CompareEntry, Comparator};
pub use compare_set::{CompareNode, CompareSet};
pub use config::RulesConfig;
pub use error::{BoxError, ConfigError, RegistryKind, Result, RuleError, ValidationError};
pub use feature::{FeatureEntry, Fetcher, Validator};
pub use rule::AssertionRule;
pub use serde_json::{Value, json};
pub use system::RuleSystem;
