//! Comparators: named two-argument predicates relating a feature value to a prediction.

use std::sync::Arc;

use serde_json::Value;

use crate::error::RegistryKind;
use crate::table::{TypeTable, TypedEntry};

/// Compares a feature value (first argument) with a prediction (second).
///
/// Only a result of exactly `false` fails an assertion; every other value is
/// handed back to the caller unchanged.
pub type Comparator = Arc<dyn Fn(&Value, &Value) -> Value + Send + Sync>;

pub struct CompareEntry {
	compare_type: Box<str>,
	comparator: Comparator,
}

impl CompareEntry {
	pub(crate) fn new(compare_type: &str, comparator: Comparator) -> Self {
		Self {
			compare_type: Box::from(compare_type),
			comparator,
		}
	}

	pub fn compare_type(&self) -> &str {
		&self.compare_type
	}

	#[inline]
	pub fn compare(&self, feature: &Value, prediction: &Value) -> Value {
		(self.comparator)(feature, prediction)
	}
}

impl TypedEntry for CompareEntry {
	const KIND: RegistryKind = RegistryKind::Compare;

	fn type_name(&self) -> &str {
		&self.compare_type
	}
}

impl std::fmt::Debug for CompareEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CompareEntry")
			.field("compare_type", &self.compare_type)
			.finish_non_exhaustive()
	}
}

pub type CompareRegistry = TypeTable<CompareEntry>;
