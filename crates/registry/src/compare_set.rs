//! Nested comparator groups.
//!
//! A [`CompareSet`] is an ordered tree whose leaves are comparators and whose
//! inner nodes are named groups. Registering a set flattens it into dotted
//! keys: a group `simple` holding `equal` becomes `simple.equal`.

use indexmap::IndexMap;
use serde_json::Value;

use crate::compare::Comparator;
use crate::error::{Result, RuleError};

#[derive(Clone)]
pub enum CompareNode {
	Compare(Comparator),
	Group(CompareSet),
}

impl std::fmt::Debug for CompareNode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Compare(_) => f.write_str("Compare(..)"),
			Self::Group(set) => f.debug_tuple("Group").field(set).finish(),
		}
	}
}

#[derive(Clone, Default)]
pub struct CompareSet {
	entries: IndexMap<String, CompareNode>,
}

impl CompareSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a comparator leaf.
	pub fn with<F>(mut self, name: impl Into<String>, comparator: F) -> Self
	where
		F: Fn(&Value, &Value) -> Value + Send + Sync + 'static,
	{
		self.entries.insert(
			name.into(),
			CompareNode::Compare(std::sync::Arc::new(comparator)),
		);
		self
	}

	/// Adds a nested group whose keys are prefixed with `name`.
	pub fn with_group(mut self, name: impl Into<String>, group: CompareSet) -> Self {
		self.entries.insert(name.into(), CompareNode::Group(group));
		self
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &CompareNode)> {
		self.entries.iter().map(|(name, node)| (name.as_str(), node))
	}

	/// Flattens the tree into `(key, comparator)` pairs in insertion order.
	pub(crate) fn flatten(
		&self,
		prefix: &str,
		separator: &str,
		max_depth: usize,
	) -> Result<Vec<(String, Comparator)>> {
		let mut out = Vec::new();
		self.walk(prefix, separator, 1, max_depth, &mut out)?;
		Ok(out)
	}

	fn walk(
		&self,
		prefix: &str,
		separator: &str,
		depth: usize,
		max_depth: usize,
		out: &mut Vec<(String, Comparator)>,
	) -> Result<()> {
		if depth > max_depth {
			return Err(RuleError::CompareSetTooDeep {
				prefix: prefix.to_string(),
				limit: max_depth,
			});
		}
		for (name, node) in &self.entries {
			let key = join_key(prefix, name, separator);
			match node {
				CompareNode::Group(group) => {
					group.walk(&key, separator, depth + 1, max_depth, out)?
				}
				CompareNode::Compare(comparator) => out.push((key, comparator.clone())),
			}
		}
		Ok(())
	}
}

impl std::fmt::Debug for CompareSet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.entries.iter()).finish()
	}
}

/// Joins `prefix` and `name`, dropping whichever is empty.
pub(crate) fn join_key(prefix: &str, name: &str, separator: &str) -> String {
	[prefix, name]
		.into_iter()
		.filter(|segment| !segment.is_empty())
		.collect::<Vec<_>>()
		.join(separator)
}

#[cfg(test)]
mod tests;
