//! Append-only name → entry table shared by the feature and compare registries.
//!
//! # Role
//!
//! A key is bound once for the lifetime of a table. Rebinding is a fatal
//! [`RuleError::DuplicateDefinition`]; the existing entry is never replaced.

use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::error::{RegistryKind, Result, RuleError};

/// An entry that knows the type name it was registered under.
pub trait TypedEntry {
	/// Registry this entry type lives in, used in diagnostics.
	const KIND: RegistryKind;

	/// Returns the registered type name.
	fn type_name(&self) -> &str;
}

pub struct TypeTable<E> {
	by_type: HashMap<Box<str>, Arc<E>>,
}

impl<E> Default for TypeTable<E> {
	fn default() -> Self {
		Self {
			by_type: HashMap::default(),
		}
	}
}

impl<E: TypedEntry> TypeTable<E> {
	#[inline]
	pub fn get(&self, name: &str) -> Option<&Arc<E>> {
		self.by_type.get(name)
	}

	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.by_type.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.by_type.len()
	}

	/// Registered type names in lexical order.
	pub fn names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.by_type.keys().map(|key| &**key).collect();
		names.sort_unstable();
		names
	}

	/// Fails if `name` is already bound.
	pub(crate) fn ensure_vacant(&self, name: &str) -> Result<()> {
		if self.contains(name) {
			return Err(RuleError::DuplicateDefinition {
				kind: E::KIND,
				name: name.to_string(),
			});
		}
		Ok(())
	}

	pub(crate) fn insert(&mut self, entry: E) -> Result<()> {
		self.ensure_vacant(entry.type_name())?;
		let key: Box<str> = Box::from(entry.type_name());
		tracing::debug!(kind = %E::KIND, name = %key, "registered");
		self.by_type.insert(key, Arc::new(entry));
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Named(&'static str, u32);

	impl TypedEntry for Named {
		const KIND: RegistryKind = RegistryKind::Compare;

		fn type_name(&self) -> &str {
			self.0
		}
	}

	#[test]
	fn second_insert_is_rejected_and_first_survives() {
		let mut table = TypeTable::default();
		table.insert(Named("x", 1)).unwrap();

		let err = table.insert(Named("x", 2)).unwrap_err();
		assert!(matches!(
			err,
			RuleError::DuplicateDefinition {
				kind: RegistryKind::Compare,
				ref name,
			} if name == "x"
		));
		assert_eq!(table.len(), 1);
		assert_eq!(table.get("x").map(|e| e.1), Some(1));
	}

	#[test]
	fn names_are_sorted() {
		let mut table = TypeTable::default();
		for name in ["b", "a.c", "a"] {
			table.insert(Named(name, 0)).unwrap();
		}
		assert_eq!(table.names(), vec!["a", "a.c", "b"]);
	}
}
