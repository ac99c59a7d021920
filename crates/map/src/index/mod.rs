//! The merged alias index.
//!
//! # Role
//!
//! Two co-derived maps built from every package's mapping files: folded
//! alias name → canonical name, and canonical name → set of folded aliases.
//! Built once per generation run, persisted as a single artifact, read-only
//! for the runtime resolver.
//!
//! # Invariants
//!
//! - For every `(a → c)` in `alias_to_canonical`, `a` is a member of
//!   `canonical_to_aliases[c]`.
//! - Iteration and serialization order is insertion order, which is package
//!   discovery order.

mod artifact;
mod build;

pub use build::{BuildOutcome, build_alias_index};

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Case-folds an alias key for index storage and folded lookups.
pub fn fold_key(name: &str) -> String {
	name.to_lowercase()
}

/// Merged alias indexes, persisted as one JSON artifact with exactly two
/// top-level keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AliasIndex {
	/// Folded alias name → canonical name (stored verbatim).
	pub alias_to_canonical: IndexMap<String, String>,
	/// Canonical name (verbatim) → folded alias names that resolve to it.
	pub canonical_to_aliases: IndexMap<String, IndexSet<String>>,
}

impl AliasIndex {
	/// Inserts one alias entry, folding the alias key.
	///
	/// A folded key that is already present is overwritten and the previous
	/// canonical target loses its back-reference: the last writer in merge
	/// order wins.
	pub fn insert(&mut self, alias: &str, canonical: &str) {
		let folded = fold_key(alias);
		if let Some(previous) = self
			.alias_to_canonical
			.insert(folded.clone(), canonical.to_owned())
			&& previous != canonical
		{
			self.drop_back_reference(&previous, &folded);
		}
		self.canonical_to_aliases
			.entry(canonical.to_owned())
			.or_default()
			.insert(folded);
	}

	fn drop_back_reference(&mut self, canonical: &str, folded_alias: &str) {
		if let Some(aliases) = self.canonical_to_aliases.get_mut(canonical) {
			aliases.shift_remove(folded_alias);
			if aliases.is_empty() {
				self.canonical_to_aliases.shift_remove(canonical);
			}
		}
	}

	/// Canonical name registered for a folded alias key, if any.
	pub fn canonical_for(&self, folded_alias: &str) -> Option<&str> {
		self.alias_to_canonical.get(folded_alias).map(String::as_str)
	}

	/// Folded alias names registered for a canonical name.
	pub fn aliases_of(&self, canonical: &str) -> impl Iterator<Item = &str> {
		self.canonical_to_aliases
			.get(canonical)
			.into_iter()
			.flat_map(|aliases| aliases.iter().map(String::as_str))
	}

	/// Number of alias entries.
	pub fn len(&self) -> usize {
		self.alias_to_canonical.len()
	}

	/// Returns true if no alias entry has been merged.
	pub fn is_empty(&self) -> bool {
		self.alias_to_canonical.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn insert_folds_the_alias_key_and_keeps_the_canonical_verbatim() {
		let mut index = AliasIndex::default();
		index.insert("Acme\\Old", "Acme\\New");

		assert_eq!(index.canonical_for("acme\\old"), Some("Acme\\New"));
		assert_eq!(index.canonical_for("Acme\\Old"), None);
		assert_eq!(index.aliases_of("Acme\\New").collect::<Vec<_>>(), ["acme\\old"]);
	}

	#[test]
	fn both_maps_stay_cross_referenced() {
		let mut index = AliasIndex::default();
		index.insert("Acme\\Old", "Acme\\New");
		index.insert("Acme\\Ancient", "Acme\\New");
		index.insert("Other\\Old", "Other\\New");

		for (alias, canonical) in &index.alias_to_canonical {
			assert!(
				index.aliases_of(canonical).any(|a| a == alias),
				"alias {alias} missing from canonical_to_aliases[{canonical}]"
			);
		}
	}

	#[test]
	fn last_writer_wins_and_the_stale_back_reference_is_dropped() {
		let mut index = AliasIndex::default();
		index.insert("Acme\\Old", "Acme\\First");
		index.insert("acme\\old", "Acme\\Second");

		assert_eq!(index.canonical_for("acme\\old"), Some("Acme\\Second"));
		assert_eq!(index.aliases_of("Acme\\First").count(), 0);
		assert!(!index.canonical_to_aliases.contains_key("Acme\\First"));
		assert_eq!(index.len(), 1);
	}

	#[test]
	fn reinserting_the_same_entry_is_idempotent() {
		let mut index = AliasIndex::default();
		index.insert("Acme\\Old", "Acme\\New");
		let snapshot = index.clone();
		index.insert("Acme\\Old", "Acme\\New");
		assert_eq!(index, snapshot);
	}
}
