//! Loader decorator with alias fallback.
//!
//! # Invariants
//!
//! - The wrapped loader's direct lookup always runs first; the alias index
//!   is a fallback, never a primary path.
//! - A miss everywhere propagates the host's not-found outcome unchanged.

use std::path::PathBuf;

use realias_map::index::fold_key;
use realias_map::{AliasIndex, CasePolicy};
use rustc_hash::FxHashMap;

use crate::loader::ModuleLoader;

/// Decorates the host loader with alias and case-folded fallbacks.
///
/// State is fixed at construction; lookups are lock-free and safe to run
/// concurrently.
pub struct AliasResolver {
	loader: Box<dyn ModuleLoader>,
	index: AliasIndex,
	policy: CasePolicy,
	/// Folded canonical spelling → canonical spelling, for the
	/// case-restoring fallback. Empty under a sensitive policy.
	folded_canonicals: FxHashMap<String, String>,
}

impl AliasResolver {
	/// Builds a decorator around `loader` for `index` under `policy`.
	pub fn new(loader: Box<dyn ModuleLoader>, index: AliasIndex, policy: CasePolicy) -> Self {
		let folded_canonicals = if policy.is_insensitive() {
			index
				.canonical_to_aliases
				.keys()
				.map(|canonical| (fold_key(canonical), canonical.clone()))
				.collect()
		} else {
			FxHashMap::default()
		};
		Self {
			loader,
			index,
			policy,
			folded_canonicals,
		}
	}

	/// The effective case policy this resolver was initialized with.
	pub fn policy(&self) -> CasePolicy {
		self.policy
	}

	/// The loaded alias index.
	pub fn index(&self) -> &AliasIndex {
		&self.index
	}

	/// Canonical spelling for `name`, or `name` itself when it has no alias
	/// relationship.
	pub fn canonical_name<'a>(&'a self, name: &'a str) -> &'a str {
		let key = self.policy.fold_lookup(name);
		self.index.canonical_for(key.as_ref()).unwrap_or(name)
	}

	/// Secondary lookup provider, invoked by the host loader's failure
	/// path.
	///
	/// Delegation order: the wrapped loader's direct lookup, then the alias
	/// index, then (insensitive policy only) the case-restored canonical
	/// spelling of `name` itself.
	pub fn find_name(&self, name: &str) -> Option<PathBuf> {
		if let Some(found) = self.loader.find_file(name) {
			return Some(found);
		}

		let key = self.policy.fold_lookup(name);
		if let Some(canonical) = self.index.canonical_for(key.as_ref())
			&& let Some(found) = self.loader.find_file(canonical)
		{
			return Some(found);
		}

		if self.policy.is_insensitive()
			&& let Some(canonical) = self.folded_canonicals.get(key.as_ref())
		{
			return self.loader.find_file(canonical);
		}

		None
	}
}

impl std::fmt::Debug for AliasResolver {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AliasResolver")
			.field("policy", &self.policy)
			.field("aliases", &self.index.len())
			.finish_non_exhaustive()
	}
}
