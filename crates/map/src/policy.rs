//! Effective case-sensitivity policy.

use std::borrow::Cow;

use crate::declaration::AliasDeclaration;

/// Process-wide case handling mode.
///
/// Derived once per build from the root package's declaration; dependency
/// packages never contribute policy. The policy drives lookup-time folding
/// and whether the host classmap is rewritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CasePolicy {
	/// Lookups use the caller's spelling verbatim.
	#[default]
	Sensitive,
	/// Lookups are folded to lowercase before consulting the index.
	Insensitive,
}

impl CasePolicy {
	/// Derives the effective policy from the root package's declaration.
	pub fn from_root(root: &AliasDeclaration) -> Self {
		Self::from_insensitive_flag(!root.case_sensitive)
	}

	/// Policy for an explicit insensitivity flag, as carried by the
	/// generated bootstrap.
	pub fn from_insensitive_flag(case_insensitive: bool) -> Self {
		if case_insensitive {
			Self::Insensitive
		} else {
			Self::Sensitive
		}
	}

	/// Returns true under the insensitive policy.
	pub fn is_insensitive(self) -> bool {
		matches!(self, Self::Insensitive)
	}

	/// Whether a generation run must produce artifacts at all.
	///
	/// With no alias entries anywhere and a sensitive policy the run is a
	/// no-op. An insensitive policy proceeds even with zero aliases, since
	/// the folded lookup fallback has value on its own.
	pub fn generation_required(self, entries_found: bool) -> bool {
		entries_found || self.is_insensitive()
	}

	/// Folds a lookup key according to the policy.
	///
	/// Index keys are folded unconditionally at build time; the lookup side
	/// folds only when the policy is insensitive.
	pub fn fold_lookup(self, name: &str) -> Cow<'_, str> {
		match self {
			Self::Sensitive => Cow::Borrowed(name),
			Self::Insensitive => Cow::Owned(name.to_lowercase()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn policy_comes_from_the_root_flag_only() {
		let sensitive = AliasDeclaration::default();
		assert_eq!(CasePolicy::from_root(&sensitive), CasePolicy::Sensitive);

		let insensitive = AliasDeclaration {
			case_sensitive: false,
			..AliasDeclaration::default()
		};
		assert_eq!(CasePolicy::from_root(&insensitive), CasePolicy::Insensitive);
	}

	#[test]
	fn generation_gate() {
		assert!(!CasePolicy::Sensitive.generation_required(false));
		assert!(CasePolicy::Sensitive.generation_required(true));
		assert!(CasePolicy::Insensitive.generation_required(false));
		assert!(CasePolicy::Insensitive.generation_required(true));
	}

	#[test]
	fn lookup_folding_follows_the_policy() {
		assert_eq!(CasePolicy::Sensitive.fold_lookup("Acme\\Old"), "Acme\\Old");
		assert_eq!(
			CasePolicy::Insensitive.fold_lookup("Acme\\Old"),
			"acme\\old"
		);
	}
}
