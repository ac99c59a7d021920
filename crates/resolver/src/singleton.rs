//! Process-wide resolver cell.
//!
//! # Role
//!
//! An explicit claim cell for the one resolver a process may own, exposing
//! only claim-once and read operations. The single-assignment invariant is
//! enforced here, not left to discipline at call sites.
//!
//! # Invariants
//!
//! - The cell is claimed at most once per process; a losing claim fails
//!   with [`ResolverError::AlreadyRegistered`], including when two
//!   first-time claims race.

use std::sync::OnceLock;

use crate::error::{ResolverError, Result};
use crate::resolver::AliasResolver;

static RESOLVER: OnceLock<AliasResolver> = OnceLock::new();

impl AliasResolver {
	/// Installs this resolver as the process-wide singleton.
	///
	/// # Errors
	///
	/// Fails with [`ResolverError::AlreadyRegistered`] when a resolver was
	/// installed earlier in the process lifetime. Re-registration is a
	/// wiring defect: code already holding the first resolver would
	/// otherwise observe a competing translation table.
	pub fn register(self) -> Result<&'static AliasResolver> {
		RESOLVER
			.set(self)
			.map_err(|_| ResolverError::AlreadyRegistered)?;
		// The claim above either installed this resolver or errored.
		RESOLVER.get().ok_or(ResolverError::AlreadyRegistered)
	}
}

/// Returns the installed resolver, if any initialization ever ran.
pub fn installed() -> Option<&'static AliasResolver> {
	RESOLVER.get()
}

/// Translates a possibly-aliased name to its canonical spelling.
///
/// Safe before any registration: the input comes back unchanged, so
/// callers may apply the translation unconditionally without depending on
/// the alias layer being wired in.
pub fn resolve_canonical_name(name: &str) -> &str {
	match RESOLVER.get() {
		Some(resolver) => resolver.canonical_name(name),
		None => name,
	}
}
