//! One-shot initializer wired in by the generated bootstrap.

use std::path::PathBuf;

use realias_map::{AliasIndex, CasePolicy};

use crate::error::{ResolverError, Result};
use crate::loader::ModuleLoader;
use crate::resolver::AliasResolver;
use crate::singleton;

/// Configuration the generated bootstrap passes to [`initialize`].
#[derive(Debug, Clone)]
pub struct InitOptions {
	/// Location of the persisted alias index artifact.
	pub index_path: PathBuf,
	/// Whether lookups fold case before consulting the index.
	pub case_insensitive: bool,
}

/// Builds and installs the process-wide resolver around the host loader.
///
/// The first call loads the index artifact and claims the singleton cell.
/// Every later call in the same process returns the installed resolver
/// without touching the artifact again, including a concurrent first call
/// that loses the claim race.
///
/// # Errors
///
/// Fails when the index artifact cannot be loaded.
pub fn initialize(loader: Box<dyn ModuleLoader>, options: &InitOptions) -> Result<&'static AliasResolver> {
	if let Some(resolver) = singleton::installed() {
		return Ok(resolver);
	}

	let index = AliasIndex::load(&options.index_path)?;
	let policy = CasePolicy::from_insensitive_flag(options.case_insensitive);
	match AliasResolver::new(loader, index, policy).register() {
		Ok(resolver) => Ok(resolver),
		// Lost a first-call race; the winner's resolver is authoritative.
		Err(_) => singleton::installed().ok_or(ResolverError::AlreadyRegistered),
	}
}
