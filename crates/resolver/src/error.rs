//! Error types for resolver installation.

use thiserror::Error;

/// Errors that can occur while installing the process-wide resolver.
#[derive(Debug, Error)]
pub enum ResolverError {
	/// A resolver singleton was already installed in this process.
	///
	/// Signals a build or process-wiring defect, not a transient condition:
	/// the translation table has exactly one owner for the process
	/// lifetime.
	#[error("an alias resolver is already registered for this process")]
	AlreadyRegistered,

	/// The persisted index artifact could not be loaded.
	#[error(transparent)]
	Index(#[from] realias_map::MapError),
}

/// Result type for resolver operations.
pub type Result<T> = std::result::Result<T, ResolverError>;
