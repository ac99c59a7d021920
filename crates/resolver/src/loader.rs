//! Host loader seam.

use std::path::PathBuf;

/// Lookup surface of the host module loader.
///
/// `find_file` is the host's primary lookup; `None` is its not-found
/// signal and must be propagated unchanged by any wrapper. Implementations
/// may be called concurrently.
pub trait ModuleLoader: Send + Sync {
	/// Resolves a module name to the artifact that defines it.
	fn find_file(&self, name: &str) -> Option<PathBuf>;
}
