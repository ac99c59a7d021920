//! Runtime alias resolution over a host module loader.
//!
//! The host loader performs its own direct, classmap-authoritative lookups;
//! this crate supplies the secondary lookup provider consulted on its
//! failure path, the process-wide singleton that owns the translation
//! table, and the static facade arbitrary code uses to translate a
//! possibly-aliased name to its canonical form.
//!
//! All resolver state is fixed at initialization. Lookups take no locks and
//! are safe to run concurrently; the singleton claim is the only mutation
//! point in the crate.

mod error;
mod init;
mod loader;
mod resolver;
mod singleton;

pub use error::{ResolverError, Result};
pub use init::{InitOptions, initialize};
pub use loader::ModuleLoader;
pub use resolver::AliasResolver;
pub use singleton::{installed, resolve_canonical_name};
