//! Per-package alias declarations.
//!
//! Each installed package may declare alias mapping files and a
//! case-sensitivity preference inside its configuration blob. The blob is
//! validated here, at the boundary, into a typed struct; downstream code
//! never touches string-keyed configuration.

use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{MapError, Result};

/// Alias-related configuration declared by one package.
///
/// Unrecognized keys in the source blob are ignored. Both fields have
/// defaults, so a package with no declaration at all parses to a neutral
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AliasDeclaration {
	/// Mapping file refs, relative to the declaring package's install path.
	pub alias_maps: Vec<PathBuf>,
	/// Whether name lookups stay case sensitive.
	///
	/// Only the root package's flag contributes to the effective policy;
	/// dependency packages contribute alias entries, never policy.
	pub case_sensitive: bool,
}

impl Default for AliasDeclaration {
	fn default() -> Self {
		Self {
			alias_maps: Vec::new(),
			case_sensitive: true,
		}
	}
}

impl AliasDeclaration {
	/// Parses a declaration out of a package's configuration blob.
	///
	/// An absent section (JSON null) is a neutral declaration. A present
	/// section with the wrong shape, such as a non-list `alias-maps`, is a
	/// configuration error.
	pub fn from_config(package: &str, config: &serde_json::Value) -> Result<Self> {
		if config.is_null() {
			return Ok(Self::default());
		}
		serde_json::from_value(config.clone()).map_err(|source| MapError::Declaration {
			package: package.to_owned(),
			source,
		})
	}

	/// Returns true if this declaration references no mapping files.
	pub fn is_empty(&self) -> bool {
		self.alias_maps.is_empty()
	}
}

/// One discovered package: name, install location, declaration.
///
/// Packages arrive in discovery order, which is the merge order. The root
/// package carries no install path and resolves its mapping refs against
/// the project base directory.
#[derive(Debug, Clone)]
pub struct InstalledPackage {
	/// Package name, used in diagnostics only.
	pub name: String,
	/// Install directory, absent for the root package.
	pub install_path: Option<PathBuf>,
	/// The package's parsed alias declaration.
	pub declaration: AliasDeclaration,
}

impl InstalledPackage {
	/// Creates a package record from already-parsed parts.
	pub fn new(
		name: impl Into<String>,
		install_path: Option<PathBuf>,
		declaration: AliasDeclaration,
	) -> Self {
		Self {
			name: name.into(),
			install_path,
			declaration,
		}
	}
}
