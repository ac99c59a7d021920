//! Merge pass over discovered packages.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::debug;

use super::AliasIndex;
use crate::declaration::InstalledPackage;
use crate::error::{MapError, Result};

/// Result of one merge pass over every discovered package.
#[derive(Debug, Clone, Default)]
pub struct BuildOutcome {
	/// The merged indexes.
	pub index: AliasIndex,
	/// True if at least one alias entry was merged from any package.
	///
	/// Gates whether a sensitive-policy generation run produces artifacts
	/// at all.
	pub entries_found: bool,
}

/// Merges every package's declared mapping files into one [`AliasIndex`].
///
/// Packages are processed in input order and colliding folded alias keys
/// are overwritten, so the last package in discovery order wins. Mapping
/// refs resolve against the declaring package's install path, or against
/// `base_dir` for packages without one (the root package).
///
/// # Errors
///
/// An absent referenced file is skipped. A referenced file that exists but
/// cannot be read, or does not contain an alias-to-canonical mapping,
/// aborts the build.
pub fn build_alias_index<'a, I>(base_dir: &Path, packages: I) -> Result<BuildOutcome>
where
	I: IntoIterator<Item = &'a InstalledPackage>,
{
	let mut outcome = BuildOutcome::default();

	for package in packages {
		for map_ref in &package.declaration.alias_maps {
			let path = resolve_map_ref(base_dir, package, map_ref);
			if !path.exists() {
				debug!(
					package = %package.name,
					path = %path.display(),
					"referenced alias map is absent, skipping"
				);
				continue;
			}

			let entries = load_map_file(&path)?;
			outcome.entries_found |= !entries.is_empty();
			for (alias, canonical) in &entries {
				outcome.index.insert(alias, canonical);
			}
		}
	}

	Ok(outcome)
}

fn resolve_map_ref(base_dir: &Path, package: &InstalledPackage, map_ref: &Path) -> PathBuf {
	match &package.install_path {
		Some(install_path) => install_path.join(map_ref),
		None => base_dir.join(map_ref),
	}
}

/// Loads one mapping file: a JSON object of alias name → canonical name.
fn load_map_file(path: &Path) -> Result<IndexMap<String, String>> {
	let text = fs::read_to_string(path).map_err(|source| MapError::Io {
		path: path.to_owned(),
		source,
	})?;
	serde_json::from_str(&text).map_err(|source| MapError::MalformedMap {
		path: path.to_owned(),
		source,
	})
}
