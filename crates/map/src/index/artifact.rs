//! Index artifact persistence.
//!
//! The artifact is a single JSON object with exactly the two top-level
//! keys `aliasToCanonical` and `canonicalToAliases`. Writes go through a
//! temp file in the target directory and a rename, so readers never see a
//! partial artifact.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::AliasIndex;
use crate::error::{MapError, Result};

impl AliasIndex {
	/// Loads a persisted index artifact.
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(|source| MapError::Io {
			path: path.to_owned(),
			source,
		})?;
		serde_json::from_str(&text).map_err(|source| MapError::MalformedIndex {
			path: path.to_owned(),
			source,
		})
	}

	/// Persists the index artifact atomically.
	pub fn save(&self, path: &Path) -> Result<()> {
		let io_error = |source: std::io::Error| MapError::Io {
			path: path.to_owned(),
			source,
		};

		let dir = match path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};
		let mut staged = NamedTempFile::new_in(dir).map_err(io_error)?;
		serde_json::to_writer_pretty(&mut staged, self)
			.map_err(|source| io_error(std::io::Error::from(source)))?;
		staged.write_all(b"\n").map_err(io_error)?;
		staged
			.persist(path)
			.map_err(|persist| io_error(persist.error))?;
		Ok(())
	}
}
