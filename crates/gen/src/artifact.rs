//! Atomic artifact writes.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{GenError, Result};

/// Writes `contents` to `path` through a temp file in the target directory
/// and a rename, so readers never observe a partial artifact.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
	let io_error = |source: std::io::Error| GenError::Io {
		path: path.to_owned(),
		source,
	};

	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};
	let mut staged = NamedTempFile::new_in(dir).map_err(io_error)?;
	staged.write_all(contents.as_bytes()).map_err(io_error)?;
	staged
		.persist(path)
		.map_err(|persist| io_error(persist.error))?;
	Ok(())
}

/// Reads an artifact into a string.
pub(crate) fn read_to_string(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| GenError::Io {
		path: path.to_owned(),
		source,
	})
}
