//! Error types for artifact generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a generation run.
#[derive(Debug, Error)]
pub enum GenError {
	/// A package declaration or mapping file was rejected.
	#[error(transparent)]
	Map(#[from] realias_map::MapError),

	/// The host bootstrap artifact does not have the expected shape.
	///
	/// An unrecognized bootstrap is never rewritten.
	#[error("bootstrap artifact {path} is not recognized: {reason}")]
	Bootstrap {
		/// Path of the rejected bootstrap artifact.
		path: PathBuf,
		/// What made the content unrecognizable.
		reason: String,
	},

	/// The host classmap artifact exists but is not a flat mapping.
	#[error("classmap artifact {path} is not a flat name-to-location mapping")]
	MalformedClassmap {
		/// Path of the rejected classmap artifact.
		path: PathBuf,
	},

	/// An artifact could not be read or written.
	#[error("io error on {path}: {source}")]
	Io {
		/// Path of the file involved.
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
