//! Error types for alias map construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading declarations or merging alias maps.
#[derive(Debug, Error)]
pub enum MapError {
	/// A package's alias declaration does not have the recognized shape.
	#[error("invalid alias declaration for package '{package}': {source}")]
	Declaration {
		/// Name of the package whose declaration was rejected.
		package: String,
		#[source]
		source: serde_json::Error,
	},

	/// A referenced file exists but could not be read, or an artifact could
	/// not be written.
	#[error("io error on {path}: {source}")]
	Io {
		/// Path of the file involved.
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// A mapping file does not evaluate to an alias-to-canonical mapping.
	#[error("alias map {path} is not an alias-to-canonical mapping: {source}")]
	MalformedMap {
		/// Path of the rejected mapping file.
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	/// A persisted index artifact could not be parsed.
	#[error("invalid alias index artifact {path}: {source}")]
	MalformedIndex {
		/// Path of the rejected artifact.
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Result type for alias map operations.
pub type Result<T> = std::result::Result<T, MapError>;
