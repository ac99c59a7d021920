//! Classmap case folding.
//!
//! Under an insensitive policy the host's direct classmap must answer
//! folded lookups, so every key is lowercased in place. Values are opaque
//! artifact locations and pass through untouched; this module never
//! inspects them.

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::artifact::{read_to_string, write_atomic};
use crate::error::{GenError, Result};

/// Outcome of one classmap folding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassmapStatus {
	/// Keys were folded and the artifact rewritten.
	Folded,
	/// Every key was already lowercase; the artifact was left untouched.
	AlreadyFolded,
	/// No classmap artifact exists at the given path.
	Absent,
}

/// Staged fold, computed before any artifact write.
#[derive(Debug)]
pub(crate) enum ClassmapPlan {
	Absent,
	AlreadyFolded,
	Fold { rendered: String, entries: usize },
}

/// Reads and folds the classmap at `path` without writing anything.
pub(crate) fn plan_fold(path: &Path) -> Result<ClassmapPlan> {
	if !path.exists() {
		return Ok(ClassmapPlan::Absent);
	}

	let text = read_to_string(path)?;
	let map: IndexMap<String, serde_json::Value> =
		serde_json::from_str(&text).map_err(|_| GenError::MalformedClassmap {
			path: path.to_owned(),
		})?;

	let mut folded = IndexMap::with_capacity(map.len());
	let mut changed = false;
	for (key, value) in map {
		let lower = key.to_lowercase();
		changed |= lower != key;
		folded.insert(lower, value);
	}
	if !changed {
		return Ok(ClassmapPlan::AlreadyFolded);
	}

	let mut rendered = serde_json::to_string_pretty(&folded)
		.map_err(|source| GenError::Io {
			path: path.to_owned(),
			source: std::io::Error::from(source),
		})?;
	rendered.push('\n');
	Ok(ClassmapPlan::Fold {
		rendered,
		entries: folded.len(),
	})
}

/// Commits a staged fold.
pub(crate) fn commit(path: &Path, plan: ClassmapPlan) -> Result<ClassmapStatus> {
	match plan {
		ClassmapPlan::Absent => {
			debug!(path = %path.display(), "no classmap artifact, skipping fold");
			Ok(ClassmapStatus::Absent)
		}
		ClassmapPlan::AlreadyFolded => Ok(ClassmapStatus::AlreadyFolded),
		ClassmapPlan::Fold { rendered, entries } => {
			write_atomic(path, &rendered)?;
			info!(path = %path.display(), entries, "folded classmap keys");
			Ok(ClassmapStatus::Folded)
		}
	}
}

/// Lowercases every key of the classmap at `path`, preserving values.
///
/// Idempotent: a second pass reports [`ClassmapStatus::AlreadyFolded`] and
/// leaves the artifact byte-identical.
pub fn fold_classmap(path: &Path) -> Result<ClassmapStatus> {
	let plan = plan_fold(path)?;
	commit(path, plan)
}
