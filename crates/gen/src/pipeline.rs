//! One generation run, end to end.
//!
//! # Role
//!
//! Strictly sequential batch over already-discovered packages: merge the
//! mapping files, apply the policy gate, produce the artifacts. Every input
//! is read and validated before the first write, so a failing run leaves
//! the host's artifacts untouched.

use std::path::PathBuf;

use realias_map::{CasePolicy, InstalledPackage, build_alias_index};
use tracing::{debug, info};

use crate::artifact::{read_to_string, write_atomic};
use crate::bootstrap::{BootstrapPatch, BootstrapScript};
use crate::classmap::{self, ClassmapStatus};
use crate::error::Result;

/// Locations of the artifacts a generation run may touch.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
	/// Persisted alias index artifact (produced).
	pub index: PathBuf,
	/// The host's direct classmap artifact; rewritten under an insensitive
	/// policy when present.
	pub classmap: PathBuf,
	/// The host's generated bootstrap entry point, patched in place from
	/// the pristine content the host build supplies.
	pub bootstrap: PathBuf,
}

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
	/// Project base directory; mapping refs of packages without an install
	/// path resolve against it.
	pub base_dir: PathBuf,
	/// Discovered dependency packages, in discovery order.
	pub packages: Vec<InstalledPackage>,
	/// The root package. Its maps merge after every dependency's; its
	/// declaration alone decides the case policy.
	pub root: InstalledPackage,
	/// Artifact locations.
	pub paths: ArtifactPaths,
}

/// What a generation run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
	/// True when the run decided there is nothing to generate.
	pub skipped: bool,
	/// Files written, in write order. Empty for a skipped run.
	pub written: Vec<PathBuf>,
	/// What happened to the classmap; `None` under a sensitive policy.
	pub classmap: Option<ClassmapStatus>,
}

impl GenerationReport {
	fn skipped() -> Self {
		Self {
			skipped: true,
			..Self::default()
		}
	}
}

/// Runs the whole generation batch.
///
/// When no package contributed an alias entry and the root policy is case
/// sensitive, the run is a no-op and no artifact is touched. Otherwise the
/// index artifact is written, the classmap folded (insensitive policy
/// only), and the bootstrap patched, in that order.
///
/// # Errors
///
/// Any rejected input — declaration, mapping file, classmap, bootstrap —
/// aborts the run before the first artifact write.
pub fn generate(request: &GenerationRequest) -> Result<GenerationReport> {
	let policy = CasePolicy::from_root(&request.root.declaration);
	let outcome = build_alias_index(
		&request.base_dir,
		request.packages.iter().chain([&request.root]),
	)?;

	if !policy.generation_required(outcome.entries_found) {
		debug!("no alias entries and a case-sensitive policy, nothing to generate");
		return Ok(GenerationReport::skipped());
	}

	// Validate and render everything before the first write.
	let pristine = read_to_string(&request.paths.bootstrap)?;
	let script = BootstrapScript::parse(&request.paths.bootstrap, &pristine)?;
	let patched = script.render_patched(&BootstrapPatch {
		index_ref: request.paths.index.to_string_lossy().into_owned(),
		case_insensitive: policy.is_insensitive(),
	});
	let classmap_plan = if policy.is_insensitive() {
		Some(classmap::plan_fold(&request.paths.classmap)?)
	} else {
		None
	};

	let mut report = GenerationReport::default();

	outcome.index.save(&request.paths.index)?;
	info!(
		path = %request.paths.index.display(),
		aliases = outcome.index.len(),
		"wrote alias index"
	);
	report.written.push(request.paths.index.clone());

	if let Some(plan) = classmap_plan {
		let status = classmap::commit(&request.paths.classmap, plan)?;
		if status == ClassmapStatus::Folded {
			report.written.push(request.paths.classmap.clone());
		}
		report.classmap = Some(status);
	}

	write_atomic(&request.paths.bootstrap, &patched)?;
	info!(path = %request.paths.bootstrap.display(), "patched bootstrap entry point");
	report.written.push(request.paths.bootstrap.clone());

	Ok(report)
}
