//! Bootstrap integration.
//!
//! # Role
//!
//! The host's generated bootstrap entry point ends with a statement
//! returning the result of initializing the host's own loader. This module
//! models that file structurally — preamble statements plus the trailing
//! loader-init expression — and re-renders it so the resolver initializer
//! wraps the original expression. Content that does not match the model is
//! rejected loudly and never rewritten.
//!
//! Each generation run derives the patched file from pristine
//! host-generated content; prior patches are neither detected nor undone.

use std::path::Path;

use crate::error::{GenError, Result};

/// Module the patched bootstrap loads for the resolver initializer.
const INITIALIZER_MODULE: &str = "realias_resolver";

/// Structural model of the bootstrap entry point: the statements ahead of
/// the trailing return, and the host-loader-init expression it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapScript {
	preamble: Vec<String>,
	init_expr: String,
}

/// Parameters spliced into the patched bootstrap.
#[derive(Debug, Clone)]
pub struct BootstrapPatch {
	/// Alias index artifact location handed to the initializer.
	pub index_ref: String,
	/// Effective case-insensitivity flag handed to the initializer.
	pub case_insensitive: bool,
}

impl BootstrapScript {
	/// Parses pristine host-generated bootstrap content.
	///
	/// # Errors
	///
	/// Fails when the final significant statement is not `return <expr>;`.
	pub fn parse(path: &Path, content: &str) -> Result<Self> {
		let reject = |reason: String| GenError::Bootstrap {
			path: path.to_owned(),
			reason,
		};

		let lines: Vec<&str> = content.lines().collect();
		let Some(return_at) = lines.iter().rposition(|line| is_significant(line)) else {
			return Err(reject("no statements found".to_owned()));
		};

		let statement = lines[return_at].trim();
		let expr = statement
			.strip_prefix("return ")
			.and_then(|rest| rest.strip_suffix(';'))
			.map(str::trim)
			.ok_or_else(|| reject(format!("final statement is not a return: `{statement}`")))?;
		if expr.is_empty() {
			return Err(reject("return statement has no expression".to_owned()));
		}

		Ok(Self {
			preamble: lines[..return_at].iter().map(|line| (*line).to_owned()).collect(),
			init_expr: expr.to_owned(),
		})
	}

	/// The host-loader-init expression the pristine file returned.
	pub fn init_expr(&self) -> &str {
		&self.init_expr
	}

	/// Renders the patched bootstrap.
	///
	/// The original return is dropped from its position; the appended
	/// trailing sequence loads the resolver initializer, hands it the
	/// original loader-init expression together with the index location and
	/// the insensitivity flag, and returns its result.
	pub fn render_patched(&self, patch: &BootstrapPatch) -> String {
		let mut out = String::new();
		for line in &self.preamble {
			out.push_str(line);
			out.push('\n');
		}
		out.push_str(&format!("load \"{INITIALIZER_MODULE}\";\n"));
		out.push_str(&format!(
			"return {INITIALIZER_MODULE}::initialize({}, \"{}\", {});\n",
			self.init_expr, patch.index_ref, patch.case_insensitive
		));
		out
	}
}

fn is_significant(line: &str) -> bool {
	let trimmed = line.trim();
	!trimmed.is_empty() && !trimmed.starts_with("//")
}
