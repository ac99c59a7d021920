//! Generation pipeline, end to end.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use realias_gen::{ArtifactPaths, ClassmapStatus, GenerationRequest, generate};
use realias_map::{AliasDeclaration, AliasIndex, CasePolicy, InstalledPackage};
use realias_resolver::{AliasResolver, ModuleLoader};

const PRISTINE_BOOTSTRAP: &str =
	"// generated by the host loader\nload \"loader\";\n\nreturn loader::init(\"app\");\n";
const CLASSMAP: &str = "{\n  \"Acme\\\\New\": \"src/Acme/New.mod\"\n}\n";

struct Host {
	dir: tempfile::TempDir,
}

impl Host {
	fn new() -> Self {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("bootstrap"), PRISTINE_BOOTSTRAP).unwrap();
		fs::write(dir.path().join("classmap.json"), CLASSMAP).unwrap();
		Self { dir }
	}

	fn base(&self) -> &Path {
		self.dir.path()
	}

	fn paths(&self) -> ArtifactPaths {
		ArtifactPaths {
			index: self.base().join("aliases.json"),
			classmap: self.base().join("classmap.json"),
			bootstrap: self.base().join("bootstrap"),
		}
	}

	fn package(&self, name: &str, map: Option<&str>) -> InstalledPackage {
		let install = self.base().join(name);
		fs::create_dir_all(&install).unwrap();
		let declaration = match map {
			Some(contents) => {
				fs::write(install.join("aliases.json"), contents).unwrap();
				AliasDeclaration {
					alias_maps: vec![PathBuf::from("aliases.json")],
					..AliasDeclaration::default()
				}
			}
			None => AliasDeclaration::default(),
		};
		InstalledPackage::new(name, Some(install), declaration)
	}

	fn root(&self, case_sensitive: bool) -> InstalledPackage {
		InstalledPackage::new(
			"acme/root",
			None,
			AliasDeclaration {
				case_sensitive,
				..AliasDeclaration::default()
			},
		)
	}

	fn request(&self, packages: Vec<InstalledPackage>, root: InstalledPackage) -> GenerationRequest {
		GenerationRequest {
			base_dir: self.base().to_owned(),
			packages,
			root,
			paths: self.paths(),
		}
	}
}

#[test]
fn end_to_end_sensitive_scenario() {
	let host = Host::new();
	let a = host.package("acme/a", Some(r#"{"Acme\\Old": "Acme\\New"}"#));
	let b = host.package("acme/b", None);
	let request = host.request(vec![a, b], host.root(true));

	let report = generate(&request).unwrap();
	assert!(!report.skipped);
	assert_eq!(
		report.written,
		vec![host.base().join("aliases.json"), host.base().join("bootstrap")]
	);
	assert_eq!(report.classmap, None);

	// The index artifact carries the folded alias and the verbatim
	// canonical, under exactly the two documented keys.
	let index: serde_json::Value =
		serde_json::from_str(&fs::read_to_string(host.base().join("aliases.json")).unwrap()).unwrap();
	assert_eq!(index["aliasToCanonical"]["acme\\old"], "Acme\\New");
	assert_eq!(index["canonicalToAliases"]["Acme\\New"][0], "acme\\old");
	assert_eq!(index.as_object().unwrap().len(), 2);

	// Sensitive policy: the classmap is untouched.
	assert_eq!(fs::read_to_string(host.base().join("classmap.json")).unwrap(), CLASSMAP);

	// The bootstrap wraps the original init expression in the resolver
	// initializer and keeps the preamble.
	let bootstrap = fs::read_to_string(host.base().join("bootstrap")).unwrap();
	assert!(bootstrap.starts_with("// generated by the host loader\nload \"loader\";\n"));
	assert!(bootstrap.contains("realias_resolver::initialize(loader::init(\"app\"), "));
	assert!(bootstrap.trim_end().ends_with("false);"));
	assert!(!bootstrap.contains("\nreturn loader::init(\"app\");"));
}

#[test]
fn no_aliases_and_sensitive_policy_is_a_byte_identical_no_op() {
	let host = Host::new();
	let a = host.package("acme/a", None);
	let request = host.request(vec![a], host.root(true));

	let report = generate(&request).unwrap();
	assert!(report.skipped);
	assert_eq!(report.written, Vec::<PathBuf>::new());

	assert!(!host.base().join("aliases.json").exists());
	assert_eq!(fs::read_to_string(host.base().join("bootstrap")).unwrap(), PRISTINE_BOOTSTRAP);
	assert_eq!(fs::read_to_string(host.base().join("classmap.json")).unwrap(), CLASSMAP);
}

#[test]
fn insensitive_policy_generates_even_with_zero_aliases() {
	let host = Host::new();
	let request = host.request(vec![host.package("acme/a", None)], host.root(false));

	let report = generate(&request).unwrap();
	assert!(!report.skipped);
	assert_eq!(report.classmap, Some(ClassmapStatus::Folded));

	let index = AliasIndex::load(&host.base().join("aliases.json")).unwrap();
	assert!(index.is_empty());

	let classmap: serde_json::Value =
		serde_json::from_str(&fs::read_to_string(host.base().join("classmap.json")).unwrap())
			.unwrap();
	assert_eq!(classmap["acme\\new"], "src/Acme/New.mod");

	let bootstrap = fs::read_to_string(host.base().join("bootstrap")).unwrap();
	assert!(bootstrap.trim_end().ends_with("true);"));
}

#[test]
fn a_rejected_mapping_file_leaves_every_artifact_untouched() {
	let host = Host::new();
	let bad = host.package("acme/bad", Some(r#"["not", "a", "mapping"]"#));
	let request = host.request(vec![bad], host.root(false));

	generate(&request).unwrap_err();

	assert!(!host.base().join("aliases.json").exists());
	assert_eq!(fs::read_to_string(host.base().join("bootstrap")).unwrap(), PRISTINE_BOOTSTRAP);
	assert_eq!(fs::read_to_string(host.base().join("classmap.json")).unwrap(), CLASSMAP);
}

#[test]
fn an_unrecognized_bootstrap_aborts_before_any_write() {
	let host = Host::new();
	fs::write(host.base().join("bootstrap"), "loader::init(\"app\");\n").unwrap();
	let a = host.package("acme/a", Some(r#"{"Acme\\Old": "Acme\\New"}"#));
	let request = host.request(vec![a], host.root(true));

	generate(&request).unwrap_err();

	assert!(!host.base().join("aliases.json").exists());
	assert_eq!(fs::read_to_string(host.base().join("classmap.json")).unwrap(), CLASSMAP);
}

#[test]
fn later_packages_win_alias_collisions_and_the_root_merges_last() {
	let host = Host::new();
	let a = host.package("acme/a", Some(r#"{"Shared\\Name": "A\\Target"}"#));
	let b = host.package("acme/b", Some(r#"{"shared\\name": "B\\Target"}"#));
	fs::write(host.base().join("root-aliases.json"), r#"{"SHARED\\NAME": "Root\\Target"}"#).unwrap();
	let mut root = host.root(true);
	root.declaration.alias_maps = vec![PathBuf::from("root-aliases.json")];
	let request = host.request(vec![a, b], root);

	generate(&request).unwrap();

	let index = AliasIndex::load(&host.base().join("aliases.json")).unwrap();
	assert_eq!(index.canonical_for("shared\\name"), Some("Root\\Target"));
	assert_eq!(index.len(), 1);
}

/// Stub host loader for driving the generated index through the runtime
/// resolver.
struct KnownLoader;

impl ModuleLoader for KnownLoader {
	fn find_file(&self, name: &str) -> Option<PathBuf> {
		(name == "Acme\\New").then(|| PathBuf::from("src/Acme/New.mod"))
	}
}

#[test]
fn generated_index_resolves_old_spellings_through_the_decorator() {
	let host = Host::new();
	let a = host.package("acme/a", Some(r#"{"Acme\\Old": "Acme\\New"}"#));
	let request = host.request(vec![a], host.root(false));
	generate(&request).unwrap();

	let index = AliasIndex::load(&host.base().join("aliases.json")).unwrap();
	let resolver = AliasResolver::new(Box::new(KnownLoader), index, CasePolicy::Insensitive);

	let expected = Some(PathBuf::from("src/Acme/New.mod"));
	assert_eq!(resolver.find_name("Acme\\Old"), expected);
	assert_eq!(resolver.find_name("oldname-free\\Miss"), None);
	assert_eq!(resolver.find_name("ACME\\OLD"), expected);
	assert_eq!(resolver.find_name("acme\\new"), expected);
	assert_eq!(resolver.find_name("Acme\\New"), expected);
}
