//! Initializer behavior: artifact load, claim, per-process caching.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use realias_map::AliasIndex;
use realias_resolver::{InitOptions, ModuleLoader, initialize, resolve_canonical_name};

struct KnownLoader;

impl ModuleLoader for KnownLoader {
	fn find_file(&self, name: &str) -> Option<PathBuf> {
		(name == "Acme\\New").then(|| PathBuf::from("src/Acme/New.mod"))
	}
}

#[test]
fn initialize_installs_once_and_caches_thereafter() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("aliases.json");
	let mut index = AliasIndex::default();
	index.insert("Acme\\Old", "Acme\\New");
	index.save(&path).unwrap();

	let options = InitOptions {
		index_path: path.clone(),
		case_insensitive: true,
	};
	let first = initialize(Box::new(KnownLoader), &options).unwrap();
	assert_eq!(
		first.find_name("ACME\\OLD"),
		Some(PathBuf::from("src/Acme/New.mod"))
	);

	// A later call returns the installed resolver without reloading the
	// artifact; deleting it makes a reload observable.
	std::fs::remove_file(&path).unwrap();
	let second = initialize(Box::new(KnownLoader), &options).unwrap();
	assert!(std::ptr::eq(first, second));
	assert_eq!(resolve_canonical_name("acme\\old"), "Acme\\New");
}
