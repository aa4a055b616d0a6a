//! Shared helpers for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Create a site directory containing `files` (relative path, contents).
pub fn create_site(files: &[(&str, &str)]) -> TempDir {
	let temp_dir = TempDir::new().unwrap();
	for (relative, contents) in files {
		write_file(temp_dir.path(), relative, contents);
	}
	temp_dir
}

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(path, contents).unwrap();
}

/// The two listings used throughout the end-to-end tests.
pub fn default_site() -> TempDir {
	create_site(&[
		("data/api/plugin.json", r#"[{"name":"init()","path":"/p1"}]"#),
		("data/api/api.json", r#"[{"name":"call()","path":"/p2"}]"#),
	])
}
