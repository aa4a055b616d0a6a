use std::fs;
use std::path::{Path, PathBuf};

use super::ResourceSource;
use crate::core_api::error::{DashboardError, Result};

/// Resolves descriptors relative to a directory on disk, the way a static file server would.
#[derive(Debug, Clone)]
pub struct FsSource {
	root: PathBuf,
}

impl FsSource {
	/// Serve resources from `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	/// Directory descriptors are resolved against.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Filesystem location for a descriptor. Leading slashes are ignored so that
	/// `/data/api.json` stays inside the root.
	pub fn resolve(&self, resource: &str) -> PathBuf {
		self.root.join(resource.trim_start_matches('/'))
	}
}

impl ResourceSource for FsSource {
	fn fetch(&self, resource: &str) -> Result<String> {
		let path = self.resolve(resource);
		fs::read_to_string(&path).map_err(|source| DashboardError::Io { path, source })
	}
}
