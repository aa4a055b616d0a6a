//! On-disk configuration for a dashboard.
//!
//! Looked up from an explicit path, then `APIDASH_CONFIG`, then `<config dir>/apidash/config.json`.
//! Every field is optional; anything left out falls back to the built-in defaults.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::error::{DashboardError, Result};
use crate::render::{MissingNamePolicy, RenderMode};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV: &str = "APIDASH_CONFIG";
/// Environment variable overriding the base location.
pub const BASE_ENV: &str = "APIDASH_BASE";

/// Dashboard settings as read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "snake_case")]
pub struct DashboardConfig {
	/// Base URL or directory resources are resolved against.
	pub base: Option<String>,
	/// Ordered resource descriptors to load.
	pub resources: Option<Vec<String>>,
	/// Behaviour towards existing container children.
	pub render_mode: RenderMode,
	/// Treatment of entries lacking a name.
	pub missing_names: MissingNamePolicy,
	/// Custom display filter pattern.
	pub filter_pattern: Option<String>,
	/// Per-request timeout for HTTP sources, in seconds.
	pub timeout_secs: Option<u64>,
	/// Element id of the dashboard container.
	pub container_id: Option<String>,
}

impl DashboardConfig {
	/// Parse a configuration file.
	pub fn load(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path).map_err(|source| DashboardError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		serde_json::from_str(&raw).map_err(|err| DashboardError::Config {
			path: path.to_path_buf(),
			message: err.to_string(),
		})
	}

	/// Find and load the active configuration.
	///
	/// An explicit path or `APIDASH_CONFIG` must exist; the per-user default is only used when
	/// present. Returns the default configuration when nothing is found.
	pub fn discover(explicit: Option<&Path>) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		if let Some(path) = env::var_os(CONFIG_ENV) {
			return Self::load(Path::new(&path));
		}
		match default_config_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}

	/// Apply `APIDASH_BASE` if it is set.
	pub fn with_env_overrides(mut self) -> Self {
		if let Ok(base) = env::var(BASE_ENV) {
			if !base.trim().is_empty() {
				self.base = Some(base);
			}
		}
		self
	}

	/// Configured timeout as a duration.
	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}
}

/// Per-user configuration file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("apidash").join("config.json"))
}
