use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use ureq::{Agent, http};

use super::ResourceSource;
use crate::core_api::error::{DashboardError, Result};

/// Fetches resources over HTTP relative to a base URL.
///
/// Requests are blocking. Without a timeout a stalled server stalls the caller, which matches
/// how a browser page waits on `fetch`.
#[derive(Debug, Clone)]
pub struct HttpSource {
	base: String,
	timeout: Option<Duration>,
}

impl HttpSource {
	/// Create a source rooted at `base` (e.g. `http://localhost:8000/`).
	pub fn new(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			timeout: None,
		}
	}

	/// Bound the total time spent on each request.
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}

	/// Absolute URL for a descriptor.
	pub fn url_for(&self, resource: &str) -> String {
		if resource.contains("://") {
			return resource.to_string();
		}
		format!(
			"{}/{}",
			self.base.trim_end_matches('/'),
			resource.trim_start_matches('/')
		)
	}

	fn agent(&self) -> Agent {
		Agent::config_builder()
			.timeout_global(self.timeout)
			.build()
			.into()
	}

	fn request(&self, url: &str, resource: &str) -> Result<http::Response<ureq::Body>> {
		self.agent().get(url).call().map_err(|err| DashboardError::Fetch {
			resource: resource.to_string(),
			message: err.to_string(),
		})
	}
}

impl ResourceSource for HttpSource {
	fn fetch(&self, resource: &str) -> Result<String> {
		let url = self.url_for(resource);
		tracing::debug!(%url, "requesting resource");
		let mut response = self.request(&url, resource)?;

		let mut body = String::new();
		response
			.body_mut()
			.as_reader()
			.read_to_string(&mut body)
			.map_err(|source| DashboardError::Io {
				path: PathBuf::from(&url),
				source,
			})?;

		Ok(body)
	}
}
