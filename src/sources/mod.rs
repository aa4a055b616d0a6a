//! Locations that resource descriptors are resolved against.
//!
//! A [`ResourceSource`] turns a descriptor such as `data/api/plugin.json` into the raw text of
//! that document. The loader only ever calls [`ResourceSource::fetch`], one resource at a time.

/// HTTP-backed source.
pub mod http;
/// Filesystem-backed source.
pub mod path;

use std::collections::HashMap;

pub use self::http::HttpSource;
pub use self::path::FsSource;
use crate::core_api::error::{DashboardError, Result};

/// Something that can produce the body of a resource descriptor.
pub trait ResourceSource {
	/// Fetch the full body of `resource` as text. Blocks until the body is read.
	fn fetch(&self, resource: &str) -> Result<String>;
}

impl<S: ResourceSource + ?Sized> ResourceSource for &S {
	fn fetch(&self, resource: &str) -> Result<String> {
		(**self).fetch(resource)
	}
}

impl<S: ResourceSource + ?Sized> ResourceSource for Box<S> {
	fn fetch(&self, resource: &str) -> Result<String> {
		(**self).fetch(resource)
	}
}

/// In-memory documents keyed by descriptor. Unknown descriptors fail like a 404.
impl ResourceSource for HashMap<String, String> {
	fn fetch(&self, resource: &str) -> Result<String> {
		self.get(resource)
			.cloned()
			.ok_or_else(|| DashboardError::Fetch {
				resource: resource.to_string(),
				message: "not found".to_string(),
			})
	}
}

/// Pick a source for a base location: `http://` and `https://` bases go over the network,
/// everything else is treated as a directory.
pub fn source_for_base(base: &str, timeout: Option<std::time::Duration>) -> Box<dyn ResourceSource> {
	if is_http_base(base) {
		Box::new(HttpSource::new(base).with_timeout(timeout))
	} else {
		Box::new(FsSource::new(base))
	}
}

fn is_http_base(base: &str) -> bool {
	let lower = base.trim_start().to_ascii_lowercase();
	lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn map_source_returns_known_documents() {
		let mut docs = HashMap::new();
		docs.insert("a.json".to_string(), "[]".to_string());
		assert_eq!(docs.fetch("a.json").unwrap(), "[]");
		let err = docs.fetch("b.json").unwrap_err();
		assert_eq!(err.to_string(), "failed to fetch b.json: not found");
	}

	#[test]
	fn http_bases_are_detected() {
		assert!(is_http_base("http://localhost:8000"));
		assert!(is_http_base("HTTPS://example.com/docs"));
		assert!(!is_http_base("./site"));
		assert!(!is_http_base("/srv/http"));
	}
}
