//! High-level API tying a resource source, the resource list, and the renderer together.
//!
//! [`Dashboard`] is UI-agnostic: it renders into any [`NodeSink`], so the same configuration can
//! drive the HTML output of the CLI or an in-memory target in tests.

/// Configuration file handling.
pub mod config;
/// Error helpers for the core API.
pub mod error;
/// Display filter applied to entry names.
pub mod pattern;

pub use self::config::DashboardConfig;
pub use self::error::{DashboardError, Result};
pub use self::pattern::DisplayFilter;
use crate::loader::{GroupedEntries, load_grouped};
use crate::render::{MissingNamePolicy, NodeSink, RenderMode, Renderer};
use crate::sources::{ResourceSource, source_for_base};

/// Resources loaded when none are configured.
pub const DEFAULT_RESOURCES: [&str; 2] = ["data/api/plugin.json", "data/api/api.json"];

/// Base location used when none is configured: the current directory.
pub const DEFAULT_BASE: &str = ".";

/// Loads the configured resources and renders them as dashboard sections.
#[derive(Debug, Clone)]
pub struct Dashboard<S> {
	/// Where resource descriptors are resolved.
	source: S,

	/// Ordered resource descriptors.
	resources: Vec<String>,

	/// Rendering policies.
	renderer: Renderer,
}

impl Dashboard<Box<dyn ResourceSource>> {
	/// Build a dashboard from a configuration, choosing an HTTP or filesystem source from its base.
	pub fn from_config(config: &DashboardConfig) -> Result<Self> {
		let base = config.base.as_deref().unwrap_or(DEFAULT_BASE);
		let mut dashboard = Self::new(source_for_base(base, config.timeout()))
			.with_render_mode(config.render_mode)
			.with_missing_name_policy(config.missing_names);

		if let Some(resources) = &config.resources {
			dashboard = dashboard.with_resources(resources.iter().cloned());
		}
		if let Some(pattern) = &config.filter_pattern {
			dashboard = dashboard.with_filter_pattern(pattern)?;
		}
		Ok(dashboard)
	}
}

impl<S: ResourceSource> Dashboard<S> {
	/// Dashboard over `source` with the default resource list and append-only rendering.
	pub fn new(source: S) -> Self {
		Self {
			source,
			resources: DEFAULT_RESOURCES.iter().map(|r| r.to_string()).collect(),
			renderer: Renderer::default(),
		}
	}

	/// Replace the resource list. Order determines load order and section order.
	pub fn with_resources<I, R>(mut self, resources: I) -> Self
	where
		I: IntoIterator<Item = R>,
		R: Into<String>,
	{
		self.resources = resources.into_iter().map(Into::into).collect();
		self
	}

	/// Select whether rendering clears the container first.
	pub fn with_render_mode(mut self, mode: RenderMode) -> Self {
		self.renderer.mode = mode;
		self
	}

	/// Select how entries without a name are handled.
	pub fn with_missing_name_policy(mut self, policy: MissingNamePolicy) -> Self {
		self.renderer.missing_names = policy;
		self
	}

	/// Replace the display filter with a custom pattern.
	pub fn with_filter_pattern(mut self, pattern: &str) -> Result<Self> {
		self.renderer.filter = DisplayFilter::new(pattern)?;
		Ok(self)
	}

	/// Configured resource descriptors.
	pub fn resources(&self) -> &[String] {
		&self.resources
	}

	/// Active renderer.
	pub fn renderer(&self) -> &Renderer {
		&self.renderer
	}

	/// Load every configured resource, in order, into a fresh grouped mapping.
	pub fn load(&self) -> GroupedEntries {
		load_grouped(&self.source, &self.resources)
	}

	/// Load the resources and render them into `sink`.
	pub fn render_into<K: NodeSink + ?Sized>(&self, sink: &mut K) -> Result<()> {
		let groups = self.load();
		self.renderer.render(sink, &groups)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::render::Node;

	fn source() -> HashMap<String, String> {
		HashMap::from([
			(
				"data/api/plugin.json".to_string(),
				r#"[{"name":"init()","path":"/p1"}]"#.to_string(),
			),
			(
				"data/api/api.json".to_string(),
				r#"[{"name":"call()","path":"/p2"}]"#.to_string(),
			),
		])
	}

	#[test]
	fn renders_default_resources_in_order() {
		let dashboard = Dashboard::new(source());
		let mut nodes: Vec<Node> = Vec::new();
		dashboard.render_into(&mut nodes).unwrap();
		assert_eq!(
			nodes,
			vec![
				Node::heading("Plugin"),
				Node::entry("init()", "/p1"),
				Node::heading("Api"),
				Node::entry("call()", "/p2"),
			]
		);
	}

	#[test]
	fn custom_resource_list_controls_order() {
		let dashboard = Dashboard::new(source()).with_resources(["data/api/api.json"]);
		assert_eq!(dashboard.resources(), &["data/api/api.json".to_string()]);
		assert_eq!(dashboard.load().titles().collect::<Vec<_>>(), vec!["Api"]);
	}

	#[test]
	fn invalid_filter_pattern_is_reported() {
		let err = Dashboard::new(source()).with_filter_pattern("[").unwrap_err();
		assert!(matches!(err, DashboardError::Pattern(_)), "unexpected error {err}");
	}

	#[test]
	fn from_config_uses_filesystem_base() {
		let tmp = tempfile::tempdir().unwrap();
		std::fs::write(tmp.path().join("tools.json"), r#"{"name":"run()","path":"/run"}"#).unwrap();

		let config = DashboardConfig {
			base: Some(tmp.path().display().to_string()),
			resources: Some(vec!["tools.json".to_string()]),
			render_mode: RenderMode::ClearFirst,
			..DashboardConfig::default()
		};
		let dashboard = Dashboard::from_config(&config).unwrap();
		assert_eq!(dashboard.renderer().mode, RenderMode::ClearFirst);

		let mut nodes = vec![Node::heading("stale")];
		dashboard.render_into(&mut nodes).unwrap();
		assert_eq!(nodes, vec![Node::heading("Tools"), Node::entry("run()", "/run")]);
	}
}
