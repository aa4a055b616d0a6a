use serde::Deserialize;

use super::utils::locale_cmp;
use super::{Node, NodeSink};
use crate::core_api::error::{DashboardError, Result};
use crate::core_api::pattern::DisplayFilter;
use crate::loader::{Entry, Group, GroupedEntries};

/// What happens to existing children when rendering into a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderMode {
	/// Append after whatever is already there. Rendering twice duplicates every section.
	#[default]
	Append,
	/// Clear the container before rendering.
	ClearFirst,
}

/// How entries without a string `name` are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingNamePolicy {
	/// Drop them, like any other name that fails the display filter.
	#[default]
	Skip,
	/// Fail the render with [`DashboardError::MissingName`].
	Reject,
}

/// Configurable renderer that turns grouped entries into dashboard nodes.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
	/// Behaviour towards pre-existing children.
	pub mode: RenderMode,
	/// Treatment of entries lacking a name.
	pub missing_names: MissingNamePolicy,
	/// Filter deciding which names are shown.
	pub filter: DisplayFilter,
}

impl Renderer {
	/// Create a renderer with the default append-only behaviour.
	pub fn new() -> Self {
		Self::default()
	}

	/// Select how existing children are handled.
	pub fn with_mode(mut self, mode: RenderMode) -> Self {
		self.mode = mode;
		self
	}

	/// Select the missing-name policy.
	pub fn with_missing_names(mut self, policy: MissingNamePolicy) -> Self {
		self.missing_names = policy;
		self
	}

	/// Replace the display filter.
	pub fn with_filter(mut self, filter: DisplayFilter) -> Self {
		self.filter = filter;
		self
	}

	/// Entries of `group` that should be displayed, sorted by name.
	pub fn visible_entries<'g>(&self, group: &'g Group) -> Result<Vec<&'g Entry>> {
		if self.missing_names == MissingNamePolicy::Reject {
			if let Some(index) = group.entries.iter().position(|entry| entry.name().is_none()) {
				return Err(DashboardError::MissingName {
					title: group.title.clone(),
					index,
				});
			}
		}

		let mut visible: Vec<&Entry> = group
			.entries
			.iter()
			.filter(|entry| entry.name().is_some_and(|name| self.filter.accepts(name)))
			.collect();
		visible.sort_by(|a, b| locale_cmp(a.name().unwrap_or_default(), b.name().unwrap_or_default()));
		Ok(visible)
	}

	/// Append a heading and one entry box per visible entry for every group, in mapping order.
	///
	/// Every group is checked before anything is appended, so a rejected entry leaves the sink
	/// untouched.
	pub fn render<S: NodeSink + ?Sized>(&self, sink: &mut S, groups: &GroupedEntries) -> Result<()> {
		let mut sections = Vec::with_capacity(groups.len());
		for group in groups {
			sections.push((group.title.as_str(), self.visible_entries(group)?));
		}

		if self.mode == RenderMode::ClearFirst {
			sink.clear();
		}

		for (title, entries) in sections {
			sink.append(Node::heading(title));
			for entry in entries {
				sink.append(Node::entry(entry.name().unwrap_or_default(), entry.href()));
			}
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn group(title: &str, names: &[&str]) -> GroupedEntries {
		let mut grouped = GroupedEntries::new();
		grouped.extend(
			title,
			names.iter().map(|name| Entry::new(*name, format!("/{name}"))),
		);
		grouped
	}

	#[test]
	fn filters_to_bare_calls() {
		let groups = group("Api", &["foo()", "foo", " foo()", "foo() ", "bar()"]);
		let mut nodes: Vec<Node> = Vec::new();
		Renderer::new().render(&mut nodes, &groups).unwrap();
		assert_eq!(
			nodes,
			vec![
				Node::heading("Api"),
				Node::entry("bar()", "/bar()"),
				Node::entry("foo()", "/foo()"),
			]
		);
	}

	#[test]
	fn sorts_with_locale_order() {
		let groups = group("Api", &["zeta()", "alpha()", "Beta()"]);
		let grouped = groups.iter().next().unwrap();
		let names: Vec<_> = Renderer::new()
			.visible_entries(grouped)
			.unwrap()
			.into_iter()
			.filter_map(Entry::name)
			.collect();
		assert_eq!(names, vec!["alpha()", "Beta()", "zeta()"]);
	}

	#[test]
	fn heading_is_emitted_for_groups_without_visible_entries() {
		let groups = group("Plugin", &["notACall"]);
		let mut nodes: Vec<Node> = Vec::new();
		Renderer::new().render(&mut nodes, &groups).unwrap();
		assert_eq!(nodes, vec![Node::heading("Plugin")]);
	}

	#[test]
	fn append_mode_duplicates_on_rerender() {
		let groups = group("Api", &["call()"]);
		let renderer = Renderer::new();
		let mut nodes: Vec<Node> = Vec::new();
		renderer.render(&mut nodes, &groups).unwrap();
		renderer.render(&mut nodes, &groups).unwrap();
		assert_eq!(nodes.len(), 4);
		assert_eq!(nodes[0..2], nodes[2..4]);
	}

	#[test]
	fn clear_first_replaces_previous_output() {
		let groups = group("Api", &["call()"]);
		let renderer = Renderer::new().with_mode(RenderMode::ClearFirst);
		let mut nodes = vec![Node::heading("stale")];
		renderer.render(&mut nodes, &groups).unwrap();
		renderer.render(&mut nodes, &groups).unwrap();
		assert_eq!(
			nodes,
			vec![Node::heading("Api"), Node::entry("call()", "/call()")]
		);
	}

	#[test]
	fn missing_names_are_skipped_by_default() {
		let mut groups = group("Api", &["call()"]);
		groups.extend("Api", [Entry::default()]);
		let mut nodes: Vec<Node> = Vec::new();
		Renderer::new().render(&mut nodes, &groups).unwrap();
		assert_eq!(nodes.len(), 2);
	}

	#[test]
	fn missing_names_can_be_rejected() {
		let mut groups = group("Api", &["call()"]);
		groups.extend("Api", [Entry::default()]);
		let mut nodes = vec![Node::heading("existing")];
		let err = Renderer::new()
			.with_missing_names(MissingNamePolicy::Reject)
			.with_mode(RenderMode::ClearFirst)
			.render(&mut nodes, &groups)
			.unwrap_err();
		assert!(
			matches!(err, DashboardError::MissingName { ref title, index: 1 } if title == "Api"),
			"unexpected error {err}"
		);
		assert_eq!(nodes, vec![Node::heading("existing")]);
	}

	#[test]
	fn missing_path_renders_empty_href() {
		let mut groups = GroupedEntries::new();
		groups.extend(
			"Api",
			[Entry {
				name: Some("call()".to_string()),
				path: None,
			}],
		);
		let mut nodes: Vec<Node> = Vec::new();
		Renderer::new().render(&mut nodes, &groups).unwrap();
		assert_eq!(nodes[1], Node::entry("call()", ""));
	}

	#[test]
	fn custom_filter_is_applied() {
		let groups = group("Api", &["getName", "call()"]);
		let renderer = Renderer::new().with_filter(DisplayFilter::new(r"^get\w+$").unwrap());
		let mut nodes: Vec<Node> = Vec::new();
		renderer.render(&mut nodes, &groups).unwrap();
		assert_eq!(nodes, vec![Node::heading("Api"), Node::entry("getName", "/getName")]);
	}
}
