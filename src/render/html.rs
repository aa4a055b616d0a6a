use std::fmt::Write as _;

use super::utils::{escape_attr, escape_text};
use super::{ENTRY_BOX_CLASS, ENTRY_LINK_CLASS, Node, NodeSink};
use crate::panes::HtmlPane;

/// Identifier of the dashboard container in the hosting page.
pub const DASHBOARD_ID: &str = "dashboard";

/// A container element whose children are serialized to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlContainer {
	id: String,
	children: Vec<Node>,
}

impl Default for HtmlContainer {
	fn default() -> Self {
		Self::new(DASHBOARD_ID)
	}
}

impl HtmlContainer {
	/// Empty container with the given element id.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			children: Vec::new(),
		}
	}

	/// Element id.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Appended nodes, oldest first.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Serialize the container and its children.
	pub fn to_html(&self) -> String {
		let mut out = format!("<div id=\"{}\">\n", escape_attr(&self.id));
		for child in &self.children {
			out.push_str("  ");
			out.push_str(&node_html(child));
			out.push('\n');
		}
		out.push_str("</div>\n");
		out
	}
}

impl NodeSink for HtmlContainer {
	fn append(&mut self, node: Node) {
		self.children.push(node);
	}

	fn clear(&mut self) {
		self.children.clear();
	}
}

/// Markup for a single node.
pub fn node_html(node: &Node) -> String {
	match node {
		Node::Heading(title) => format!("<h3>{}</h3>", escape_text(title)),
		Node::EntryBox { label, href } => format!(
			"<div class=\"{ENTRY_BOX_CLASS}\"><a href=\"{}\" class=\"{ENTRY_LINK_CLASS}\">{}</a></div>",
			escape_attr(href),
			escape_text(label)
		),
	}
}

/// Standalone page wrapping a dashboard and, optionally, the two content panes.
#[derive(Debug, Clone)]
pub struct HtmlPage<'a> {
	title: String,
	dashboard: &'a HtmlContainer,
	panes: Option<(&'a HtmlPane, &'a HtmlPane)>,
}

impl<'a> HtmlPage<'a> {
	/// Page titled `title` around `dashboard`.
	pub fn new(title: impl Into<String>, dashboard: &'a HtmlContainer) -> Self {
		Self {
			title: title.into(),
			dashboard,
			panes: None,
		}
	}

	/// Include the code and usage panes after the dashboard.
	pub fn with_panes(mut self, code: &'a HtmlPane, usage: &'a HtmlPane) -> Self {
		self.panes = Some((code, usage));
		self
	}

	/// Serialize the whole document.
	pub fn to_html(&self) -> String {
		let mut out = String::new();
		let _ = writeln!(out, "<!DOCTYPE html>");
		let _ = writeln!(out, "<html>");
		let _ = writeln!(out, "<head>");
		let _ = writeln!(out, "<meta charset=\"utf-8\">");
		let _ = writeln!(out, "<title>{}</title>", escape_text(&self.title));
		let _ = writeln!(out, "</head>");
		let _ = writeln!(out, "<body>");
		out.push_str(&self.dashboard.to_html());
		if let Some((code, usage)) = self.panes {
			out.push_str(&code.to_html());
			out.push_str(&usage.to_html());
		}
		let _ = writeln!(out, "</body>");
		let _ = writeln!(out, "</html>");
		out
	}
}
