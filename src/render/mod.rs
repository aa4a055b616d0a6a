//! Rendering of grouped entries into an append-only node target.
//!
//! The renderer never looks up elements itself; callers hand it a [`NodeSink`]. The crate ships
//! an HTML implementation in [`html`], and `Vec<Node>` works as an in-memory target.

mod core;
/// HTML node target and page helpers.
pub mod html;
/// Collation and escaping helpers.
pub mod utils;

pub use self::core::{MissingNamePolicy, RenderMode, Renderer};
pub use self::html::{HtmlContainer, HtmlPage};

/// CSS class of the box wrapping each entry link.
pub const ENTRY_BOX_CLASS: &str = "reflection-box";
/// CSS class of the entry link itself.
pub const ENTRY_LINK_CLASS: &str = "box-title";

/// A display node appended to the dashboard container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// Section heading naming a group.
	Heading(String),
	/// Box holding a single link to an entry.
	EntryBox {
		/// Visible link text.
		label: String,
		/// Link target.
		href: String,
	},
}

impl Node {
	/// Heading node for a group title.
	pub fn heading(title: impl Into<String>) -> Self {
		Self::Heading(title.into())
	}

	/// Entry node linking `label` to `href`.
	pub fn entry(label: impl Into<String>, href: impl Into<String>) -> Self {
		Self::EntryBox {
			label: label.into(),
			href: href.into(),
		}
	}
}

/// A mutable container that nodes are appended to.
pub trait NodeSink {
	/// Append `node` after any existing children.
	fn append(&mut self, node: Node);

	/// Remove every child.
	fn clear(&mut self);
}

impl NodeSink for Vec<Node> {
	fn append(&mut self, node: Node) {
		self.push(node);
	}

	fn clear(&mut self) {
		Vec::clear(self);
	}
}

impl<S: NodeSink + ?Sized> NodeSink for &mut S {
	fn append(&mut self, node: Node) {
		(**self).append(node);
	}

	fn clear(&mut self) {
		(**self).clear();
	}
}
