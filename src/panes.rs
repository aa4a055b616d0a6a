//! Exclusive visibility toggling between the code and usage panes.
//!
//! The switch is stateless: which pane is showing lives only in the panes themselves.

use std::fmt;

use crate::render::utils::escape_attr;

/// Element id of the code pane in the hosting page.
pub const CODE_PANE_ID: &str = "codeContent";
/// Element id of the usage pane in the hosting page.
pub const USAGE_PANE_ID: &str = "usageContent";

/// One of the two mutually exclusive content regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
	/// Source code view.
	Code,
	/// Usage examples view.
	Usage,
}

impl Pane {
	/// Map a selector token to a pane. Only the exact tokens `code` and `usage` are recognized.
	pub fn parse(token: &str) -> Option<Self> {
		match token {
			"code" => Some(Self::Code),
			"usage" => Some(Self::Usage),
			_ => None,
		}
	}

	/// Selector token for this pane.
	pub fn token(self) -> &'static str {
		match self {
			Self::Code => "code",
			Self::Usage => "usage",
		}
	}
}

impl fmt::Display for Pane {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.token())
	}
}

/// An element whose visibility can be toggled.
pub trait PaneVisibility {
	/// Show or hide the element.
	fn set_visible(&mut self, visible: bool);

	/// Whether the element is currently shown.
	fn is_visible(&self) -> bool;
}

impl<P: PaneVisibility + ?Sized> PaneVisibility for &mut P {
	fn set_visible(&mut self, visible: bool) {
		(**self).set_visible(visible);
	}

	fn is_visible(&self) -> bool {
		(**self).is_visible()
	}
}

/// Show `pane` and hide the other one.
pub fn show(pane: Pane, code: &mut impl PaneVisibility, usage: &mut impl PaneVisibility) {
	code.set_visible(pane == Pane::Code);
	usage.set_visible(pane == Pane::Usage);
}

/// Apply a selector token to the two panes. Unrecognized tokens leave both panes untouched and
/// return `None`.
pub fn switch_content(
	token: &str,
	code: &mut impl PaneVisibility,
	usage: &mut impl PaneVisibility,
) -> Option<Pane> {
	let pane = Pane::parse(token)?;
	show(pane, code, usage);
	Some(pane)
}

/// A pane element serialized as a `div` with an inline `display` style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPane {
	id: String,
	body: String,
	visible: bool,
}

impl HtmlPane {
	/// Pane with the given id and raw inner HTML, initially visible.
	pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			body: body.into(),
			visible: true,
		}
	}

	/// Empty code pane.
	pub fn code() -> Self {
		Self::new(CODE_PANE_ID, "")
	}

	/// Empty usage pane.
	pub fn usage() -> Self {
		Self::new(USAGE_PANE_ID, "")
	}

	/// Replace the inner HTML.
	pub fn with_body(mut self, body: impl Into<String>) -> Self {
		self.body = body.into();
		self
	}

	/// Element id.
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Serialize the element.
	pub fn to_html(&self) -> String {
		let display = if self.visible { "block" } else { "none" };
		format!(
			"<div id=\"{}\" style=\"display: {display}\">{}</div>\n",
			escape_attr(&self.id),
			self.body
		)
	}
}

impl PaneVisibility for HtmlPane {
	fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	fn is_visible(&self) -> bool {
		self.visible
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Flag {
		visible: bool,
		writes: usize,
	}

	impl PaneVisibility for Flag {
		fn set_visible(&mut self, visible: bool) {
			self.visible = visible;
			self.writes += 1;
		}

		fn is_visible(&self) -> bool {
			self.visible
		}
	}

	#[test]
	fn last_switch_wins() {
		let mut code = Flag::default();
		let mut usage = Flag::default();

		assert_eq!(switch_content("code", &mut code, &mut usage), Some(Pane::Code));
		assert!(code.is_visible() && !usage.is_visible());

		assert_eq!(switch_content("usage", &mut code, &mut usage), Some(Pane::Usage));
		assert!(!code.is_visible() && usage.is_visible());
	}

	#[test]
	fn unknown_tokens_are_ignored() {
		let mut code = Flag {
			visible: true,
			writes: 0,
		};
		let mut usage = Flag {
			visible: true,
			writes: 0,
		};

		for token in ["", "Code", " usage", "docs"] {
			assert_eq!(switch_content(token, &mut code, &mut usage), None);
		}
		assert!(code.is_visible() && usage.is_visible());
		assert_eq!(code.writes + usage.writes, 0);
	}

	#[test]
	fn html_panes_render_display_style() {
		let mut code = HtmlPane::code().with_body("<pre>x</pre>");
		let mut usage = HtmlPane::usage();
		switch_content("usage", &mut code, &mut usage);
		assert_eq!(
			code.to_html(),
			"<div id=\"codeContent\" style=\"display: none\"><pre>x</pre></div>\n"
		);
		assert_eq!(
			usage.to_html(),
			"<div id=\"usageContent\" style=\"display: block\"></div>\n"
		);
	}

	#[test]
	fn tokens_round_trip_through_display() {
		assert_eq!(Pane::Code.to_string(), "code");
		assert_eq!(Pane::parse(Pane::Usage.token()), Some(Pane::Usage));
	}
}
