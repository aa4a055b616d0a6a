//! Pane switching against the HTML pane elements.

use apidash::panes::{HtmlPane, Pane, PaneVisibility, show, switch_content};

#[test]
fn exactly_one_pane_is_visible_after_each_switch() {
	let mut code = HtmlPane::code();
	let mut usage = HtmlPane::usage();

	for (token, expected) in [("code", Pane::Code), ("usage", Pane::Usage), ("code", Pane::Code)] {
		assert_eq!(switch_content(token, &mut code, &mut usage), Some(expected));
		assert_ne!(code.is_visible(), usage.is_visible());
		assert_eq!(code.is_visible(), expected == Pane::Code);
	}
}

#[test]
fn unrecognized_token_keeps_previous_state() {
	let mut code = HtmlPane::code();
	let mut usage = HtmlPane::usage();
	show(Pane::Usage, &mut code, &mut usage);

	let before = (code.clone(), usage.clone());
	assert_eq!(switch_content("both", &mut code, &mut usage), None);
	assert_eq!((code, usage), before);
}
