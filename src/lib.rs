//! Core library for apidash, which turns JSON listings of API entries into a documentation
//! dashboard.
//!
//! Resources are fetched one after another from a [`ResourceSource`], grouped by a title derived
//! from each file name, filtered down to call-style names, sorted, and appended to a
//! [`NodeSink`]. A separate helper toggles between the code and usage panes of a page.

/// Dashboard orchestration, configuration, and errors.
pub mod core_api;

/// Loading and grouping of entry listings.
pub mod loader;

/// Diagnostic logging setup.
pub mod logging;

/// Code/usage pane switching.
pub mod panes;

/// Node targets and the dashboard renderer.
pub mod render;

/// Locations resources are fetched from.
pub mod sources;

pub use crate::core_api::{
	DEFAULT_RESOURCES, Dashboard, DashboardConfig, DashboardError, DisplayFilter, Result,
};
pub use crate::loader::{Entry, Group, GroupedEntries, derive_title, load_grouped, normalize};
pub use crate::panes::{Pane, PaneVisibility, switch_content};
pub use crate::render::{HtmlContainer, MissingNamePolicy, Node, NodeSink, RenderMode, Renderer};
pub use crate::sources::{FsSource, HttpSource, ResourceSource};
