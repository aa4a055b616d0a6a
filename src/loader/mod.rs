//! Fetches entry listings and groups them by a title derived from each resource name.
//!
//! Resources are loaded strictly one after another. A resource that cannot be fetched or
//! parsed is logged and skipped; it never aborts the rest of the load.

mod entry;

use serde::Serialize;
use serde_json::Value;

pub use self::entry::Entry;
use crate::core_api::error::{DashboardError, Result};
use crate::sources::ResourceSource;

/// Entries sourced from every resource sharing one title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
	/// Display title, e.g. `Plugin` for `data/api/plugin.json`.
	pub title: String,
	/// Entries in load order.
	pub entries: Vec<Entry>,
}

/// Title-to-entries mapping that keeps titles in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedEntries {
	groups: Vec<Group>,
}

impl GroupedEntries {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append `entries` to the group named `title`, creating it at the end if absent.
	pub fn extend(&mut self, title: &str, entries: impl IntoIterator<Item = Entry>) {
		match self.groups.iter_mut().find(|group| group.title == title) {
			Some(group) => group.entries.extend(entries),
			None => self.groups.push(Group {
				title: title.to_string(),
				entries: entries.into_iter().collect(),
			}),
		}
	}

	/// Entries for `title`, if that group exists.
	pub fn get(&self, title: &str) -> Option<&[Entry]> {
		self.groups
			.iter()
			.find(|group| group.title == title)
			.map(|group| group.entries.as_slice())
	}

	/// Titles in insertion order.
	pub fn titles(&self) -> impl Iterator<Item = &str> {
		self.groups.iter().map(|group| group.title.as_str())
	}

	/// Groups in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, Group> {
		self.groups.iter()
	}

	/// Number of groups.
	pub fn len(&self) -> usize {
		self.groups.len()
	}

	/// Whether no group was loaded.
	pub fn is_empty(&self) -> bool {
		self.groups.is_empty()
	}
}

impl<'a> IntoIterator for &'a GroupedEntries {
	type Item = &'a Group;
	type IntoIter = std::slice::Iter<'a, Group>;

	fn into_iter(self) -> Self::IntoIter {
		self.groups.iter()
	}
}

/// Derive a display title from a resource descriptor.
///
/// Takes the last `/` segment, drops a trailing `.json`, and upper-cases the first character
/// only: `data/api/nodeServer.json` becomes `NodeServer`.
pub fn derive_title(resource: &str) -> String {
	let file_name = resource.rsplit('/').next().unwrap_or(resource);
	let stem = file_name.strip_suffix(".json").unwrap_or(file_name);

	let mut chars = stem.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Turn a parsed document into a list of entries. Arrays keep their order; any other value
/// becomes a single entry.
pub fn normalize(value: Value) -> Vec<Entry> {
	match value {
		Value::Array(items) => items.iter().map(Entry::from_value).collect(),
		other => vec![Entry::from_value(&other)],
	}
}

/// Fetch and parse a single resource.
pub fn load_resource<S: ResourceSource + ?Sized>(source: &S, resource: &str) -> Result<Vec<Entry>> {
	let body = source.fetch(resource)?;
	let value: Value = serde_json::from_str(&body).map_err(|source| DashboardError::Parse {
		resource: resource.to_string(),
		source,
	})?;
	Ok(normalize(value))
}

/// Load every resource in order and group the results by derived title.
///
/// Failures are reported through `tracing` and otherwise ignored, so the returned mapping only
/// contains titles whose resources loaded successfully.
pub fn load_grouped<S, I>(source: &S, resources: I) -> GroupedEntries
where
	S: ResourceSource + ?Sized,
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let mut grouped = GroupedEntries::new();

	for resource in resources {
		let resource = resource.as_ref();
		match load_resource(source, resource) {
			Ok(entries) => {
				let title = derive_title(resource);
				tracing::debug!(resource, %title, count = entries.len(), "loaded resource");
				grouped.extend(&title, entries);
			}
			Err(error) => {
				tracing::error!(resource, %error, "failed to load resource");
			}
		}
	}

	grouped
}
