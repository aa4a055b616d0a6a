use serde::Serialize;
use serde_json::Value;

/// One displayable item decoded from a resource.
///
/// Both fields are optional at decode time. Whether a missing `name` is an error is decided
/// when rendering, not when loading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
	/// Display label, e.g. `getApi()`.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Link target for the label.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub path: Option<String>,
}

impl Entry {
	/// Build an entry with both fields present.
	pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			path: Some(path.into()),
		}
	}

	/// Decode an entry from a JSON value. Non-string fields and non-object values yield `None`
	/// for the affected fields rather than an error.
	pub fn from_value(value: &Value) -> Self {
		let field = |key: &str| value.get(key).and_then(|v| v.as_str()).map(str::to_string);
		Self {
			name: field("name"),
			path: field("path"),
		}
	}

	/// Display name, if any.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Link target, or an empty string when absent.
	pub fn href(&self) -> &str {
		self.path.as_deref().unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn decodes_name_and_path() {
		let entry = Entry::from_value(&json!({"name": "init()", "path": "/p1", "extra": 3}));
		assert_eq!(entry, Entry::new("init()", "/p1"));
		assert_eq!(entry.href(), "/p1");
	}

	#[test]
	fn tolerates_missing_and_mistyped_fields() {
		let entry = Entry::from_value(&json!({"name": 42}));
		assert_eq!(entry.name(), None);
		assert_eq!(entry.href(), "");

		assert_eq!(Entry::from_value(&json!("init()")), Entry::default());
	}
}
