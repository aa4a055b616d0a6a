//! Display filter used to decide which entries appear on the dashboard.
//!
//! Only names that look like a bare call (`name()`, no whitespace anywhere) are shown.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::Result;

/// Default display pattern: one or more non-whitespace characters followed by `()`.
pub const CALL_PATTERN: &str = r"^[^\s]+\(\)$";

static CALL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(CALL_PATTERN).unwrap());

/// Compiled display filter applied to entry names.
#[derive(Debug, Clone)]
pub struct DisplayFilter {
	regex: Regex,
}

impl Default for DisplayFilter {
	fn default() -> Self {
		Self {
			regex: CALL_REGEX.clone(),
		}
	}
}

impl DisplayFilter {
	/// Build a filter from a custom pattern. The pattern must match the whole name to accept it,
	/// so callers are expected to anchor it themselves.
	pub fn new(pattern: &str) -> Result<Self> {
		Ok(Self {
			regex: Regex::new(pattern)?,
		})
	}

	/// Source text of the active pattern.
	pub fn as_str(&self) -> &str {
		self.regex.as_str()
	}

	/// Whether `name` should be displayed.
	pub fn accepts(&self, name: &str) -> bool {
		self.regex.is_match(name)
	}
}
