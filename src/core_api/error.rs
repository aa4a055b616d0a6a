use std::path::PathBuf;

use thiserror::Error;

/// Aggregate errors produced by the apidash library.
#[derive(Debug, Error)]
pub enum DashboardError {
	/// The resource could not be retrieved (transport failure or non-success status).
	#[error("failed to fetch {resource}: {message}")]
	Fetch {
		/// Resource descriptor that failed.
		resource: String,
		/// Underlying transport error rendered as text.
		message: String,
	},
	/// Reading a resource body or a local file failed.
	#[error("failed to read {}: {source}", .path.display())]
	Io {
		/// Location that was being read.
		path: PathBuf,
		/// Underlying IO error.
		#[source]
		source: std::io::Error,
	},
	/// The resource body was not valid JSON.
	#[error("failed to parse {resource}: {source}")]
	Parse {
		/// Resource descriptor whose body failed to parse.
		resource: String,
		/// Underlying JSON error.
		#[source]
		source: serde_json::Error,
	},
	/// An entry without a string `name` was found while names are required.
	#[error("entry {index} in group \"{title}\" has no name")]
	MissingName {
		/// Group title containing the entry.
		title: String,
		/// Position of the entry inside its group.
		index: usize,
	},
	/// The configured display filter is not a valid regular expression.
	#[error("invalid display pattern: {0}")]
	Pattern(#[from] regex::Error),
	/// The configuration file could not be loaded.
	#[error("invalid configuration in {}: {message}", .path.display())]
	Config {
		/// Configuration file path.
		path: PathBuf,
		/// Description of the problem.
		message: String,
	},
}

/// Result type returned by the apidash library.
pub type Result<T> = std::result::Result<T, DashboardError>;
