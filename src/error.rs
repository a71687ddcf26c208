use std::path::PathBuf;

/// Library-level structured errors for apifix.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum ApifixError {
	#[error("Failed to read file: {path}")]
	FileRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write file: {path}")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to walk directory tree: {root}")]
	Walk {
		root: PathBuf,
		#[source]
		source: ignore::Error,
	},

	#[error("Invalid regex pattern: {pattern}")]
	InvalidRegex {
		pattern: String,
		#[source]
		source: regex::Error,
	},
}

/// Result type alias using ApifixError.
pub type Result<T> = std::result::Result<T, ApifixError>;
