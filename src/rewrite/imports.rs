use crate::endpoints::{IMPORT_LINE, NAMESPACE_TOKEN, is_import_target};

/// Insert the endpoint import into `content` if `file_name` needs it.
///
/// Only acts when `file_name` is on the import target list and the namespace
/// token does not already occur anywhere in the file. The presence check is a
/// raw substring match, not an import parse, so a token in a comment or an
/// unrelated string counts as "already imported".
///
/// The import line goes immediately after the last line whose trimmed text
/// starts with `import `; a target file with no import lines at all is left
/// alone, silently.
///
/// Returns the new content when an insertion happened.
pub fn ensure_import(content: &str, file_name: &str) -> Option<String> {
	if !is_import_target(file_name) {
		return None;
	}
	if content.contains(NAMESPACE_TOKEN) {
		return None;
	}

	let mut lines: Vec<&str> = content.split('\n').collect();
	let last_import_idx = lines
		.iter()
		.rposition(|line| line.trim_start().starts_with("import "))?;

	lines.insert(last_import_idx + 1, IMPORT_LINE);
	Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
	use super::*;

	const TARGET: &str = "CustomerDashboard.jsx";

	#[test]
	fn test_insert_after_last_import() {
		let content = "import React from 'react';\nimport axios from 'axios';\n\nconst x = 1;\n";
		let result = ensure_import(content, TARGET).unwrap();
		assert_eq!(
			result,
			"import React from 'react';\nimport axios from 'axios';\nimport { API_ENDPOINTS } from '../config/api';\n\nconst x = 1;\n"
		);
	}

	#[test]
	fn test_insert_respects_indented_import() {
		let content = "import React from 'react';\nconst a = 1;\n  import late from 'late';\nconst b = 2;\n";
		let result = ensure_import(content, TARGET).unwrap();
		let lines: Vec<&str> = result.split('\n').collect();
		assert_eq!(lines[3], IMPORT_LINE);
	}

	#[test]
	fn test_skips_when_token_present() {
		let content = "import { API_ENDPOINTS } from '../config/api';\nconst x = 1;\n";
		assert!(ensure_import(content, TARGET).is_none());
	}

	#[test]
	fn test_token_in_comment_counts_as_present() {
		// Known weakness of the substring guard, kept on purpose.
		let content = "import React from 'react';\n// TODO: switch to API_ENDPOINTS\nconst x = 1;\n";
		assert!(ensure_import(content, TARGET).is_none());
	}

	#[test]
	fn test_skips_non_target_file() {
		let content = "import React from 'react';\nconst x = 1;\n";
		assert!(ensure_import(content, "App.jsx").is_none());
	}

	#[test]
	fn test_no_import_lines_is_silent_noop() {
		let content = "const x = 1;\nexport default x;\n";
		assert!(ensure_import(content, TARGET).is_none());
	}

	#[test]
	fn test_inserts_exactly_one_line() {
		let content = "import React from 'react';\nconst x = 1;\n";
		let result = ensure_import(content, TARGET).unwrap();
		let before = content.split('\n').count();
		let after = result.split('\n').count();
		assert_eq!(after, before + 1);
	}
}
