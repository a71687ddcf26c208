//! Directory traversal and per-file orchestration for apifix.
//!
//! Walks the whole tree under the given root with no exclusion list (no
//! gitignore handling, hidden files included), touching only files with a
//! recognized source extension. Each eligible file is read once, mutated in
//! memory, and written back only if something changed.

use crate::endpoints::{NAMESPACE_TOKEN, is_source_extension};
use crate::error::{ApifixError, Result};
use crate::rewrite::{RewriteRules, ensure_import};
use ignore::WalkBuilder;
use std::path::Path;

/// Aggregate counts for one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
	/// Files where at least one table rule matched.
	pub files_changed: usize,

	/// Total matched rules across all files (rules, not occurrences).
	pub replacements: usize,

	/// Files that gained the endpoint import.
	pub imports_added: usize,
}

/// Rewrite every eligible file under `root`, printing one progress line per
/// change. Any I/O or walker error aborts the run; files already rewritten
/// stay rewritten.
pub fn scan(root: &Path) -> Result<ScanSummary> {
	let rules = RewriteRules::compile()?;
	let mut summary = ScanSummary::default();

	// Standard filters off: this tool deliberately visits everything under
	// the root, matching plain recursive traversal.
	let walker = WalkBuilder::new(root).standard_filters(false).build();

	for entry in walker {
		let entry = entry.map_err(|source| ApifixError::Walk {
			root: root.to_path_buf(),
			source,
		})?;

		if !entry.file_type().is_some_and(|ft| ft.is_file()) {
			continue;
		}

		let path = entry.path();
		let eligible = path
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(is_source_extension);
		if !eligible {
			continue;
		}

		process_file(path, &rules, &mut summary)?;
	}

	Ok(summary)
}

/// Run import insertion, then replacement, on a single file.
fn process_file(path: &Path, rules: &RewriteRules, summary: &mut ScanSummary) -> Result<()> {
	let file_name = path
		.file_name()
		.and_then(|name| name.to_str())
		.unwrap_or_default();

	let mut content = read_file(path)?;

	if let Some(with_import) = ensure_import(&content, file_name) {
		write_file(path, &with_import)?;
		println!("added {NAMESPACE_TOKEN} import to {file_name}");
		summary.imports_added += 1;
		content = with_import;
	}

	let (rewritten, rules_matched) = rules.apply(&content);
	if rewritten != content {
		write_file(path, &rewritten)?;
	}

	if rules_matched > 0 {
		println!("fixed {rules_matched} endpoints in {file_name}");
		summary.files_changed += 1;
		summary.replacements += rules_matched;
	}

	Ok(())
}

fn read_file(path: &Path) -> Result<String> {
	std::fs::read_to_string(path).map_err(|source| ApifixError::FileRead {
		path: path.to_path_buf(),
		source,
	})
}

fn write_file(path: &Path, content: &str) -> Result<()> {
	std::fs::write(path, content).map_err(|source| ApifixError::FileWrite {
		path: path.to_path_buf(),
		source,
	})
}
