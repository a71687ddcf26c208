//! Static endpoint data for apifix.
//!
//! This module holds:
//! - The hardcoded-path -> `API_ENDPOINTS` replacement table
//! - The list of files that need the endpoint import added
//! - The namespace token and import line used for insertion

pub mod table;

pub use table::{
	ADHERENCE_PATTERN, ADHERENCE_REPLACEMENT, DEFAULT_ROOT, IMPORT_LINE, IMPORT_TARGETS,
	NAMESPACE_TOKEN, REPLACEMENTS, SOURCE_EXTENSIONS, is_import_target, is_source_extension,
};
