//! Apifix - CLI tool for rewriting hardcoded API paths into `API_ENDPOINTS` references.
//!
//! This library provides the core functionality for apifix, including:
//! - The hand-maintained replacement table and import target list
//! - Import-line insertion and literal substitution
//! - Recursive tree scanning with in-place rewriting
//!
//! # Example
//!
//! ```no_run
//! use apifix_cli::scan::scan;
//! use std::path::Path;
//!
//! let summary = scan(Path::new("frontend/src")).unwrap();
//! println!(
//!     "done: fixed {} endpoints across {} files",
//!     summary.replacements, summary.files_changed
//! );
//! ```

pub mod endpoints;
pub mod error;
pub mod rewrite;
pub mod scan;

pub use error::{ApifixError, Result};
