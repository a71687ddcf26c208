//! Per-file rewrite operations for apifix.
//!
//! This module handles:
//! - Import insertion for files that need the endpoint import
//! - Literal substitution using the replacement table plus one regex rule

pub mod imports;
pub mod replace;

pub use imports::ensure_import;
pub use replace::RewriteRules;
