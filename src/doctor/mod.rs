//! Project integrity checks.
//!
//! This module inspects a project's reference graph (slots → actions,
//! macros, sets) and key names, reporting the problems the export path
//! would otherwise paper over by omission.

pub mod checker;

// Re-export checker types
pub use checker::{check_project, Finding, FindingKind};
