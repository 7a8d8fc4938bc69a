//! CLI command handlers for padbind.
//!
//! This module provides headless, scriptable access to the core
//! functionality for automation, testing, and CI integration.

pub mod common;
pub mod doctor;
pub mod export;
pub mod import;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use doctor::DoctorArgs;
pub use export::ExportArgs;
pub use import::ImportArgs;
