//! Parsing and persistence for external file formats.
//!
//! This module handles importing keybind listings into actions and reading
//! and writing the JSON project file.

pub mod keybinds;
pub mod project;

// Re-export commonly used functions
pub use keybinds::parse_keybinds;
pub use project::{load_project, parse_project, save_project, Project};
