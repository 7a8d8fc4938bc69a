//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the project file version.

/// The display name of the application (human-readable).
pub const APP_NAME: &str = "padbind";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "padbind";

/// Current version of the on-disk project file format.
pub const PROJECT_FILE_VERSION: u32 = 1;

/// File extension of exported AntiMicroX profiles.
pub const PROFILE_EXTENSION: &str = "amgp";
