//! Shared CLI error handling.

use std::fmt;

/// Result alias for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands, each mapped to a stable exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// File system or serialization failure
    Io(String),
    /// Invalid arguments or project content
    Validation(String),
    /// Doctor run produced findings (not an error in itself, but a
    /// non-zero exit so scripts can gate on it)
    Findings(usize),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Validation(_) => 2,
            Self::Findings(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(message) | Self::Validation(message) => write!(f, "{message}"),
            Self::Findings(count) => write!(f, "{count} finding(s)"),
        }
    }
}

impl std::error::Error for CliError {}
