//! Shared CLI error and exit-code handling.

use std::fmt;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Process exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Invalid arguments or input rejected by validation.
    ValidationError = 2,
    /// Filesystem or serialization failure.
    IoError = 3,
}

/// Error raised by CLI command handlers.
///
/// Separates user-input problems from I/O failures so the process exit code
/// tells scripts which kind of failure occurred.
#[derive(Debug)]
pub struct CliError {
    kind: ExitCode,
    message: String,
}

impl CliError {
    /// Creates a validation error (bad arguments or rejected input).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (filesystem or serialization failure).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// The process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        self.kind as i32
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}
