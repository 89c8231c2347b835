//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Template rendering failed.
    #[error("Template rendering failed for '{template}': {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The external command could not be launched at all.
    #[error("failed to launch '{command}': {reason}")]
    CommandLaunchFailed { command: String, reason: String },

    /// The external command ran but exited non-zero.
    ///
    /// `output` carries the command's combined stdout/stderr so the
    /// diagnostic shown to the user contains everything the tool printed.
    #[error("command '{command}' exited with status {status}\nOutput:\n{output}")]
    CommandFailed {
        command: String,
        status: i32,
        output: String,
    },

    /// Shared adapter state lock was poisoned (in-memory test adapters).
    #[error("adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RenderingFailed { template, .. } => vec![
                format!("Bundled template '{}' could not be rendered", template),
                "This is a packaging bug; please reinstall or report it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandLaunchFailed { command, .. } => vec![
                format!("Could not start '{}'", command),
                "Ensure the Go toolchain is installed and on your PATH".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("'{}' failed inside the new project", command),
                "The command output above usually names the offending file".into(),
                "The partially created project is left on disk for inspection".into(),
            ],
            Self::LockPoisoned => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::CommandFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
            Self::CommandLaunchFailed { .. } => ErrorCategory::Configuration,
        }
    }
}
