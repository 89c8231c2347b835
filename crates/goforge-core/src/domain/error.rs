use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for wrapping in the unified error type)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Duplicate output path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Rendering Errors (packaging bugs, not user errors)
    // ========================================================================
    #[error("template '{template}' contains unresolved marker '{marker}'")]
    UnresolvedMarker { template: String, marker: String },

    #[error("template '{template}' is malformed: {reason}")]
    MalformedTemplate { template: String, reason: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("no bundled template named '{template}'")]
    TemplateNotFound { template: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnresolvedMarker { template, .. } | Self::MalformedTemplate { template, .. } => {
                vec![
                    format!("The bundled template '{}' is broken", template),
                    "This indicates a packaging bug, not a problem with your input".into(),
                    "Please reinstall goforge or report this issue".into(),
                ]
            }
            Self::TemplateNotFound { template } => vec![
                format!("Template '{}' is missing from this build", template),
                "Please reinstall goforge or report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Validation
            }
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            // Render failures are packaging bugs and abort the whole run.
            Self::UnresolvedMarker { .. } | Self::MalformedTemplate { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
