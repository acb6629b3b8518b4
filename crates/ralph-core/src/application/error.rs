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
    /// The template root is missing entirely; nothing can be copied.
    #[error("Template directory not found: {path}")]
    TemplateRootMissing { path: PathBuf },

    /// The user asked to import a document that does not exist.
    #[error("Import source file not found: {path}")]
    ImportSourceMissing { path: PathBuf },

    /// No import provider could handle the request.
    #[error("No conversion tool available (tried: {})", tried.join("; "))]
    NoConversionTool { tried: Vec<String> },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external command could not be run or reported failure.
    #[error("Command `{command}` failed: {reason}")]
    CommandFailed { command: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateRootMissing { path } => vec![
                format!("Expected Ralph templates in: {}", path.display()),
                "Install Ralph first, or point RALPH_HOME at an existing installation".into(),
            ],
            Self::ImportSourceMissing { path } => vec![
                format!("Check the path passed to --import: {}", path.display()),
                "Relative paths are resolved from the current directory".into(),
            ],
            Self::NoConversionTool { .. } => vec![
                "Install the Claude Code CLI: npm install -g @anthropic-ai/claude-code".into(),
                "Or install the dedicated ralph-import tool and make sure it is on PATH".into(),
                "Or re-run without --import and fill in the templates by hand".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::CommandFailed { command, .. } => vec![
                format!("Ensure `{}` is installed and in your PATH", command),
                "Check the command output above for details".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateRootMissing { .. } | Self::ImportSourceMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::NoConversionTool { .. } => ErrorCategory::Unavailable,
            Self::FilesystemError { .. } | Self::CommandFailed { .. } => ErrorCategory::Internal,
        }
    }
}
