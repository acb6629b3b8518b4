//! Unified error handling for Ralph Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Ralph Core operations.
///
/// Only conditions that make a run meaningless end up here. Expected
/// situations such as "already exists" are reported as
/// [`ActionResult`](crate::domain::ActionResult)s instead.
#[derive(Debug, Error, Clone)]
pub enum RalphError {
    /// Errors from the domain layer (invalid names, invalid configuration).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (missing templates, failed I/O).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl RalphError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Unavailable,
    Internal,
}

/// Convenient result type alias.
pub type RalphResult<T> = Result<T, RalphError>;
