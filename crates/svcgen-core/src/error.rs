//! Unified error handling for Svcgen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Svcgen Core operations.
#[derive(Debug, Error, Clone)]
pub enum SvcgenError {
    /// Errors from the domain layer (invalid names, settings, templates).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (filesystem, adapters).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl SvcgenError {
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
    Internal,
}

/// Convenient result type alias.
pub type SvcgenResult<T> = Result<T, SvcgenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn invalid_name_is_a_validation_error() {
        let err: SvcgenError = DomainError::InvalidServiceName {
            name: "Billing".into(),
            reason: "uppercase".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn filesystem_error_is_internal() {
        let err: SvcgenError = ApplicationError::FilesystemError {
            path: PathBuf::from("apps/billing/main.py"),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("apps/billing/main.py"));
    }

    #[test]
    fn template_errors_are_internal() {
        let err: SvcgenError = DomainError::UnresolvedPlaceholder {
            key: "DOMAINS".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("{{DOMAINS}}"));
    }
}
