// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    #[error("Invalid cluster setting '{field}': {reason}")]
    InvalidSettings { field: &'static str, reason: String },

    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Blueprint '{blueprint}' has no templates")]
    EmptyBlueprint { blueprint: String },

    #[error("No value for placeholder '{{{{{key}}}}}'")]
    UnresolvedPlaceholder { key: String },

    #[error("Duplicate path in blueprint: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceName { name, reason } => vec![
                format!("'{}' cannot be used as a service name: {}", name, reason),
                "Use 1-63 lowercase letters, digits and '-'".into(),
                "Start with a letter and end with a letter or digit".into(),
                "Examples: billing, auth-api, worker2".into(),
                "Pass --permissive to skip validation (not recommended)".into(),
            ],
            Self::InvalidSettings { field, reason } => vec![
                format!("Fix '{}' in your configuration: {}", field, reason),
                "Run: svcgen config list".into(),
            ],
            Self::EmptyBlueprint { blueprint } => vec![
                format!("Blueprint '{}' is corrupted", blueprint),
                "Please report this issue".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceName { .. } | Self::InvalidSettings { .. } => {
                ErrorCategory::Validation
            }
            _ => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
