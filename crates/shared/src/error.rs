//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Every layer converts its own error enum into one of these before the
/// failure reaches a binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (hierarchy depth, discount range, field precision).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referential integrity violation (entity still referenced).
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Integrity(_) => "INTEGRITY_VIOLATION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the process exit code used by the command-line tools.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Internal(_) => 1,
            Self::Validation(_) => 2,
            Self::NotFound(_) => 3,
            Self::Integrity(_) => 4,
            Self::Database(_) => 5,
            Self::Configuration(_) => 6,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
