//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// Raised by collaborators around the grouping core (account sources,
/// configuration loading). Grouping itself never fails.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or expired session token.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input data.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Upstream service (account API) failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<crate::types::MoneyError> for AppError {
    fn from(err: crate::types::MoneyError) -> Self {
        Self::Validation(err.to_string())
    }
}
