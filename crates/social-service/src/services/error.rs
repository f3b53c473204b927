//! Service layer error types

use social_common::AppError;
use social_core::DomainError;
use thiserror::Error;

/// Failure of a service operation
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Ledger rule or storage failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Authentication or identity backend failure
    #[error(transparent)]
    App(#[from] AppError),

    /// Request body is incomplete or malformed
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::status_code_for(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
        }
    }

    /// Machine-readable code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Check if the caller could not be authenticated
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == 401
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
