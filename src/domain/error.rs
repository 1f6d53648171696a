use thiserror::Error;

/// Errors produced by the domain layer
///
/// Every service operation fails with one of these. The API layer maps them
/// onto HTTP status codes (400, 404, 500 respectively).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    /// Creates a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Storage(err.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
