//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised synchronously at the offending call and never recovered internally.
/// `Display` renders the bare message so callers can print it as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (e.g. non-positive price or quantity).
    #[error("{0}")]
    InvalidArgument(String),

    /// The addressed record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A domain invariant would be violated (e.g. arithmetic overflow).
    #[error("{0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// The message without the variant tag.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg)
            | DomainError::NotFound(msg)
            | DomainError::InvariantViolation(msg) => msg,
        }
    }
}
