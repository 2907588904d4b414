//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A timestamp string could not be parsed.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// A due/created pair does not form a valid task window.
    #[error("invalid task window: {0}")]
    InvalidWindow(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
