//! Domain-level errors.

use thiserror::Error;

/// Failures raised by domain types themselves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The password hasher rejected its input or parameters
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
