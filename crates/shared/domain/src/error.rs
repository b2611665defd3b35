//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database, mail).

use thiserror::Error;

use crate::constants::{MAX_USER_AGE, MIN_USER_AGE};

/// Domain-specific errors for invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email address failed validation
    #[error("invalid email: {0}")]
    InvalidEmail(String),

    /// User name is blank
    #[error("user name cannot be blank")]
    BlankName,

    /// User age is outside the accepted range
    #[error("user age must be between {MIN_USER_AGE} and {MAX_USER_AGE}, got {0}")]
    InvalidAge(i32),
}

impl DomainError {
    /// Create an email validation error
    pub fn invalid_email(msg: impl Into<String>) -> Self {
        DomainError::InvalidEmail(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
