//! Typed failures reported by the storage and authorization layers.
//!
//! Lower layers never render user-facing text; the API layer maps these into
//! [`crate::error::AppError`].

use thiserror::Error;

/// Outcome of a failed URL store operation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("alias already exists: {0}")]
    AliasAlreadyExists(String),
    #[error("url not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a failed privilege check.
///
/// A caller that is simply not privileged is not an error: the check returns
/// `Ok(false)` in that case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthzError {
    /// The authorization service refused the call outright.
    #[error("authorization denied: {0}")]
    Denied(String),
    /// Every allowed attempt failed with a transient outcome.
    #[error("authorization unavailable after {attempts} attempt(s): {message}")]
    Unavailable { attempts: u32, message: String },
    /// The call failed with a terminal, non-retryable outcome.
    #[error("authorization call failed ({code}): {message}")]
    Failed { code: String, message: String },
}
