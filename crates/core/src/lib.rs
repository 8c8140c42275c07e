//! Shared primitives for all Rust crates in Guardpost.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across Guardpost crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant; user-correctable.
    #[error("validation error: {0}")]
    Validation(String),

    /// Local snapshot is stale relative to a collaborator response.
    #[error("resolution error: {0}")]
    Resolution(String),

    /// Requested resource does not exist on the collaborator.
    #[error("not found: {0}")]
    NotFound(String),

    /// Network or collaborator failure at a call site.
    #[error("transport error: {0}")]
    Transport(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn non_empty_string_keeps_original_value() {
        let value = NonEmptyString::new("  Gate  ").unwrap_or_else(|_| unreachable!());
        assert_eq!(value.as_str(), "  Gate  ");
    }

    #[test]
    fn errors_render_their_category() {
        let error = AppError::Transport("connection refused".to_owned());
        assert_eq!(error.to_string(), "transport error: connection refused");
    }
}
