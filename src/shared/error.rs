//! Shared Error Types
//!
//! This module defines error types that are independent of the HTTP layer.
//! Input validation for users, people, quotes and images reports failures
//! through these types; the backend maps them to `400 Bad Request`.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed a validation rule
//!
//! # Usage
//!
//! ```rust
//! use so_quotable::shared::error::SharedError;
//!
//! let error = SharedError::validation("text", "Quote text is required");
//! assert_eq!(error.user_message(), "Quote text is required");
//! ```
use thiserror::Error;

/// Errors that can occur outside of the HTTP layer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The message shown to API callers, without the field prefix
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
