/**
 * Backend Error Types
 *
 * This module defines the errors raised by HTTP handlers, the authorization
 * guards and the database layer. Every variant maps to an HTTP status code
 * and a caller-facing message.
 *
 * # Message Catalog
 *
 * The guard failures use fixed messages so clients can match on them:
 *
 * - `NotAuthenticated` - "Not authenticated"
 * - `NotAuthorized` - "Not authorized to modify this resource"
 * - `AdminOnly` - "Admin access required"
 *
 * Validation failures carry "X is required" style messages from
 * `shared::validation`, and lookups report "X not found".
 *
 * Infrastructure failures (database, hashing) are logged with full detail
 * but surface to callers with a generic message.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

pub const NOT_AUTHENTICATED: &str = "Not authenticated";
pub const NOT_AUTHORIZED: &str = "Not authorized to modify this resource";
pub const ADMIN_ONLY: &str = "Admin access required";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use so_quotable::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("Person");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// assert_eq!(err.message(), "Person not found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// No valid session accompanied the request
    #[error("{}", NOT_AUTHENTICATED)]
    NotAuthenticated,

    /// The principal neither owns the resource nor is an admin
    #[error("{}", NOT_AUTHORIZED)]
    NotAuthorized,

    /// The operation is restricted to admins
    #[error("{}", ADMIN_ONLY)]
    AdminOnly,

    /// A referenced resource does not exist
    #[error("{resource} not found")]
    NotFound {
        /// Resource name, e.g. "Quote"
        resource: &'static str,
    },

    /// The request conflicts with existing data (duplicate email, ...)
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Validation error from the shared module
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Session token could not be created or verified
    #[error("Session token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failed
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a "X not found" error
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `NotAuthenticated`, `Token` - 401 Unauthorized
    /// - `NotAuthorized`, `AdminOnly` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `HandlerError` - Uses the status code from the error
    /// - `SharedError` - 400 Bad Request
    /// - `Database`, `PasswordHash` - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotAuthenticated | Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::NotAuthorized | Self::AdminOnly => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::HandlerError { status, .. } => *status,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::PasswordHash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the caller-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::NotAuthenticated => NOT_AUTHENTICATED.to_string(),
            Self::NotAuthorized => NOT_AUTHORIZED.to_string(),
            Self::AdminOnly => ADMIN_ONLY.to_string(),
            Self::NotFound { resource } => format!("{} not found", resource),
            Self::Conflict { message } => message.clone(),
            Self::HandlerError { message, .. } => message.clone(),
            Self::SharedError(err) => err.user_message().to_string(),
            Self::Token(_) => "Invalid or expired session".to_string(),
            Self::Database(sqlx::Error::RowNotFound) => "Record not found".to_string(),
            Self::Database(_) => "Database error".to_string(),
            Self::PasswordHash(_) => "Server error".to_string(),
        }
    }

    /// Whether this error is an infrastructure failure worth logging at error level
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }
}
