//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and message catalog
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! Token redemption (email verification, password reset) does not use
//! these errors for business outcomes; see `backend::recovery::TokenResult`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, ADMIN_ONLY, NOT_AUTHENTICATED, NOT_AUTHORIZED};

/// Result alias used by handlers and database helpers
pub type BackendResult<T> = Result<T, BackendError>;
