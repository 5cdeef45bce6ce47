//! Middleware Module
//!
//! This module contains request-level plumbing shared by handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - `AuthUser` extractor resolving the signed-in principal
//!
//! # Example
//!
//! ```rust,no_run
//! use so_quotable::backend::middleware::AuthUser;
//!
//! async fn handler(AuthUser(user): AuthUser) -> String {
//!     user.email
//! }
//! ```

pub mod auth;

pub use auth::{bearer_token, AuthUser, AuthenticatedUser};
