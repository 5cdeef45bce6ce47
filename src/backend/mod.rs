//! Backend Module
//!
//! This module contains all server-side code for So Quotable: an Axum JSON
//! API over SQLite for people, their quotes and CDN-hosted images, with
//! account sign-up, email verification and password reset.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database and mailer setup
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Accounts, JWT sessions and authorization guards
//! - **`recovery`** - Verification and password reset token lifecycle
//! - **`email`** - Outgoing email transports and templates
//! - **`people`**, **`quotes`**, **`images`** - Content CRUD
//! - **`admin`** - User administration and maintenance
//! - **`middleware`** - Request extractors
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication and guards
//! ├── recovery/       - Email verification and password reset
//! ├── email/          - Mail transports and templates
//! ├── people/         - People CRUD
//! ├── quotes/         - Quote CRUD
//! ├── images/         - Image metadata CRUD
//! ├── admin/          - Admin endpoints
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Transactions
//!
//! Every mutating handler reads, checks and writes inside one
//! `sqlx::Transaction`; returning early drops the transaction and rolls it
//! back. Emails are dispatched only after the commit.
//!
//! # Error Handling
//!
//! Handlers return `BackendResult<T>`; `BackendError` renders as
//! `{"error": message, "status": code}`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Email verification and password reset
pub mod recovery;

/// Outgoing email
pub mod email;

/// Middleware for request processing
pub mod middleware;

/// People CRUD
pub mod people;

/// Quote CRUD
pub mod quotes;

/// Image and generated image metadata
pub mod images;

/// Admin maintenance endpoints
pub mod admin;

#[cfg(test)]
pub(crate) mod test_support;

/// Re-export commonly used types
pub use error::{BackendError, BackendResult};
pub use server::{create_app, AppState};
