//! So Quotable - Main Library
//!
//! A quotes catalogue: people, the quotes attributed to them, photos hosted
//! on an image CDN, and rendered quote cards. Signed-up users contribute
//! content; admins moderate it.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependency
//!   - Configuration, validation, slugs, pagination
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum JSON API over SQLite
//!   - Accounts, JWT sessions, owner-or-admin guards
//!   - Email verification and password reset
//!   - Email delivery (console, HTTP provider, SMTP)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use so_quotable::backend::server::init::create_app;
//! use so_quotable::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::load()?).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for validation failures
//! - `shared::ConfigError` for configuration failures
//! - `backend::BackendError` for everything a handler can return

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
