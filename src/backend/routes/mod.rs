//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, layers and fallback
//! └── api_routes.rs   - JSON API endpoints
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use so_quotable::backend::routes::create_router;
//! use so_quotable::backend::server::config::{connect_database, load_mailer};
//! use so_quotable::backend::server::state::AppState;
//! use so_quotable::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let pool = connect_database(&config.database_url).await?;
//! let mailer = load_mailer(&config)?;
//! let router = create_router(AppState::new(pool, config, mailer));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
