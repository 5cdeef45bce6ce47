//! Server Module
//!
//! This module contains all server-side code for initializing and configuring
//! the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Database pool and mailer construction
//! - **`init`** - Server initialization, app creation and background tasks
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Database and mailer setup
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `AppConfig::load` reads TOML and environment
//! 2. **Services**: SQLite pool (migrated) and mailer
//! 3. **Background Tasks**: expired generated-image purge
//! 4. **Router Creation**: routes, tracing and CORS layers
//!
//! # Example
//!
//! ```rust,no_run
//! use so_quotable::backend::server::create_app;
//! use so_quotable::shared::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(AppConfig::load()?).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Database and mailer setup
pub mod config;

/// Server initialization
pub mod init;

pub use config::StartupError;
pub use init::create_app;
pub use state::AppState;
