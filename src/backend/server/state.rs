/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The SQLite connection pool
 * - The validated application configuration
 * - The outgoing mailer
 *
 * Every field is cheap to clone (`SqlitePool` and `Arc`), so the whole state
 * is cloned into each handler.
 *
 * # Example
 *
 * ```rust,no_run
 * use so_quotable::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let _pool = &state.db_pool;
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::email::Mailer;
use crate::shared::config::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool with migrations applied
    pub db_pool: SqlitePool,

    /// Validated configuration (JWT secret, site URL, admin emails, ...)
    pub config: Arc<AppConfig>,

    /// Transport used for verification and reset emails
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: AppConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
            mailer,
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// This allows read-only handlers to extract the pool directly with
/// `State(pool): State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
