/**
 * Server Configuration
 *
 * This module turns the loaded `AppConfig` into live services: the SQLite
 * connection pool (with migrations applied) and the outgoing mailer.
 *
 * # Configuration Sources
 *
 * `AppConfig::load` reads the optional TOML file and environment
 * variables; see `shared::config`.
 *
 * # Error Handling
 *
 * Unlike optional integrations, the database is required: connection and
 * migration failures abort startup.
 */

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::sync::Arc;

use crate::backend::email::{build_mailer, EmailError, Mailer};
use crate::shared::config::AppConfig;

/// Errors raised while bringing up server dependencies
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] crate::shared::ConfigError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("email configuration error: {0}")]
    Email(#[from] EmailError),
}

/// Open the SQLite pool and run migrations
///
/// In-memory URLs get a single long-lived connection so every query sees
/// the same database.
///
/// # Example
///
/// ```rust,no_run
/// use so_quotable::backend::server::config::connect_database;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = connect_database("sqlite::memory:").await?;
/// # Ok(())
/// # }
/// ```
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, StartupError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(8)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Build the mailer described by the email section of the config
pub fn load_mailer(config: &AppConfig) -> Result<Arc<dyn Mailer>, StartupError> {
    let mailer = build_mailer(&config.email)?;
    tracing::info!("Outgoing email via {}", mailer.name());
    Ok(mailer)
}
