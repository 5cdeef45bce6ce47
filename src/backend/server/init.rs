/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to SQLite and run migrations
 * 2. Build the mailer from the email configuration
 * 3. Start the expired generated-image purge task
 * 4. Create and configure the router
 */

use axum::Router;
use chrono::Utc;
use sqlx::SqlitePool;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::backend::images::purge_expired_generated_images;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{connect_database, load_mailer, StartupError};
use crate::backend::server::state::AppState;
use crate::shared::config::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Startup fails when the database cannot be opened or migrated, or when
/// the configured email provider is missing its credentials.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing So Quotable backend server");

    let db_pool = connect_database(&config.database_url).await?;
    let mailer = load_mailer(&config)?;

    spawn_purge_task(db_pool.clone(), config.generated_image_purge_interval_secs);

    let app_state = AppState::new(db_pool, config, mailer);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}

/// Periodically delete expired generated images
///
/// An interval of zero disables the task and returns `None`. Failures are
/// logged and the task keeps running.
pub fn spawn_purge_task(pool: SqlitePool, interval_secs: u64) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        tracing::info!("Generated image purge task disabled");
        return None;
    }

    Some(tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            interval.tick().await;
            match purge_expired_generated_images(&pool, Utc::now()).await {
                Ok(0) => tracing::debug!("No expired generated images"),
                Ok(deleted) => tracing::info!("Purged {} expired generated images", deleted),
                Err(e) => tracing::error!("Generated image purge failed: {}", e),
            }
        }
    }))
}
