//! Fixtures for unit tests: an in-memory app state and seeded users.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::auth::users::{
    after_user_created_or_updated, create_user, update_role, NewUser, Role, User,
};
use crate::backend::email::{ConsoleMailer, OutgoingEmail};
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::server::config::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::config::{AppConfig, EmailConfig};

pub const TEST_PASSWORD: &str = "password123";

pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret("test-secret")
        .bcrypt_cost(4)
        .site_url("http://localhost:3000")
        .generated_image_purge_interval_secs(0)
        .email(EmailConfig {
            test_mode: true,
            ..EmailConfig::default()
        })
        .build()
        .expect("valid test config")
}

/// App state over a fresh in-memory database; the mailer records messages
pub async fn test_state() -> (AppState, Arc<ConsoleMailer>) {
    let pool = connect_database("sqlite::memory:").await.expect("in-memory database");
    let mailer = Arc::new(ConsoleMailer::new());
    (AppState::new(pool, test_config(), mailer.clone()), mailer)
}

pub async fn seed_user(state: &AppState, email: &str, role: Role) -> User {
    let password_hash = bcrypt::hash(TEST_PASSWORD, 4).expect("hash");
    let mut conn = state.db_pool.acquire().await.expect("connection");
    let user = create_user(
        &mut *conn,
        NewUser {
            email: email.to_string(),
            name: email.split('@').next().unwrap_or("user").to_string(),
            password_hash: Some(password_hash),
        },
        Utc::now(),
    )
    .await
    .expect("create user");
    let user = after_user_created_or_updated(&mut conn, user, &state.config)
        .await
        .expect("hook");
    if role == Role::Admin {
        update_role(&mut *conn, user.id, Role::Admin, Utc::now()).await.expect("role")
    } else {
        user
    }
}

pub fn principal(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        user_id: user.id,
        email: user.email.clone(),
    }
}

/// Wait for a dispatched email to reach the console outbox
pub async fn wait_for_email(mailer: &ConsoleMailer, to: &str) -> Option<OutgoingEmail> {
    for _ in 0..50 {
        if let Some(email) = mailer.last_to(to) {
            return Some(email);
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    None
}

/// Give spawned dispatch tasks a chance to run
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
