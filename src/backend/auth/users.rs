/**
 * User Model and Database Operations
 *
 * This module owns the `users` table: account creation, lookups by id,
 * email, slug and token, the token-lifecycle column updates, role changes
 * and the admin-only delete. It also runs the
 * `after_user_created_or_updated` hook, which fills in the slug and
 * applies the configured admin role.
 *
 * Functions that run a single statement accept any `SqliteExecutor`, so
 * they work against the pool or inside an open transaction.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor};
use uuid::Uuid;

use crate::shared::config::AppConfig;
use crate::shared::slug::{slugify, with_suffix};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// User row
///
/// Token and password columns never leave the backend; handlers convert
/// to `UserResponse` before responding.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Lowercased email address (unique)
    pub email: String,
    /// Display name
    pub name: String,
    /// URL slug, filled in by the after-created hook
    pub slug: Option<String>,
    /// `user` or `admin`
    pub role: String,
    /// bcrypt hash; `None` for accounts without a password sign-in
    pub password_hash: Option<String>,
    /// When the email address was confirmed
    pub email_verification_time: Option<DateTime<Utc>>,
    pub verification_token: Option<String>,
    pub verification_token_expires_at: Option<DateTime<Utc>>,
    pub password_reset_token: Option<String>,
    pub password_reset_expires_at: Option<DateTime<Utc>>,
    /// Reset requests inside the current rate-limit window
    pub password_reset_request_count: i64,
    pub password_reset_last_requested_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Stored role; unknown values are treated as a regular user
    pub fn role(&self) -> Role {
        Role::parse(&self.role).unwrap_or(Role::User)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Role::Admin
    }

    pub fn is_email_verified(&self) -> bool {
        self.email_verification_time.is_some()
    }
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password_hash: Option<String>,
}

/// Create a new user
pub async fn create_user<'e>(
    executor: impl SqliteExecutor<'e>,
    new_user: NewUser,
    now: DateTime<Utc>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, name, role, password_hash, created_at, updated_at)
        VALUES (?1, ?2, ?3, 'user', ?4, ?5, ?6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&new_user.email)
    .bind(&new_user.name)
    .bind(&new_user.password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(executor)
    .await
}

/// Get user by ID
pub async fn get_user_by_id<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Get user by (lowercased) email
pub async fn get_user_by_email<'e>(
    executor: impl SqliteExecutor<'e>,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?1")
        .bind(email)
        .fetch_optional(executor)
        .await
}

/// Get user holding an email verification token
pub async fn get_user_by_verification_token<'e>(
    executor: impl SqliteExecutor<'e>,
    token: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE verification_token = ?1")
        .bind(token)
        .fetch_optional(executor)
        .await
}

/// Get user holding a password reset token
pub async fn get_user_by_reset_token<'e>(
    executor: impl SqliteExecutor<'e>,
    token: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE password_reset_token = ?1")
        .bind(token)
        .fetch_optional(executor)
        .await
}

/// List users, newest first
pub async fn list_users<'e>(
    executor: impl SqliteExecutor<'e>,
    limit: i64,
    offset: i64,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC LIMIT ?1 OFFSET ?2")
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await
}

/// Update display name
pub async fn update_name<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    name: &str,
    now: DateTime<Utc>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET name = ?1, updated_at = ?2 WHERE id = ?3 RETURNING *",
    )
    .bind(name)
    .bind(now)
    .bind(id)
    .fetch_one(executor)
    .await
}

/// Update role
pub async fn update_role<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    role: Role,
    now: DateTime<Utc>,
) -> Result<User, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "UPDATE users SET role = ?1, updated_at = ?2 WHERE id = ?3 RETURNING *",
    )
    .bind(role.as_str())
    .bind(now)
    .bind(id)
    .fetch_one(executor)
    .await
}

/// Store a fresh email verification token, replacing any previous one
pub async fn set_verification_token<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    token: &str,
    expires_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET verification_token = ?1, verification_token_expires_at = ?2, updated_at = ?3
        WHERE id = ?4
        "#,
    )
    .bind(token)
    .bind(expires_at)
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Mark the email verified and clear the verification token
pub async fn mark_email_verified<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    now: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET email_verification_time = ?1,
            verification_token = NULL,
            verification_token_expires_at = NULL,
            updated_at = ?1
        WHERE id = ?2
        "#,
    )
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Store a reset token together with the rate-limit window state
pub async fn set_password_reset<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    token: &str,
    expires_at: DateTime<Utc>,
    request_count: i64,
    now: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_reset_token = ?1,
            password_reset_expires_at = ?2,
            password_reset_request_count = ?3,
            password_reset_last_requested_at = ?4,
            updated_at = ?4
        WHERE id = ?5
        "#,
    )
    .bind(token)
    .bind(expires_at)
    .bind(request_count)
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Replace the password and clear every reset column
///
/// The email is marked verified if it was not already: the reset token
/// was delivered to that mailbox.
pub async fn complete_password_reset<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    password_hash: &str,
    now: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE users
        SET password_hash = ?1,
            password_reset_token = NULL,
            password_reset_expires_at = NULL,
            password_reset_request_count = 0,
            password_reset_last_requested_at = NULL,
            email_verification_time = COALESCE(email_verification_time, ?2),
            updated_at = ?2
        WHERE id = ?3
        "#,
    )
    .bind(password_hash)
    .bind(now)
    .bind(id)
    .execute(executor)
    .await?;
    Ok(())
}

/// Delete a user; returns whether a row was removed
pub async fn delete_user<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM users WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

async fn slug_taken<'e>(
    executor: impl SqliteExecutor<'e>,
    slug: &str,
    except: Uuid,
) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE slug = ?1 AND id != ?2")
        .bind(slug)
        .bind(except)
        .fetch_one(executor)
        .await?;
    Ok(count > 0)
}

/// Hook run after every account creation or profile update
///
/// - assigns a unique slug derived from the display name (falling back to
///   the email local part) when the user has none
/// - promotes the user to admin when their email is listed in `admin_emails`
///
/// Returns the user as stored after the hook.
pub async fn after_user_created_or_updated(
    conn: &mut SqliteConnection,
    user: User,
    config: &AppConfig,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();
    let mut user = user;

    if user.slug.is_none() {
        let mut base = slugify(&user.name);
        if base.is_empty() {
            base = slugify(user.email.split('@').next().unwrap_or_default());
        }
        if base.is_empty() {
            base = "user".to_string();
        }

        let mut attempt = 1;
        let slug = loop {
            let candidate = with_suffix(&base, attempt);
            if !slug_taken(&mut *conn, &candidate, user.id).await? {
                break candidate;
            }
            attempt += 1;
        };

        user = sqlx::query_as::<_, User>(
            "UPDATE users SET slug = ?1, updated_at = ?2 WHERE id = ?3 RETURNING *",
        )
        .bind(&slug)
        .bind(now)
        .bind(user.id)
        .fetch_one(&mut *conn)
        .await?;
    }

    if !user.is_admin() && config.is_admin_email(&user.email) {
        tracing::info!("Promoting configured admin account {}", user.id);
        user = update_role(&mut *conn, user.id, Role::Admin, now).await?;
    }

    Ok(user)
}
