/**
 * Authorization Guards
 *
 * Three checks, each stricter than the last:
 *
 * - `require_auth` - a valid session for an existing account
 * - `require_owner_or_admin` - the principal created the resource, or is an admin
 * - `require_admin` - the principal is an admin
 *
 * The owner and admin checks read the principal's role from the database
 * rather than trusting anything in the token, so a role change takes effect
 * on the next request. Records without an owner are admin-only.
 */

use axum::http::HeaderMap;
use sqlx::SqliteExecutor;
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::auth::users::{get_user_by_id, User};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::auth::{bearer_token, AuthenticatedUser};
use crate::backend::server::state::AppState;

/// Resolve the principal from request headers
///
/// The token must verify against the configured secret and its subject
/// must still exist in the database.
pub async fn require_auth(headers: &HeaderMap, state: &AppState) -> BackendResult<AuthenticatedUser> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::debug!("Missing or malformed Authorization header");
        BackendError::NotAuthenticated
    })?;

    let claims = verify_token(token, &state.config).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::NotAuthenticated
    })?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!("Token subject is not a user ID");
        BackendError::NotAuthenticated
    })?;

    if get_user_by_id(&state.db_pool, user_id).await?.is_none() {
        tracing::warn!("Token refers to deleted user {}", user_id);
        return Err(BackendError::NotAuthenticated);
    }

    Ok(AuthenticatedUser {
        user_id,
        email: claims.email,
    })
}

async fn load_principal<'e>(
    executor: impl SqliteExecutor<'e>,
    principal: &AuthenticatedUser,
) -> BackendResult<User> {
    get_user_by_id(executor, principal.user_id)
        .await?
        .ok_or(BackendError::NotAuthenticated)
}

/// Allow the resource owner or any admin
///
/// `owner` is the resource's `created_by`; `None` marks a legacy record.
/// Returns the principal's stored user row.
pub async fn require_owner_or_admin<'e>(
    executor: impl SqliteExecutor<'e>,
    principal: &AuthenticatedUser,
    owner: Option<Uuid>,
) -> BackendResult<User> {
    let user = load_principal(executor, principal).await?;
    if user.is_admin() {
        return Ok(user);
    }
    match owner {
        Some(owner) if owner == user.id => Ok(user),
        _ => {
            tracing::warn!("User {} denied access to resource owned by {:?}", user.id, owner);
            Err(BackendError::NotAuthorized)
        }
    }
}

/// Allow admins only
pub async fn require_admin<'e>(
    executor: impl SqliteExecutor<'e>,
    principal: &AuthenticatedUser,
) -> BackendResult<User> {
    let user = load_principal(executor, principal).await?;
    if !user.is_admin() {
        tracing::warn!("User {} denied admin operation", user.id);
        return Err(BackendError::AdminOnly);
    }
    Ok(user)
}
