/**
 * Admin Handlers
 *
 * Every handler here starts with `require_admin`, which reads the caller's
 * role from the database.
 *
 * # Endpoints
 *
 * - `GET /api/admin/users` - list users, newest first
 * - `PATCH /api/admin/users/{id}/role` - set a user's role
 * - `DELETE /api/admin/users/{id}` - delete a user; their content is kept with no owner
 * - `POST /api/admin/generated-images/purge` - delete expired generated images
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::guards::require_admin;
use crate::backend::auth::handlers::types::UserResponse;
use crate::backend::auth::users::{delete_user, get_user_by_id, list_users, update_role, Role};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::images::{purge_expired_generated_images, PurgeResponse};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::Pagination;

pub const CANNOT_DELETE_SELF: &str = "Admins cannot delete their own account";
pub const CANNOT_DEMOTE_SELF: &str = "Admins cannot remove their own admin role";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetRoleRequest {
    pub role: Role,
}

pub async fn list_users_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Query(page): Query<Pagination>,
) -> BackendResult<Json<Vec<UserResponse>>> {
    require_admin(&state.db_pool, &principal).await?;

    let users = list_users(&state.db_pool, page.limit(), page.offset()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn set_role_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<SetRoleRequest>,
) -> BackendResult<Json<UserResponse>> {
    let mut tx = state.db_pool.begin().await?;
    require_admin(&mut *tx, &principal).await?;
    if id == principal.user_id && request.role != Role::Admin {
        return Err(BackendError::handler(StatusCode::BAD_REQUEST, CANNOT_DEMOTE_SELF));
    }
    if get_user_by_id(&mut *tx, id).await?.is_none() {
        return Err(BackendError::not_found("User"));
    }

    let user = update_role(&mut *tx, id, request.role, Utc::now()).await?;
    tx.commit().await?;

    tracing::info!("User {} role set to {} by {}", id, request.role.as_str(), principal.user_id);
    Ok(Json(UserResponse::from(user)))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> BackendResult<StatusCode> {
    let mut tx = state.db_pool.begin().await?;
    require_admin(&mut *tx, &principal).await?;
    if id == principal.user_id {
        return Err(BackendError::handler(StatusCode::BAD_REQUEST, CANNOT_DELETE_SELF));
    }
    if !delete_user(&mut *tx, id).await? {
        return Err(BackendError::not_found("User"));
    }
    tx.commit().await?;

    tracing::info!("User {} deleted by {}", id, principal.user_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn purge_generated_images_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
) -> BackendResult<Json<PurgeResponse>> {
    require_admin(&state.db_pool, &principal).await?;

    let deleted = purge_expired_generated_images(&state.db_pool, Utc::now()).await?;
    tracing::info!("Purged {} expired generated images", deleted);
    Ok(Json(PurgeResponse { deleted }))
}
