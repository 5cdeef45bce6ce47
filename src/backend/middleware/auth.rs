/**
 * Authentication Extractor
 *
 * This module provides the `AuthUser` extractor for handlers that require
 * user authentication. It reads the JWT from the `Authorization: Bearer`
 * header and resolves the principal through `auth::guards::require_auth`.
 *
 * Failures reject the request with `BackendError::NotAuthenticated`
 * ("Not authenticated", 401) whatever the cause.
 */

use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};
use uuid::Uuid;

use crate::backend::auth::guards::require_auth;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Extract the bearer token from request headers
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Axum extractor for authenticated user
///
/// Use as a handler parameter on any route that requires a signed-in
/// user; the request is rejected before the handler runs otherwise.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        require_auth(&parts.headers, state).await.map(AuthUser)
    }
}
