/**
 * Recovery Handlers
 *
 * HTTP handlers for email verification and password reset.
 *
 * # Endpoints
 *
 * - `POST /api/auth/verify-email` - redeem a verification token
 * - `POST /api/auth/request-verification` - email a verification link to an address
 * - `POST /api/auth/resend-verification` - email a new link to the signed-in user
 * - `POST /api/auth/forgot-password` - email a reset link
 * - `POST /api/auth/reset-password` - redeem a reset token
 *
 * Redemption endpoints always answer `200 OK` with a `TokenResult`; only
 * infrastructure failures produce an error status.
 */

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::email_verification::{request_verification_email, resend_verification, verify_email};
use super::outcome::{MessageResponse, TokenResult};
use super::password_reset::{request_password_reset, reset_password};
use crate::backend::error::BackendResult;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

#[derive(Debug, Deserialize, Serialize)]
pub struct TokenRequest {
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

pub async fn verify_email_handler(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> BackendResult<Json<TokenResult>> {
    let outcome = verify_email(&state, &request.token, Utc::now()).await?;
    Ok(Json(outcome.into()))
}

pub async fn request_verification_handler(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> BackendResult<Json<MessageResponse>> {
    Ok(Json(request_verification_email(&state, &request.email, Utc::now()).await?))
}

pub async fn resend_verification_handler(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> BackendResult<Json<MessageResponse>> {
    Ok(Json(resend_verification(&state, &user, Utc::now()).await?))
}

pub async fn forgot_password_handler(
    State(state): State<AppState>,
    Json(request): Json<EmailRequest>,
) -> BackendResult<Json<MessageResponse>> {
    Ok(Json(request_password_reset(&state, &request.email, Utc::now()).await?))
}

pub async fn reset_password_handler(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> BackendResult<Json<TokenResult>> {
    let outcome = reset_password(&state, &request.token, &request.password, Utc::now()).await?;
    Ok(Json(outcome.into()))
}
