/**
 * Email Verification
 *
 * Issue and redeem email verification tokens.
 *
 * # Flow
 *
 * 1. A token is issued at sign-up (and on request) and emailed as a link
 * 2. The link's page posts the token to `/api/auth/verify-email`
 * 3. Redemption sets `email_verification_time` and clears the token
 *
 * Each operation runs inside one transaction; the email is dispatched only
 * after the commit so a rolled-back token is never sent.
 */

use chrono::{DateTime, Utc};
use sqlx::SqliteExecutor;
use uuid::Uuid;

use super::outcome::{MessageResponse, TokenOutcome, EMAIL_ALREADY_VERIFIED, VERIFICATION_REQUESTED, VERIFICATION_SENT};
use super::tokens::{generate_token, is_expired, verification_ttl};
use crate::backend::auth::users::{get_user_by_email, get_user_by_id, get_user_by_verification_token, mark_email_verified, set_verification_token};
use crate::backend::email::{dispatch, templates::verification_email};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthenticatedUser;
use crate::backend::server::state::AppState;
use crate::shared::validation;

/// Store a fresh verification token for `user_id`
///
/// Always replaces any previous token; the new one expires 24 hours after
/// `now`. The caller is responsible for delivering it.
pub async fn issue_verification_token<'e>(
    executor: impl SqliteExecutor<'e>,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<String, sqlx::Error> {
    let token = generate_token();
    set_verification_token(executor, user_id, &token, now + verification_ttl(), now).await?;
    tracing::info!("Issued verification token for user {}", user_id);
    Ok(token)
}

/// Email a verification link to `email`
pub(crate) fn send_verification_email(state: &AppState, email: &str, token: &str) {
    let link = state.config.link("/verify-email", token);
    dispatch(state.mailer.clone(), verification_email(email, &link));
}

/// Send a verification email to an address, if it belongs to an unverified account
///
/// The response is the same whether the account exists, is already
/// verified, or was just sent a link.
pub async fn request_verification_email(
    state: &AppState,
    email: &str,
    now: DateTime<Utc>,
) -> BackendResult<MessageResponse> {
    let response = MessageResponse::new(VERIFICATION_REQUESTED);
    let Ok(email) = validation::email(email) else {
        return Ok(response);
    };

    let mut tx = state.db_pool.begin().await?;
    let Some(user) = get_user_by_email(&mut *tx, &email).await? else {
        tracing::debug!("Verification requested for unknown email");
        return Ok(response);
    };
    if user.is_email_verified() {
        tracing::debug!("Verification requested for verified user {}", user.id);
        return Ok(response);
    }

    let token = issue_verification_token(&mut *tx, user.id, now).await?;
    tx.commit().await?;

    send_verification_email(state, &user.email, &token);
    Ok(response)
}

/// Re-send the verification email to the signed-in user
pub async fn resend_verification(
    state: &AppState,
    principal: &AuthenticatedUser,
    now: DateTime<Utc>,
) -> BackendResult<MessageResponse> {
    let mut tx = state.db_pool.begin().await?;
    let user = get_user_by_id(&mut *tx, principal.user_id)
        .await?
        .ok_or(BackendError::NotAuthenticated)?;
    if user.is_email_verified() {
        return Ok(MessageResponse::new(EMAIL_ALREADY_VERIFIED));
    }

    let token = issue_verification_token(&mut *tx, user.id, now).await?;
    tx.commit().await?;

    send_verification_email(state, &user.email, &token);
    Ok(MessageResponse::new(VERIFICATION_SENT))
}

/// Redeem a verification token
///
/// Unknown and expired tokens are rejected. An account that is already
/// verified succeeds without any change.
pub async fn verify_email(state: &AppState, token: &str, now: DateTime<Utc>) -> BackendResult<TokenOutcome> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(TokenOutcome::InvalidVerificationToken);
    }

    let mut tx = state.db_pool.begin().await?;
    let Some(user) = get_user_by_verification_token(&mut *tx, token).await? else {
        tracing::warn!("Verification attempted with unknown token");
        return Ok(TokenOutcome::InvalidVerificationToken);
    };

    if is_expired(user.verification_token_expires_at, now) {
        tracing::info!("Expired verification token for user {}", user.id);
        return Ok(TokenOutcome::VerificationExpired);
    }

    if user.is_email_verified() {
        return Ok(TokenOutcome::AlreadyVerified);
    }

    mark_email_verified(&mut *tx, user.id, now).await?;
    tx.commit().await?;

    tracing::info!("Email verified for user {}", user.id);
    Ok(TokenOutcome::EmailVerified)
}
