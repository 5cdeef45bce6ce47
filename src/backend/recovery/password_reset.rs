/**
 * Password Reset
 *
 * Request and redeem password reset tokens.
 *
 * Requests always get the same response, whether the address is unknown,
 * the account exists, or the account hit the rate limit (three requests per
 * hour). A rate-limited request changes nothing: the stored token is not
 * rotated and the counter stays at the limit.
 *
 * Redemption is single-use: a successful reset clears the token along with
 * the rate-limit counters.
 */

use chrono::{DateTime, Utc};

use super::outcome::{MessageResponse, TokenOutcome, RESET_REQUESTED};
use super::rate_limit::{FixedWindow, WindowDecision};
use super::tokens::{generate_token, is_expired, password_reset_ttl};
use crate::backend::auth::users::{complete_password_reset, get_user_by_email, get_user_by_reset_token, set_password_reset};
use crate::backend::email::{dispatch, templates::password_reset_email};
use crate::backend::error::BackendResult;
use crate::backend::server::state::AppState;
use crate::shared::validation;

/// Issue a reset token for `email` and send it, subject to the rate limit
pub async fn request_password_reset(
    state: &AppState,
    email: &str,
    now: DateTime<Utc>,
) -> BackendResult<MessageResponse> {
    let response = MessageResponse::new(RESET_REQUESTED);
    let Ok(email) = validation::email(email) else {
        return Ok(response);
    };

    let mut tx = state.db_pool.begin().await?;
    let Some(user) = get_user_by_email(&mut *tx, &email).await? else {
        tracing::debug!("Password reset requested for unknown email");
        return Ok(response);
    };

    let count = match FixedWindow::password_reset().check(
        user.password_reset_request_count,
        user.password_reset_last_requested_at,
        now,
    ) {
        WindowDecision::Allowed { count } => count,
        WindowDecision::Limited => {
            tracing::warn!("Password reset rate limit reached for user {}", user.id);
            return Ok(response);
        }
    };

    let token = generate_token();
    set_password_reset(&mut *tx, user.id, &token, now + password_reset_ttl(), count, now).await?;
    tx.commit().await?;

    tracing::info!("Issued password reset token for user {} ({} in window)", user.id, count);
    let link = state.config.link("/reset-password", &token);
    dispatch(state.mailer.clone(), password_reset_email(&user.email, &link));

    Ok(response)
}

/// Redeem a reset token and set a new password
///
/// Also marks the email verified: the token could only have been read from
/// that mailbox.
pub async fn reset_password(
    state: &AppState,
    token: &str,
    new_password: &str,
    now: DateTime<Utc>,
) -> BackendResult<TokenOutcome> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(TokenOutcome::InvalidResetToken);
    }

    let mut tx = state.db_pool.begin().await?;
    let Some(user) = get_user_by_reset_token(&mut *tx, token).await? else {
        tracing::warn!("Password reset attempted with unknown token");
        return Ok(TokenOutcome::InvalidResetToken);
    };

    if is_expired(user.password_reset_expires_at, now) {
        tracing::info!("Expired reset token for user {}", user.id);
        return Ok(TokenOutcome::ResetExpired);
    }

    if let Err(e) = validation::password(new_password) {
        return Ok(TokenOutcome::WeakPassword(e.user_message().to_string()));
    }

    let password_hash = bcrypt::hash(new_password, state.config.bcrypt_cost)?;
    complete_password_reset(&mut *tx, user.id, &password_hash, now).await?;
    tx.commit().await?;

    tracing::info!("Password reset for user {}", user.id);
    Ok(TokenOutcome::PasswordReset)
}
