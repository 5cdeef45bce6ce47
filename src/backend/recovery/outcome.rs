//! Tagged results for token redemption and issuance.
//!
//! Redemption outcomes are business results, not errors: they are returned
//! with `200 OK` as `{success, message?, error?}` so a client can tell
//! "expired" from "invalid" from "already done" without parsing failures.

use serde::{Deserialize, Serialize};

pub const EMAIL_VERIFIED: &str = "Email verified successfully";
pub const EMAIL_ALREADY_VERIFIED: &str = "Email already verified";
pub const INVALID_VERIFICATION_TOKEN: &str = "Invalid verification token";
pub const VERIFICATION_EXPIRED: &str = "Verification token has expired. Please request a new one.";
pub const PASSWORD_RESET: &str = "Password has been reset successfully";
pub const INVALID_RESET_TOKEN: &str = "Invalid or already used reset token";
pub const RESET_EXPIRED: &str = "Reset token has expired. Please request a new one.";

/// Response to verification requests, whether or not anything was sent
pub const VERIFICATION_REQUESTED: &str =
    "If an account exists with this email and is not yet verified, a verification email has been sent.";
/// Response to every reset request, including rate-limited ones
pub const RESET_REQUESTED: &str =
    "If an account exists with this email, a password reset link has been sent.";
pub const VERIFICATION_SENT: &str = "Verification email sent";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    EmailVerified,
    AlreadyVerified,
    PasswordReset,
    InvalidVerificationToken,
    VerificationExpired,
    InvalidResetToken,
    ResetExpired,
    /// The new password failed validation; carries the reason
    WeakPassword(String),
}

/// Wire form of a [`TokenOutcome`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn err(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

impl From<TokenOutcome> for TokenResult {
    fn from(outcome: TokenOutcome) -> Self {
        match outcome {
            TokenOutcome::EmailVerified => TokenResult::ok(EMAIL_VERIFIED),
            TokenOutcome::AlreadyVerified => TokenResult::ok(EMAIL_ALREADY_VERIFIED),
            TokenOutcome::PasswordReset => TokenResult::ok(PASSWORD_RESET),
            TokenOutcome::InvalidVerificationToken => TokenResult::err(INVALID_VERIFICATION_TOKEN),
            TokenOutcome::VerificationExpired => TokenResult::err(VERIFICATION_EXPIRED),
            TokenOutcome::InvalidResetToken => TokenResult::err(INVALID_RESET_TOKEN),
            TokenOutcome::ResetExpired => TokenResult::err(RESET_EXPIRED),
            TokenOutcome::WeakPassword(reason) => TokenResult::err(reason),
        }
    }
}

/// Generic `{success, message}` acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
