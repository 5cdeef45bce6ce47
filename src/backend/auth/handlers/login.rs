/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Generate JWT token
 * 4. Return token and user info
 *
 * Unknown emails, accounts without a password and wrong passwords all get
 * the same 401 response.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::server::state::AppState;

pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

fn invalid_credentials() -> BackendError {
    BackendError::handler(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS)
}

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - If user is not found or password is incorrect
/// * `500 Internal Server Error` - If database query or token generation fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> BackendResult<Json<AuthResponse>> {
    let email = request.email.trim().to_lowercase();

    let user = get_user_by_email(&state.db_pool, &email).await?.ok_or_else(|| {
        tracing::warn!("Login failed: unknown email");
        invalid_credentials()
    })?;

    let Some(password_hash) = user.password_hash.as_deref() else {
        tracing::warn!("Login failed: user {} has no password", user.id);
        return Err(invalid_credentials());
    };

    if !bcrypt::verify(&request.password, password_hash)? {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(invalid_credentials());
    }

    let token = create_token(user.id, &user.email, &state.config)?;
    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
