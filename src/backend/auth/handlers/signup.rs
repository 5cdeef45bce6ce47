/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email, password and name
 * 2. Hash password using bcrypt
 * 3. In one transaction: check the email is free, create the user, run the
 *    after-created hook (slug, admin role) and issue a verification token
 * 4. Dispatch the verification email
 * 5. Return a JWT and the user
 *
 * # Validation
 *
 * - Email must contain '@' and a domain
 * - Password must be at least 8 characters long
 * - Name must not be blank
 * - Email must be unique (409 otherwise)
 */

use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::{after_user_created_or_updated, create_user, get_user_by_email, NewUser};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::recovery::email_verification::{issue_verification_token, send_verification_email};
use crate::backend::server::state::AppState;
use crate::shared::validation;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If email, password or name is invalid
/// * `409 Conflict` - If user with this email already exists
/// * `500 Internal Server Error` - If hashing or the database fails
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123",
///   "name": "Ada Lovelace"
/// }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> BackendResult<Json<AuthResponse>> {
    let email = validation::email(&request.email)?;
    validation::password(&request.password)?;
    let name = validation::required("name", &request.name, "Name")?;

    let password_hash = bcrypt::hash(&request.password, state.config.bcrypt_cost)?;
    let now = Utc::now();

    let mut tx = state.db_pool.begin().await?;
    if get_user_by_email(&mut *tx, &email).await?.is_some() {
        tracing::warn!("Signup rejected: email already registered");
        return Err(BackendError::conflict("Email already registered"));
    }

    let user = create_user(
        &mut *tx,
        NewUser {
            email,
            name,
            password_hash: Some(password_hash),
        },
        now,
    )
    .await?;
    let user = after_user_created_or_updated(&mut *tx, user, &state.config).await?;
    let verification_token = issue_verification_token(&mut *tx, user.id, now).await?;
    tx.commit().await?;

    send_verification_email(&state, &user.email, &verification_token);

    let token = create_token(user.id, &user.email, &state.config)?;
    tracing::info!("User created: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}
