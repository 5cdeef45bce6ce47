/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by authentication handlers.
 * These types are shared across signup, login, and me handlers, and the
 * `UserResponse` view is reused by the admin endpoints.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::{Role, User};

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    /// User's email address
    pub email: String,
    /// User's password (will be hashed before storage)
    pub password: String,
    /// Display name
    pub name: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    /// User's password (will be verified against stored hash)
    pub password: String,
}

/// Profile update request for `PATCH /api/auth/me`
#[derive(Deserialize, Serialize, Debug)]
pub struct UpdateProfileRequest {
    pub name: String,
}

/// Auth response
///
/// Returned by signup and login handlers. Contains the JWT token
/// and user information for immediate authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT token for authentication (1-hour expiration by default)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// Token, password and rate-limit columns are never included.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub slug: Option<String>,
    pub role: Role,
    pub email_verified: bool,
    pub email_verification_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            role: user.role(),
            email_verified: user.is_email_verified(),
            id: user.id,
            email: user.email,
            name: user.name,
            slug: user.slug,
            email_verification_time: user.email_verification_time,
            created_at: user.created_at,
        }
    }
}
