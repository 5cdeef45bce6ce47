//! Opaque single-use tokens and their lifetimes.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Length of a generated token in characters
pub const TOKEN_LENGTH: usize = 64;

/// Generate an opaque token: two random v4 UUIDs without hyphens
pub fn generate_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Email verification tokens are valid for 24 hours
pub fn verification_ttl() -> Duration {
    Duration::hours(24)
}

/// Password reset tokens are valid for 1 hour
pub fn password_reset_ttl() -> Duration {
    Duration::hours(1)
}

/// A token without an expiry is treated as expired
pub fn is_expired(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match expires_at {
        Some(expires_at) => now > expires_at,
        None => true,
    }
}
