//! Request field validation.
//!
//! Each helper returns the normalized value or a [`SharedError::ValidationError`]
//! carrying the message shown to the caller ("X is required", ...).

use crate::shared::error::SharedError;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Trimmed, non-empty field value.
pub fn required(field: &str, value: &str, label: &str) -> Result<String, SharedError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SharedError::validation(field, format!("{} is required", label)));
    }
    Ok(trimmed.to_string())
}

/// Optional text field; blank values collapse to `None`.
pub fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Lowercased email address with a basic shape check.
pub fn email(value: &str) -> Result<String, SharedError> {
    let email = value.trim().to_lowercase();
    if email.is_empty() {
        return Err(SharedError::validation("email", "Email is required"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(SharedError::validation("email", "Invalid email format")),
    }
}

pub fn password(value: &str) -> Result<(), SharedError> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
        ));
    }
    Ok(())
}

/// Absolute `https://` URL, as returned by the image CDN.
pub fn https_url(field: &str, value: &str) -> Result<String, SharedError> {
    let url = value.trim();
    if url.is_empty() {
        return Err(SharedError::validation(field, "URL is required"));
    }
    if !url.starts_with("https://") || url.len() <= "https://".len() {
        return Err(SharedError::validation(field, "URL must use https"));
    }
    Ok(url.to_string())
}

/// Optional citation link; blank collapses to `None`, anything else must be http(s).
pub fn optional_web_url(field: &str, value: Option<&str>) -> Result<Option<String>, SharedError> {
    match optional(value) {
        None => Ok(None),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => Ok(Some(url)),
        Some(_) => Err(SharedError::validation(field, "URL must start with http:// or https://")),
    }
}

/// Image dimension in pixels.
pub fn dimension(field: &str, value: i64) -> Result<i64, SharedError> {
    if value <= 0 {
        return Err(SharedError::validation(field, format!("{} must be positive", field)));
    }
    Ok(value)
}
