//! Image metadata records and request bodies.
//!
//! The bytes live on the image CDN; these rows keep the CDN public id,
//! secure URL and pixel dimensions the client received after uploading.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A photo of a person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Image {
    pub id: Uuid,
    pub person_id: Uuid,
    /// CDN public id
    pub cloudinary_id: String,
    pub url: String,
    pub width: i64,
    pub height: i64,
    pub caption: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A rendered quote card; may expire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GeneratedImage {
    pub id: Uuid,
    pub quote_id: Uuid,
    pub cloudinary_id: String,
    pub url: String,
    pub width: i64,
    pub height: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateImageRequest {
    pub person_id: Uuid,
    pub cloudinary_id: String,
    pub url: String,
    pub width: i64,
    pub height: i64,
    #[serde(default)]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGeneratedImageRequest {
    pub quote_id: Uuid,
    pub cloudinary_id: String,
    pub url: String,
    pub width: i64,
    pub height: i64,
    /// Lifetime in seconds; omitted means the image never expires
    #[serde(default)]
    pub ttl_secs: Option<i64>,
}

/// Result of an expired generated-image purge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeResponse {
    pub deleted: u64,
}
