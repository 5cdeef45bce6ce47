//! Quote records and request bodies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: Uuid,
    pub person_id: Uuid,
    pub text: String,
    pub source: Option<String>,
    pub source_url: Option<String>,
    /// Set by an admin once the attribution has been checked
    pub verified: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreateQuoteRequest {
    pub person_id: Uuid,
    pub text: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

/// Partial update; blank `source`/`source_url` clear the field
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UpdateQuoteRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyQuoteRequest {
    pub verified: bool,
}

/// `?person_id=` filter plus pagination for `GET /api/quotes`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuoteListQuery {
    pub person_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
