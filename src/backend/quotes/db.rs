/**
 * Quote Database Operations
 *
 * Queries for the `quotes` table. Deleting a quote cascades to its
 * generated images.
 */

use chrono::{DateTime, Utc};
use sqlx::SqliteExecutor;
use uuid::Uuid;

use super::types::Quote;

#[derive(Debug, Clone)]
pub struct NewQuote {
    pub person_id: Uuid,
    pub text: String,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub created_by: Option<Uuid>,
}

pub async fn create_quote<'e>(
    executor: impl SqliteExecutor<'e>,
    quote: NewQuote,
    now: DateTime<Utc>,
) -> Result<Quote, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        INSERT INTO quotes (id, person_id, text, source, source_url, verified, created_by, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7, ?7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(quote.person_id)
    .bind(&quote.text)
    .bind(&quote.source)
    .bind(&quote.source_url)
    .bind(quote.created_by)
    .bind(now)
    .fetch_one(executor)
    .await
}

pub async fn get_quote<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>("SELECT * FROM quotes WHERE id = ?1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Newest first, optionally restricted to one person
pub async fn list_quotes<'e>(
    executor: impl SqliteExecutor<'e>,
    person_id: Option<Uuid>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        SELECT * FROM quotes
        WHERE ?1 IS NULL OR person_id = ?1
        ORDER BY created_at DESC
        LIMIT ?2 OFFSET ?3
        "#,
    )
    .bind(person_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(executor)
    .await
}

pub async fn update_quote<'e>(
    executor: impl SqliteExecutor<'e>,
    quote: &Quote,
    now: DateTime<Utc>,
) -> Result<Quote, sqlx::Error> {
    sqlx::query_as::<_, Quote>(
        r#"
        UPDATE quotes
        SET text = ?1, source = ?2, source_url = ?3, updated_at = ?4
        WHERE id = ?5
        RETURNING *
        "#,
    )
    .bind(&quote.text)
    .bind(&quote.source)
    .bind(&quote.source_url)
    .bind(now)
    .bind(quote.id)
    .fetch_one(executor)
    .await
}

pub async fn set_verified<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
    verified: bool,
    now: DateTime<Utc>,
) -> Result<Option<Quote>, sqlx::Error> {
    sqlx::query_as::<_, Quote>("UPDATE quotes SET verified = ?1, updated_at = ?2 WHERE id = ?3 RETURNING *")
        .bind(verified)
        .bind(now)
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn delete_quote<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM quotes WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
