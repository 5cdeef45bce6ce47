/**
 * Image Database Operations
 *
 * Queries for `images` and `generated_images`. Timestamps are stored as
 * UTC RFC 3339 text, so expiry comparisons are done on the text directly.
 */

use chrono::{DateTime, Utc};
use sqlx::SqliteExecutor;
use uuid::Uuid;

use super::types::{GeneratedImage, Image};

#[derive(Debug, Clone)]
pub struct NewImage {
    pub person_id: Uuid,
    pub cloudinary_id: String,
    pub url: String,
    pub width: i64,
    pub height: i64,
    pub caption: Option<String>,
    pub created_by: Option<Uuid>,
}

#[derive(Debug, Clone)]
pub struct NewGeneratedImage {
    pub quote_id: Uuid,
    pub cloudinary_id: String,
    pub url: String,
    pub width: i64,
    pub height: i64,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: Option<Uuid>,
}

pub async fn create_image<'e>(
    executor: impl SqliteExecutor<'e>,
    image: NewImage,
    now: DateTime<Utc>,
) -> Result<Image, sqlx::Error> {
    sqlx::query_as::<_, Image>(
        r#"
        INSERT INTO images (id, person_id, cloudinary_id, url, width, height, caption, created_by, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(image.person_id)
    .bind(&image.cloudinary_id)
    .bind(&image.url)
    .bind(image.width)
    .bind(image.height)
    .bind(&image.caption)
    .bind(image.created_by)
    .bind(now)
    .fetch_one(executor)
    .await
}

pub async fn get_image<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<Option<Image>, sqlx::Error> {
    sqlx::query_as::<_, Image>("SELECT * FROM images WHERE id = ?1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn list_images_for_person<'e>(
    executor: impl SqliteExecutor<'e>,
    person_id: Uuid,
) -> Result<Vec<Image>, sqlx::Error> {
    sqlx::query_as::<_, Image>("SELECT * FROM images WHERE person_id = ?1 ORDER BY created_at")
        .bind(person_id)
        .fetch_all(executor)
        .await
}

pub async fn delete_image<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM images WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn create_generated_image<'e>(
    executor: impl SqliteExecutor<'e>,
    image: NewGeneratedImage,
    now: DateTime<Utc>,
) -> Result<GeneratedImage, sqlx::Error> {
    sqlx::query_as::<_, GeneratedImage>(
        r#"
        INSERT INTO generated_images (id, quote_id, cloudinary_id, url, width, height, expires_at, created_by, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(image.quote_id)
    .bind(&image.cloudinary_id)
    .bind(&image.url)
    .bind(image.width)
    .bind(image.height)
    .bind(image.expires_at)
    .bind(image.created_by)
    .bind(now)
    .fetch_one(executor)
    .await
}

pub async fn get_generated_image<'e>(
    executor: impl SqliteExecutor<'e>,
    id: Uuid,
) -> Result<Option<GeneratedImage>, sqlx::Error> {
    sqlx::query_as::<_, GeneratedImage>("SELECT * FROM generated_images WHERE id = ?1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Generated images for a quote that have not expired at `now`
pub async fn list_generated_images_for_quote<'e>(
    executor: impl SqliteExecutor<'e>,
    quote_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<GeneratedImage>, sqlx::Error> {
    sqlx::query_as::<_, GeneratedImage>(
        r#"
        SELECT * FROM generated_images
        WHERE quote_id = ?1 AND (expires_at IS NULL OR expires_at >= ?2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(quote_id)
    .bind(now)
    .fetch_all(executor)
    .await
}

pub async fn delete_generated_image<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM generated_images WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete generated images whose expiry is before `now`; returns the count
pub async fn purge_expired_generated_images<'e>(
    executor: impl SqliteExecutor<'e>,
    now: DateTime<Utc>,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM generated_images WHERE expires_at IS NOT NULL AND expires_at < ?1")
        .bind(now)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
