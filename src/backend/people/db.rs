/**
 * People Database Operations
 *
 * Queries for the `people` table. Deleting a person cascades to their
 * quotes and images through the foreign keys.
 */

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{SqliteConnection, SqliteExecutor};
use uuid::Uuid;

use super::types::Person;
use crate::shared::slug::{slugify, with_suffix};

/// Fields for a new person; `slug` is derived here
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub name: String,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub created_by: Option<Uuid>,
}

/// First free slug for `name` (`name`, `name-2`, ...)
pub async fn unique_slug(conn: &mut SqliteConnection, name: &str) -> Result<String, sqlx::Error> {
    let mut base = slugify(name);
    if base.is_empty() {
        base = "person".to_string();
    }

    let mut attempt = 1;
    loop {
        let candidate = with_suffix(&base, attempt);
        let taken: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM people WHERE slug = ?1")
            .bind(&candidate)
            .fetch_one(&mut *conn)
            .await?;
        if taken == 0 {
            return Ok(candidate);
        }
        attempt += 1;
    }
}

/// Create a person with a unique slug
pub async fn create_person(
    conn: &mut SqliteConnection,
    person: NewPerson,
    now: DateTime<Utc>,
) -> Result<Person, sqlx::Error> {
    let slug = unique_slug(conn, &person.name).await?;

    sqlx::query_as::<_, Person>(
        r#"
        INSERT INTO people (id, name, slug, bio, birth_date, death_date, created_by, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&person.name)
    .bind(&slug)
    .bind(&person.bio)
    .bind(person.birth_date)
    .bind(person.death_date)
    .bind(person.created_by)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
}

pub async fn get_person<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<Option<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>("SELECT * FROM people WHERE id = ?1")
        .bind(id)
        .fetch_optional(executor)
        .await
}

pub async fn get_person_by_slug<'e>(
    executor: impl SqliteExecutor<'e>,
    slug: &str,
) -> Result<Option<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>("SELECT * FROM people WHERE slug = ?1")
        .bind(slug)
        .fetch_optional(executor)
        .await
}

/// List people alphabetically
pub async fn list_people<'e>(
    executor: impl SqliteExecutor<'e>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Person>, sqlx::Error> {
    sqlx::query_as::<_, Person>("SELECT * FROM people ORDER BY name COLLATE NOCASE, created_at LIMIT ?1 OFFSET ?2")
        .bind(limit)
        .bind(offset)
        .fetch_all(executor)
        .await
}

/// Overwrite the editable fields; the slug is left as created
pub async fn update_person<'e>(
    executor: impl SqliteExecutor<'e>,
    person: &Person,
    now: DateTime<Utc>,
) -> Result<Person, sqlx::Error> {
    sqlx::query_as::<_, Person>(
        r#"
        UPDATE people
        SET name = ?1, bio = ?2, birth_date = ?3, death_date = ?4, updated_at = ?5
        WHERE id = ?6
        RETURNING *
        "#,
    )
    .bind(&person.name)
    .bind(&person.bio)
    .bind(person.birth_date)
    .bind(person.death_date)
    .bind(now)
    .bind(person.id)
    .fetch_one(executor)
    .await
}

pub async fn delete_person<'e>(executor: impl SqliteExecutor<'e>, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM people WHERE id = ?1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected() > 0)
}
