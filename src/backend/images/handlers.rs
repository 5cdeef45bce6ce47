/**
 * Image Handlers
 *
 * # Endpoints
 *
 * - `GET /api/people/{id}/images` - photos of a person
 * - `POST /api/images` - record an uploaded photo (signed in; person must exist)
 * - `DELETE /api/images/{id}` - delete (owner or admin)
 * - `GET /api/quotes/{id}/generated-images` - unexpired quote cards
 * - `POST /api/generated-images` - record a quote card (signed in; optional TTL)
 * - `DELETE /api/generated-images/{id}` - delete (owner or admin)
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use super::db::{
    create_generated_image, create_image, delete_generated_image, delete_image, get_generated_image, get_image,
    list_generated_images_for_quote, list_images_for_person, NewGeneratedImage, NewImage,
};
use super::types::{CreateGeneratedImageRequest, CreateImageRequest, GeneratedImage, Image};
use crate::backend::auth::guards::require_owner_or_admin;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::people::db::get_person;
use crate::backend::quotes::db::get_quote;
use crate::backend::server::state::AppState;
use crate::shared::validation;

/// Longest accepted generated-image lifetime (one year)
pub const MAX_TTL_SECS: i64 = 365 * 24 * 60 * 60;

fn expiry(ttl_secs: Option<i64>, now: DateTime<Utc>) -> BackendResult<Option<DateTime<Utc>>> {
    match ttl_secs {
        None => Ok(None),
        Some(ttl) if (1..=MAX_TTL_SECS).contains(&ttl) => Ok(Some(now + Duration::seconds(ttl))),
        Some(_) => Err(BackendError::validation(
            "ttl_secs",
            format!("ttl_secs must be between 1 and {}", MAX_TTL_SECS),
        )),
    }
}

pub async fn list_person_images_handler(
    State(state): State<AppState>,
    Path(person_id): Path<Uuid>,
) -> BackendResult<Json<Vec<Image>>> {
    if get_person(&state.db_pool, person_id).await?.is_none() {
        return Err(BackendError::not_found("Person"));
    }
    Ok(Json(list_images_for_person(&state.db_pool, person_id).await?))
}

pub async fn create_image_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(request): Json<CreateImageRequest>,
) -> BackendResult<(StatusCode, Json<Image>)> {
    let cloudinary_id = validation::required("cloudinary_id", &request.cloudinary_id, "Image id")?;
    let url = validation::https_url("url", &request.url)?;
    let width = validation::dimension("width", request.width)?;
    let height = validation::dimension("height", request.height)?;

    let mut tx = state.db_pool.begin().await?;
    if get_person(&mut *tx, request.person_id).await?.is_none() {
        return Err(BackendError::not_found("Person"));
    }

    let image = create_image(
        &mut *tx,
        NewImage {
            person_id: request.person_id,
            cloudinary_id,
            url,
            width,
            height,
            caption: validation::optional(request.caption.as_deref()),
            created_by: Some(principal.user_id),
        },
        Utc::now(),
    )
    .await?;
    tx.commit().await?;

    tracing::info!("Image {} attached to person {}", image.id, image.person_id);
    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn delete_image_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> BackendResult<StatusCode> {
    let mut tx = state.db_pool.begin().await?;
    let image = get_image(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Image"))?;
    require_owner_or_admin(&mut *tx, &principal, image.created_by).await?;

    delete_image(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_quote_generated_images_handler(
    State(state): State<AppState>,
    Path(quote_id): Path<Uuid>,
) -> BackendResult<Json<Vec<GeneratedImage>>> {
    if get_quote(&state.db_pool, quote_id).await?.is_none() {
        return Err(BackendError::not_found("Quote"));
    }
    let images = list_generated_images_for_quote(&state.db_pool, quote_id, Utc::now()).await?;
    Ok(Json(images))
}

pub async fn create_generated_image_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(request): Json<CreateGeneratedImageRequest>,
) -> BackendResult<(StatusCode, Json<GeneratedImage>)> {
    let now = Utc::now();
    let cloudinary_id = validation::required("cloudinary_id", &request.cloudinary_id, "Image id")?;
    let url = validation::https_url("url", &request.url)?;
    let width = validation::dimension("width", request.width)?;
    let height = validation::dimension("height", request.height)?;
    let expires_at = expiry(request.ttl_secs, now)?;

    let mut tx = state.db_pool.begin().await?;
    if get_quote(&mut *tx, request.quote_id).await?.is_none() {
        return Err(BackendError::not_found("Quote"));
    }

    let image = create_generated_image(
        &mut *tx,
        NewGeneratedImage {
            quote_id: request.quote_id,
            cloudinary_id,
            url,
            width,
            height,
            expires_at,
            created_by: Some(principal.user_id),
        },
        now,
    )
    .await?;
    tx.commit().await?;

    Ok((StatusCode::CREATED, Json(image)))
}

pub async fn delete_generated_image_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> BackendResult<StatusCode> {
    let mut tx = state.db_pool.begin().await?;
    let image = get_generated_image(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Generated image"))?;
    require_owner_or_admin(&mut *tx, &principal, image.created_by).await?;

    delete_generated_image(&mut *tx, id).await?;
    tx.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
