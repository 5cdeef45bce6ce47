/**
 * People Handlers
 *
 * # Endpoints
 *
 * - `GET /api/people` - list people
 * - `GET /api/people/{id}` - get by UUID or slug
 * - `POST /api/people` - create (signed in)
 * - `PATCH /api/people/{id}` - update (owner or admin)
 * - `DELETE /api/people/{id}` - delete with quotes and images (owner or admin)
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::db::{create_person, delete_person, get_person, get_person_by_slug, list_people, update_person, NewPerson};
use super::types::{CreatePersonRequest, Person, UpdatePersonRequest};
use crate::backend::auth::guards::require_owner_or_admin;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{validation, Pagination};

fn check_dates(birth: Option<NaiveDate>, death: Option<NaiveDate>) -> BackendResult<()> {
    if let (Some(birth), Some(death)) = (birth, death) {
        if death < birth {
            return Err(BackendError::validation("death_date", "Death date must not be before birth date"));
        }
    }
    Ok(())
}

pub async fn list_people_handler(
    State(state): State<AppState>,
    Query(page): Query<Pagination>,
) -> BackendResult<Json<Vec<Person>>> {
    let people = list_people(&state.db_pool, page.limit(), page.offset()).await?;
    Ok(Json(people))
}

/// Look up by UUID first, then by slug
///
/// A UUID-shaped value that matches no id is still tried as a slug.
pub async fn get_person_handler(
    State(state): State<AppState>,
    Path(id_or_slug): Path<String>,
) -> BackendResult<Json<Person>> {
    let by_id = match Uuid::parse_str(&id_or_slug) {
        Ok(id) => get_person(&state.db_pool, id).await?,
        Err(_) => None,
    };
    let person = match by_id {
        Some(person) => Some(person),
        None => get_person_by_slug(&state.db_pool, &id_or_slug).await?,
    };
    person.map(Json).ok_or_else(|| BackendError::not_found("Person"))
}

pub async fn create_person_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(request): Json<CreatePersonRequest>,
) -> BackendResult<(StatusCode, Json<Person>)> {
    let name = validation::required("name", &request.name, "Name")?;
    check_dates(request.birth_date, request.death_date)?;

    let mut tx = state.db_pool.begin().await?;
    let person = create_person(
        &mut *tx,
        NewPerson {
            name,
            bio: validation::optional(request.bio.as_deref()),
            birth_date: request.birth_date,
            death_date: request.death_date,
            created_by: Some(principal.user_id),
        },
        Utc::now(),
    )
    .await?;
    tx.commit().await?;

    tracing::info!("Person {} created by {}", person.slug, principal.user_id);
    Ok((StatusCode::CREATED, Json(person)))
}

pub async fn update_person_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePersonRequest>,
) -> BackendResult<Json<Person>> {
    let mut tx = state.db_pool.begin().await?;
    let mut person = get_person(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Person"))?;
    require_owner_or_admin(&mut *tx, &principal, person.created_by).await?;

    if let Some(name) = request.name {
        person.name = validation::required("name", &name, "Name")?;
    }
    if let Some(bio) = request.bio {
        person.bio = validation::optional(Some(&bio));
    }
    if let Some(birth_date) = request.birth_date {
        person.birth_date = birth_date;
    }
    if let Some(death_date) = request.death_date {
        person.death_date = death_date;
    }
    check_dates(person.birth_date, person.death_date)?;

    let person = update_person(&mut *tx, &person, Utc::now()).await?;
    tx.commit().await?;

    Ok(Json(person))
}

pub async fn delete_person_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> BackendResult<StatusCode> {
    let mut tx = state.db_pool.begin().await?;
    let person = get_person(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Person"))?;
    require_owner_or_admin(&mut *tx, &principal, person.created_by).await?;

    delete_person(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!("Person {} deleted by {}", person.slug, principal.user_id);
    Ok(StatusCode::NO_CONTENT)
}
