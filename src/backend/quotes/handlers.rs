/**
 * Quote Handlers
 *
 * # Endpoints
 *
 * - `GET /api/quotes?person_id=` - list, optionally for one person
 * - `GET /api/quotes/{id}` - get one quote
 * - `POST /api/quotes` - create (signed in; the person must exist)
 * - `PATCH /api/quotes/{id}` - update text and source (owner or admin)
 * - `DELETE /api/quotes/{id}` - delete with generated images (owner or admin)
 * - `POST /api/quotes/{id}/verify` - set the verified flag (admin)
 *
 * Editing a quote's text or source clears nothing; the verified flag only
 * changes through the admin endpoint.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use uuid::Uuid;

use super::db::{create_quote, delete_quote, get_quote, list_quotes, set_verified, update_quote, NewQuote};
use super::types::{CreateQuoteRequest, Quote, QuoteListQuery, UpdateQuoteRequest, VerifyQuoteRequest};
use crate::backend::auth::guards::{require_admin, require_owner_or_admin};
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::middleware::AuthUser;
use crate::backend::people::db::get_person;
use crate::backend::server::state::AppState;
use crate::shared::{validation, Pagination};

pub async fn list_quotes_handler(
    State(state): State<AppState>,
    Query(query): Query<QuoteListQuery>,
) -> BackendResult<Json<Vec<Quote>>> {
    let page = Pagination {
        limit: query.limit,
        offset: query.offset,
    };
    let quotes = list_quotes(&state.db_pool, query.person_id, page.limit(), page.offset()).await?;
    Ok(Json(quotes))
}

pub async fn get_quote_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> BackendResult<Json<Quote>> {
    get_quote(&state.db_pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Quote"))
}

pub async fn create_quote_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Json(request): Json<CreateQuoteRequest>,
) -> BackendResult<(StatusCode, Json<Quote>)> {
    let text = validation::required("text", &request.text, "Quote text")?;
    let source = validation::optional(request.source.as_deref());
    let source_url = validation::optional_web_url("source_url", request.source_url.as_deref())?;

    let mut tx = state.db_pool.begin().await?;
    if get_person(&mut *tx, request.person_id).await?.is_none() {
        return Err(BackendError::not_found("Person"));
    }

    let quote = create_quote(
        &mut *tx,
        NewQuote {
            person_id: request.person_id,
            text,
            source,
            source_url,
            created_by: Some(principal.user_id),
        },
        Utc::now(),
    )
    .await?;
    tx.commit().await?;

    tracing::info!("Quote {} created by {}", quote.id, principal.user_id);
    Ok((StatusCode::CREATED, Json(quote)))
}

pub async fn update_quote_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateQuoteRequest>,
) -> BackendResult<Json<Quote>> {
    let mut tx = state.db_pool.begin().await?;
    let mut quote = get_quote(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Quote"))?;
    require_owner_or_admin(&mut *tx, &principal, quote.created_by).await?;

    if let Some(text) = request.text {
        quote.text = validation::required("text", &text, "Quote text")?;
    }
    if let Some(source) = request.source {
        quote.source = validation::optional(Some(&source));
    }
    if let Some(source_url) = request.source_url {
        quote.source_url = validation::optional_web_url("source_url", Some(&source_url))?;
    }

    let quote = update_quote(&mut *tx, &quote, Utc::now()).await?;
    tx.commit().await?;

    Ok(Json(quote))
}

pub async fn delete_quote_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
) -> BackendResult<StatusCode> {
    let mut tx = state.db_pool.begin().await?;
    let quote = get_quote(&mut *tx, id)
        .await?
        .ok_or_else(|| BackendError::not_found("Quote"))?;
    require_owner_or_admin(&mut *tx, &principal, quote.created_by).await?;

    delete_quote(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!("Quote {} deleted by {}", id, principal.user_id);
    Ok(StatusCode::NO_CONTENT)
}

pub async fn verify_quote_handler(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path(id): Path<Uuid>,
    Json(request): Json<VerifyQuoteRequest>,
) -> BackendResult<Json<Quote>> {
    let mut tx = state.db_pool.begin().await?;
    require_admin(&mut *tx, &principal).await?;

    let quote = set_verified(&mut *tx, id, request.verified, Utc::now())
        .await?
        .ok_or_else(|| BackendError::not_found("Quote"))?;
    tx.commit().await?;

    tracing::info!("Quote {} verified={} by {}", id, quote.verified, principal.user_id);
    Ok(Json(quote))
}
