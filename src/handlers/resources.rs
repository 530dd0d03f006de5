//! Generic CRUD handlers.
//!
//! One set of five handlers serves every resource type; the per-type store
//! is pulled out of the shared state via `FromRef`, so mounting a new
//! entity is a single `nest` in the router plus a `Resource` impl.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::store::{Resource, ResourceStore};

/// Validates a write body into the entity's payload type.
///
/// Any failure (malformed JSON, missing required field, wrong type) rejects
/// the whole write before the store is touched.
fn parse_body<T: DeserializeOwned>(resource: &'static str, body: &Bytes) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("rejected {} payload: {}", resource, e);
        ApiError::Validation(resource)
    })
}

/// GET /api/`<resource>`
pub async fn list_resources<R: Resource>(
    State(store): State<Arc<ResourceStore<R>>>,
) -> Json<Vec<R>> {
    Json(store.list())
}

/// GET /api/`<resource>`/{id}
pub async fn get_resource<R: Resource>(
    State(store): State<Arc<ResourceStore<R>>>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    store.get(&id).map(Json).ok_or(ApiError::NotFound(R::NAME))
}

/// POST /api/`<resource>`
pub async fn create_resource<R: Resource>(
    State(store): State<Arc<ResourceStore<R>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let payload = parse_body::<R::Create>(R::NAME, &body)?;
    let record = store.create(payload);
    tracing::info!("created {} {}", R::NAME, record.id());
    Ok((StatusCode::CREATED, Json(record)))
}

/// PUT /api/`<resource>`/{id}
pub async fn update_resource<R: Resource>(
    State(store): State<Arc<ResourceStore<R>>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<R>, ApiError> {
    let patch = parse_body::<R::Update>(R::NAME, &body)?;
    store
        .update(&id, patch)
        .map(Json)
        .ok_or(ApiError::NotFound(R::NAME))
}

/// DELETE /api/`<resource>`/{id}
pub async fn delete_resource<R: Resource>(
    State(store): State<Arc<ResourceStore<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if store.delete(&id) {
        tracing::info!("deleted {} {}", R::NAME, id);
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(R::NAME))
    }
}
