//! Generic handlers for the editable collections.
//!
//! Mounted once per record kind by [`crate::api_router`]:
//!
//! | Method   | Path                   | Notes |
//! |----------|------------------------|-------|
//! | `GET`    | `/{collection}`        | Always 200, possibly `[]` |
//! | `POST`   | `/{collection}`        | Full insert body; 200 + stored record |
//! | `GET`    | `/{collection}/{id}`   | 404 if not found |
//! | `PUT`    | `/{collection}/{id}`   | Partial body; 404 if not found |
//! | `DELETE` | `/{collection}/{id}`   | 200 + confirmation; 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use folio_core::{Editable, RecordId, store::Collection};
use serde_json::{Value, json};

use crate::{
  body::{Payload, validated},
  error::ApiError,
};

fn not_found<R: Editable>() -> ApiError {
  ApiError::NotFound(format!("{} not found", R::TITLE))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /{collection}`
pub async fn list<S, R>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<R>>, ApiError>
where
  S: Collection<R>,
  R: Editable,
{
  let records = store
    .list()
    .await
    .map_err(|e| ApiError::store(format!("fetch {}s", R::NAME), e))?;
  Ok(Json(records))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /{collection}/{id}`
pub async fn get_one<S, R>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<R>, ApiError>
where
  S: Collection<R>,
  R: Editable,
{
  let record = store
    .get(RecordId::from(id))
    .await
    .map_err(|e| ApiError::store(format!("fetch {}", R::NAME), e))?
    .ok_or_else(not_found::<R>)?;
  Ok(Json(record))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /{collection}`: returns the stored record with its new `id`.
pub async fn create<S, R>(
  State(store): State<Arc<S>>,
  payload: Payload,
) -> Result<Json<R>, ApiError>
where
  S: Collection<R>,
  R: Editable,
{
  let input = validated(R::NAME, payload, R::validate_new)?;
  let record = store
    .create(input)
    .await
    .map_err(|e| ApiError::store(format!("create {}", R::NAME), e))?;
  Ok(Json(record))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /{collection}/{id}`: only the supplied fields change.
pub async fn update<S, R>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  payload: Payload,
) -> Result<Json<R>, ApiError>
where
  S: Collection<R>,
  R: Editable,
{
  let patch = validated(R::NAME, payload, R::validate_patch)?;
  let record = store
    .update(RecordId::from(id), patch)
    .await
    .map_err(|e| ApiError::store(format!("update {}", R::NAME), e))?
    .ok_or_else(not_found::<R>)?;
  Ok(Json(record))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /{collection}/{id}`
pub async fn delete_one<S, R>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: Collection<R>,
  R: Editable,
{
  let removed = store
    .delete(RecordId::from(id))
    .await
    .map_err(|e| ApiError::store(format!("delete {}", R::NAME), e))?;
  if !removed {
    return Err(not_found::<R>());
  }
  Ok(Json(json!({ "message": format!("{} deleted successfully", R::TITLE) })))
}
