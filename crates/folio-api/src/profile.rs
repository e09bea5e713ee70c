//! Handlers for the `/user` singleton.
//!
//! | Method | Path    | Notes |
//! |--------|---------|-------|
//! | `GET`  | `/user` | 404 if the store has no profile |
//! | `PUT`  | `/user` | Partial body; never creates a profile |

use std::sync::Arc;

use axum::{Json, extract::State};
use folio_core::{
  Editable, Record,
  profile::Profile,
  store::PortfolioStore,
};

use crate::{
  body::{Payload, validated},
  error::ApiError,
};

fn not_found() -> ApiError {
  ApiError::NotFound(format!("{} not found", Profile::TITLE))
}

/// `GET /user`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Profile>, ApiError>
where
  S: PortfolioStore,
{
  let profile = store
    .get_profile()
    .await
    .map_err(|e| ApiError::store("fetch user data", e))?
    .ok_or_else(not_found)?;
  Ok(Json(profile))
}

/// `PUT /user`: merges the supplied fields into the existing profile.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  payload: Payload,
) -> Result<Json<Profile>, ApiError>
where
  S: PortfolioStore,
{
  let patch = validated(Profile::NAME, payload, Profile::validate_patch)?;
  let profile = store
    .update_profile(patch)
    .await
    .map_err(|e| ApiError::store("update user data", e))?
    .ok_or_else(not_found)?;
  Ok(Json(profile))
}
