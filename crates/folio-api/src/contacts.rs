//! Handlers for `/contacts`: the append-only message log.
//!
//! | Method | Path        | Notes |
//! |--------|-------------|-------|
//! | `GET`  | `/contacts` | Arrival order |
//! | `POST` | `/contacts` | Any `createdAt` in the body is ignored |

use std::sync::Arc;

use axum::{Json, extract::State};
use folio_core::{Record, contact::Contact, store::PortfolioStore};

use crate::{
  body::{Payload, validated},
  error::ApiError,
};

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: PortfolioStore,
{
  let contacts = store
    .list_contacts()
    .await
    .map_err(|e| ApiError::store("fetch contacts", e))?;
  Ok(Json(contacts))
}

/// `POST /contacts`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  payload: Payload,
) -> Result<Json<Contact>, ApiError>
where
  S: PortfolioStore,
{
  let input = validated(Contact::NAME, payload, Contact::validate_new)?;
  let contact = store
    .create_contact(input)
    .await
    .map_err(|e| ApiError::store("send message", e))?;
  Ok(Json(contact))
}
