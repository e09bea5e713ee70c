//! Request-body extraction and validation.

use axum::{Json, extract::rejection::JsonRejection};
use folio_core::Validation;
use serde_json::Value;

use crate::error::ApiError;

/// A JSON body, or the reason axum could not read one.
///
/// Handlers take this instead of `Json<Value>` so that malformed JSON is
/// reported as a 400 like any other invalid input.
pub type Payload = Result<Json<Value>, JsonRejection>;

/// Read `payload` and run `check` over it. Nothing reaches the store unless
/// this returns `Ok`.
pub(crate) fn validated<T>(
  entity: &'static str,
  payload: Payload,
  check: impl FnOnce(&Value) -> Validation<T>,
) -> Result<T, ApiError> {
  let Json(body) = payload.map_err(|rejection| ApiError::Invalid {
    entity,
    reasons: vec![rejection.body_text()],
  })?;
  match check(&body) {
    Validation::Valid(v) => Ok(v),
    Validation::Invalid(reasons) => Err(ApiError::Invalid { entity, reasons }),
  }
}
