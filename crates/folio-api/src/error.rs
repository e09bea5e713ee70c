//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The addressed record does not exist. Carries the client-facing message.
  #[error("{0}")]
  NotFound(String),

  /// The body failed shape validation; nothing was changed.
  #[error("invalid {entity} data")]
  Invalid {
    entity:  &'static str,
    reasons: Vec<String>,
  },

  /// The store failed while performing `action`.
  #[error("failed to {action}: {source}")]
  Store {
    action: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  pub fn store(
    action: impl Into<String>,
    source: impl std::error::Error + Send + Sync + 'static,
  ) -> Self {
    Self::Store { action: action.into(), source: Box::new(source) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::NotFound(message) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": message })))
          .into_response()
      }
      ApiError::Invalid { entity, reasons } => {
        tracing::warn!(entity, ?reasons, "rejected request body");
        let body = json!({
          "message": format!("Invalid {entity} data"),
          "errors":  reasons,
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
      }
      ApiError::Store { action, source } => {
        tracing::error!(%action, error = %source, "store operation failed");
        let body = json!({ "message": format!("Failed to {action}") });
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
      }
    }
  }
}
