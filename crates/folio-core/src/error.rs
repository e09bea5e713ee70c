//! Error types for `folio-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Input did not match the declared shape of `entity`.
  #[error("invalid {entity} data: {}", reasons.join("; "))]
  Invalid {
    entity:  &'static str,
    reasons: Vec<String>,
  },

  #[error("unknown flag value: {0:?}")]
  UnknownFlag(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
