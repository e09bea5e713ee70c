//! Error type for `folio-store-memory`.

use std::path::PathBuf;

use thiserror::Error;

/// Failures while building a store. Once built, the store itself never fails.
#[derive(Debug, Error)]
pub enum Error {
  #[error("failed to read seed file {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("seed file is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),

  /// An entry in the seed document failed validation.
  #[error("seed entry {collection}[{index}]: {source}")]
  InvalidEntry {
    collection: &'static str,
    index:      usize,
    #[source]
    source:     folio_core::Error,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
