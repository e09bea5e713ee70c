//! In-memory backend for the Folio portfolio store.
//!
//! Every collection lives behind its own [`tokio::sync::RwLock`]; nothing is
//! persisted, so a restart resets the store to its seed content.

mod seed;
mod store;
mod table;

pub mod error;

pub use error::{Error, Result};
pub use seed::SeedDocument;
pub use store::MemoryStore;
