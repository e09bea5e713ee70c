//! Core types and trait definitions for the Folio portfolio store.
//!
//! This crate is deliberately free of HTTP and storage dependencies.
//! All other crates depend on it.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod certification;
pub mod contact;
pub mod error;
pub mod experience;
pub mod profile;
pub mod project;
pub mod record;
pub mod skill;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use record::{Editable, Flag, Record, RecordId};
pub use validate::Validation;
