//! The `PortfolioStore` and `Collection` traits.
//!
//! Implemented by storage backends (e.g. `folio-store-memory`). The HTTP layer
//! (`folio-api`) depends on these abstractions, not on any concrete backend.
//!
//! Stores never validate: every `New`/`Patch` value reaching them has already
//! passed the entity's validation functions. Absence is reported as `None`
//! (or `false` for deletes), never as an error.

use std::future::Future;

use crate::{
  contact::{Contact, NewContact},
  profile::{Profile, ProfilePatch},
  record::{Editable, RecordId},
};

/// The singleton profile and the append-only contact log.
///
/// All methods return `Send` futures so stores can be shared across a
/// multi-threaded runtime.
pub trait PortfolioStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Profile ───────────────────────────────────────────────────────────

  /// The profile, or `None` if the store was built without one.
  fn get_profile(
    &self,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  /// Merge `patch` into the existing profile. Returns `None` (and creates
  /// nothing) if there is no profile.
  fn update_profile(
    &self,
    patch: ProfilePatch,
  ) -> impl Future<Output = Result<Option<Profile>, Self::Error>> + Send + '_;

  // ── Contacts ──────────────────────────────────────────────────────────

  /// All received messages in arrival order.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Store a message. `created_at` is stamped by the store.
  fn create_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;
}

/// Uniform CRUD over one collection of editable records.
///
/// Each call is a single indivisible step relative to other calls on the
/// same collection.
pub trait Collection<R: Editable>: PortfolioStore {
  /// Every record in insertion order.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<R>, Self::Error>> + Send + '_;

  fn get(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + '_;

  /// Assign a fresh identifier, store, and return the stored record.
  fn create(
    &self,
    input: R::New,
  ) -> impl Future<Output = Result<R, Self::Error>> + Send + '_;

  /// Shallow-merge `patch` into the record. `None` if `id` is unknown, in
  /// which case nothing changes.
  fn update(
    &self,
    id: RecordId,
    patch: R::Patch,
  ) -> impl Future<Output = Result<Option<R>, Self::Error>> + Send + '_;

  /// Remove the record. Returns whether anything was removed.
  fn delete(
    &self,
    id: RecordId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
