//! [`Table`]: one lock-guarded, insertion-ordered collection.

use folio_core::{Editable, RecordId};
use tokio::sync::RwLock;

/// A collection of records kept in insertion order.
///
/// Lookups are linear; portfolio collections hold tens of rows at most.
pub(crate) struct Table<R> {
  rows: RwLock<Vec<R>>,
}

impl<R: Editable> Table<R> {
  pub(crate) fn new(rows: Vec<R>) -> Self { Self { rows: RwLock::new(rows) } }

  pub(crate) async fn list(&self) -> Vec<R> { self.rows.read().await.clone() }

  pub(crate) async fn get(&self, id: &RecordId) -> Option<R> {
    self.rows.read().await.iter().find(|r| r.id() == id).cloned()
  }

  pub(crate) async fn insert(&self, input: R::New) -> R {
    let record = R::from_new(RecordId::generate(), input);
    self.rows.write().await.push(record.clone());
    record
  }

  pub(crate) async fn update(
    &self,
    id: &RecordId,
    patch: R::Patch,
  ) -> Option<R> {
    let mut rows = self.rows.write().await;
    let row = rows.iter_mut().find(|r| r.id() == id)?;
    row.apply(patch);
    Some(row.clone())
  }

  pub(crate) async fn remove(&self, id: &RecordId) -> bool {
    let mut rows = self.rows.write().await;
    match rows.iter().position(|r| r.id() == id) {
      Some(idx) => {
        rows.remove(idx);
        true
      }
      None => false,
    }
  }
}
