//! [`MemoryStore`]: the in-memory implementation of [`PortfolioStore`].

use std::{convert::Infallible, path::Path};

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use folio_core::{
  Editable, Record, RecordId,
  certification::Certification,
  contact::{Contact, NewContact},
  experience::Experience,
  profile::{Profile, ProfilePatch},
  project::Project,
  skill::Skill,
  store::{Collection, PortfolioStore},
};

use crate::{
  Result,
  seed::{Seed, SeedDocument},
  table::Table,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A portfolio store held entirely in process memory.
///
/// Construct once at startup and share behind an `Arc`. Each collection has
/// its own lock, so a mutation is never observed half-applied.
pub struct MemoryStore {
  profile:        RwLock<Option<Profile>>,
  skills:         Table<Skill>,
  projects:       Table<Project>,
  experiences:    Table<Experience>,
  certifications: Table<Certification>,
  contacts:       RwLock<Vec<Contact>>,
}

impl MemoryStore {
  /// A store populated with the built-in placeholder portfolio.
  pub fn seeded() -> Self {
    let store = Self::from_seed(Seed::defaults());
    info!("seeded store with default portfolio content");
    store
  }

  /// A store with no profile and empty collections.
  pub fn empty() -> Self { Self::from_seed(Seed::default()) }

  /// Build a store from a parsed seed document, validating every entry.
  pub fn from_document(doc: SeedDocument) -> Result<Self> {
    Ok(Self::from_seed(doc.validate()?))
  }

  /// Read a JSON seed document from `path` and build a store from it.
  pub async fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let store = Self::from_document(SeedDocument::from_path(path).await?)?;
    info!(path = %path.display(), "seeded store from file");
    Ok(store)
  }

  fn from_seed(seed: Seed) -> Self {
    fn rows<R: Editable>(inputs: Vec<R::New>) -> Vec<R> {
      inputs
        .into_iter()
        .map(|input| R::from_new(RecordId::generate(), input))
        .collect()
    }

    let profile = seed
      .profile
      .map(|input| Profile::from_new(RecordId::generate(), input));

    Self {
      profile:        RwLock::new(profile),
      skills:         Table::new(rows(seed.skills)),
      projects:       Table::new(rows(seed.projects)),
      experiences:    Table::new(rows(seed.experiences)),
      certifications: Table::new(rows(seed.certifications)),
      contacts:       RwLock::new(Vec::new()),
    }
  }
}

impl Default for MemoryStore {
  fn default() -> Self { Self::seeded() }
}

// ─── PortfolioStore impl ─────────────────────────────────────────────────────

impl PortfolioStore for MemoryStore {
  type Error = Infallible;

  async fn get_profile(&self) -> Result<Option<Profile>, Infallible> {
    Ok(self.profile.read().await.clone())
  }

  async fn update_profile(
    &self,
    patch: ProfilePatch,
  ) -> Result<Option<Profile>, Infallible> {
    let mut guard = self.profile.write().await;
    let Some(profile) = guard.as_mut() else {
      return Ok(None);
    };
    profile.apply(patch);
    debug!(id = %profile.id, "updated profile");
    Ok(Some(profile.clone()))
  }

  async fn list_contacts(&self) -> Result<Vec<Contact>, Infallible> {
    Ok(self.contacts.read().await.clone())
  }

  async fn create_contact(
    &self,
    input: NewContact,
  ) -> Result<Contact, Infallible> {
    let contact = Contact::received(RecordId::generate(), input, Utc::now());
    self.contacts.write().await.push(contact.clone());
    debug!(id = %contact.id, "recorded contact message");
    Ok(contact)
  }
}

// ─── Collection impls ────────────────────────────────────────────────────────

/// Delegate [`Collection<R>`] to the matching [`Table`] field.
macro_rules! collection {
  ($record:ty, $field:ident) => {
    impl Collection<$record> for MemoryStore {
      async fn list(&self) -> Result<Vec<$record>, Infallible> {
        Ok(self.$field.list().await)
      }

      async fn get(
        &self,
        id: RecordId,
      ) -> Result<Option<$record>, Infallible> {
        Ok(self.$field.get(&id).await)
      }

      async fn create(
        &self,
        input: <$record as Record>::New,
      ) -> Result<$record, Infallible> {
        let record = self.$field.insert(input).await;
        debug!(
          kind = <$record as Record>::NAME,
          id = %record.id,
          "created record"
        );
        Ok(record)
      }

      async fn update(
        &self,
        id: RecordId,
        patch: <$record as Editable>::Patch,
      ) -> Result<Option<$record>, Infallible> {
        let updated = self.$field.update(&id, patch).await;
        debug!(
          kind = <$record as Record>::NAME,
          %id,
          found = updated.is_some(),
          "updated record"
        );
        Ok(updated)
      }

      async fn delete(&self, id: RecordId) -> Result<bool, Infallible> {
        let removed = self.$field.remove(&id).await;
        debug!(
          kind = <$record as Record>::NAME,
          %id,
          removed,
          "deleted record"
        );
        Ok(removed)
      }
    }
  };
}

collection!(Skill, skills);
collection!(Project, projects);
collection!(Experience, experiences);
collection!(Certification, certifications);
