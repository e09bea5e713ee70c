//! JSON REST API for Folio.
//!
//! Exposes an axum [`Router`] backed by any store implementing
//! [`PortfolioStore`] and a [`Collection`] for every editable record kind.
//! TLS, static assets, and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone()))
//! ```

mod body;

pub mod contacts;
pub mod error;
pub mod profile;
pub mod records;

use std::sync::Arc;

use axum::{Router, routing::get};
use folio_core::{
  Editable,
  certification::Certification,
  experience::Experience,
  project::Project,
  skill::Skill,
  store::{Collection, PortfolioStore},
};

pub use body::Payload;
pub use error::ApiError;

/// Every capability the API needs from a store.
pub trait ApiStore:
  PortfolioStore
  + Collection<Skill>
  + Collection<Project>
  + Collection<Experience>
  + Collection<Certification>
  + 'static
{
}

impl<S> ApiStore for S where
  S: PortfolioStore
    + Collection<Skill>
    + Collection<Project>
    + Collection<Experience>
    + Collection<Certification>
    + 'static
{
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Unmatched paths get a JSON 404.
pub fn api_router<S: ApiStore>(store: Arc<S>) -> Router<()> {
  let router = Router::new()
    .route("/user", get(profile::get_one::<S>).put(profile::update::<S>))
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>));

  let router = collection::<S, Skill>(router, "/skills");
  let router = collection::<S, Project>(router, "/projects");
  let router = collection::<S, Experience>(router, "/experiences");
  let router = collection::<S, Certification>(router, "/certifications");

  router
    .fallback(|| async { ApiError::NotFound("Not found".to_owned()) })
    .with_state(store)
}

/// Mount the five CRUD routes for `R` under `base`.
fn collection<S, R>(router: Router<Arc<S>>, base: &str) -> Router<Arc<S>>
where
  S: Collection<R> + 'static,
  R: Editable,
{
  router
    .route(base, get(records::list::<S, R>).post(records::create::<S, R>))
    .route(
      &format!("{base}/{{id}}"),
      get(records::get_one::<S, R>)
        .put(records::update::<S, R>)
        .delete(records::delete_one::<S, R>),
    )
}
