//! HTTP server wiring for Folio.
//!
//! Mounts the JSON API under `/api`, adds a health probe, and optionally
//! serves the built presentation layer for every other path.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{Json, Router, routing::get};
use folio_api::ApiStore;
use folio_store_memory::MemoryStore;
use serde::Deserialize;
use serde_json::{Value, json};
use tower_http::{
  services::{ServeDir, ServeFile},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Layered from built-in defaults, then `config.toml`, then `FOLIO_*`
/// environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// JSON seed document replacing the built-in placeholder content.
  #[serde(default)]
  pub seed_path:  Option<PathBuf>,
  /// Directory holding the built client bundle (`index.html` + assets).
  #[serde(default)]
  pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
  pub const DEFAULT_HOST: &'static str = "127.0.0.1";
  pub const DEFAULT_PORT: u16 = 5000;

  /// Load configuration; `path` may be absent.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", Self::DEFAULT_HOST)?
      .set_default("port", i64::from(Self::DEFAULT_PORT))?
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("FOLIO"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Build the store described by `config`: the seed file if one is
/// configured, the built-in content otherwise.
pub async fn open_store(
  config: &ServerConfig,
) -> folio_store_memory::Result<MemoryStore> {
  match &config.seed_path {
    Some(path) => MemoryStore::from_seed_file(path).await,
    None => Ok(MemoryStore::seeded()),
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

async fn health() -> Json<Value> { Json(json!({ "status": "ok" })) }

/// Build the complete application router.
///
/// `/api/*` never falls through to the static directory; unmatched API
/// paths get the API's JSON 404.
pub fn router<S: ApiStore>(store: Arc<S>, static_dir: Option<&Path>) -> Router {
  let router = Router::new()
    .route("/health", get(health))
    .nest("/api", folio_api::api_router(store));

  let router = match static_dir {
    Some(dir) => {
      let index = ServeFile::new(dir.join("index.html"));
      router.fallback_service(ServeDir::new(dir).fallback(index))
    }
    None => router,
  };

  router.layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use tower::ServiceExt as _;

  async fn get_raw(app: Router, uri: &str) -> (StatusCode, String) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
  }

  fn store() -> Arc<MemoryStore> { Arc::new(MemoryStore::seeded()) }

  #[tokio::test]
  async fn health_returns_ok() {
    let (status, body) = get_raw(router(store(), None), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<Value>(&body).unwrap(), json!({ "status": "ok" }));
  }

  #[tokio::test]
  async fn api_is_nested_under_prefix() {
    let (status, body) = get_raw(router(store(), None), "/api/skills").await;
    assert_eq!(status, StatusCode::OK);
    let skills: Value = serde_json::from_str(&body).unwrap();
    assert!(!skills.as_array().unwrap().is_empty());
  }

  #[tokio::test]
  async fn without_static_dir_other_paths_are_404() {
    let (status, _) = get_raw(router(store(), None), "/about").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn static_dir_serves_assets_and_spa_fallback() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html>folio</html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

    let app = router(store(), Some(dir.path()));

    let (status, body) = get_raw(app.clone(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log(1)");

    let (status, body) = get_raw(app.clone(), "/admin").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("folio"));

    let (status, body) = get_raw(app, "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("\"message\""), "body: {body}");
  }

  #[test]
  fn config_defaults_apply_without_file() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = ServerConfig::load(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(cfg.port, ServerConfig::DEFAULT_PORT);
    assert_eq!(cfg.host, ServerConfig::DEFAULT_HOST);
    assert!(cfg.seed_path.is_none());
    assert!(cfg.static_dir.is_none());
  }

  #[test]
  fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
      &path,
      "host = \"0.0.0.0\"\nport = 8080\nstatic_dir = \"dist/public\"\n",
    )
    .unwrap();
    let cfg = ServerConfig::load(&path).unwrap();
    assert_eq!(cfg.address(), "0.0.0.0:8080");
    assert_eq!(cfg.static_dir, Some(PathBuf::from("dist/public")));
  }

  #[tokio::test]
  async fn open_store_uses_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    let seed = dir.path().join("seed.json");
    std::fs::write(&seed, r#"{ "skills": [] }"#).unwrap();
    let cfg = ServerConfig {
      host:       "127.0.0.1".into(),
      port:       0,
      seed_path:  Some(seed),
      static_dir: None,
    };
    let store = open_store(&cfg).await.unwrap();
    let (status, body) = get_raw(router(Arc::new(store), None), "/api/user").await;
    assert_eq!(status, StatusCode::NOT_FOUND, "body: {body}");
  }
}
