//! HTTP server wiring for OXGN: configuration, CORS, request tracing, and the
//! store the API serves from.

pub mod error;

pub use error::{Error, Result};

use std::{path::PathBuf, sync::Arc, time::Duration};

use axum::{
  Router,
  http::{HeaderValue, Method, header},
};
use oxgn_core::store::PlatformStore;
use oxgn_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `OXGN_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  /// Browser origins allowed to call the API with credentials.
  pub cors_origins:     Vec<String>,
  /// Pause before answering a login attempt.
  pub login_latency_ms: u64,
  /// JSON dataset to serve instead of the bundled demo catalogue.
  pub dataset_path:     Option<PathBuf>,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "127.0.0.1".to_string(),
      port:             3001,
      cors_origins:     vec![
        "http://localhost:3000".to_string(),
        "http://localhost:3001".to_string(),
      ],
      login_latency_ms: 1000,
      dataset_path:     None,
    }
  }
}

impl ServerConfig {
  /// Layer the optional TOML file at `path` under `OXGN_`-prefixed
  /// environment variables.
  pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.into()).required(false))
      .add_source(
        config::Environment::with_prefix("OXGN")
          .try_parsing(true)
          .list_separator(",")
          .with_list_parse_key("cors_origins"),
      )
      .build()?;
    Ok(settings.try_deserialize()?)
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn login_latency(&self) -> Duration {
    Duration::from_millis(self.login_latency_ms)
  }

  /// Open the configured dataset, or the demo catalogue when none is set.
  pub async fn open_store(&self) -> Result<MemoryStore> {
    let store = match &self.dataset_path {
      Some(path) => MemoryStore::open(path).await?,
      None => MemoryStore::seeded()?,
    };
    Ok(store.with_login_latency(self.login_latency()))
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// CORS policy for the browser frontends: the listed origins, the usual
/// REST methods, and credentials.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
  let origins = origins
    .iter()
    .map(|o| HeaderValue::from_str(o).map_err(|_| Error::InvalidOrigin(o.clone())))
    .collect::<Result<Vec<_>>>()?;

  Ok(
    CorsLayer::new()
      .allow_origin(AllowOrigin::list(origins))
      .allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::PATCH,
      ])
      .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
      .allow_credentials(true),
  )
}

/// Build the full application router for `store`.
pub fn router<S>(config: &ServerConfig, store: Arc<S>) -> Result<Router>
where
  S: PlatformStore + 'static,
{
  Ok(
    oxgn_api::api_router(store)
      .layer(cors_layer(&config.cors_origins)?)
      .layer(TraceLayer::new_for_http()),
  )
}

// ─── Integration tests ────────────────────────────────────────────────────────
