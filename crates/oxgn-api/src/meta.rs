//! Service endpoints that do not touch the store: the greeting, liveness, and
//! the API summary.

use std::time::Instant;

use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const SERVICE_NAME: &str = "OXGN API";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub status:    &'static str,
  pub timestamp: DateTime<Utc>,
  /// Seconds since the router was built.
  pub uptime:    f64,
  pub service:   &'static str,
  pub version:   &'static str,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
  pub health:  &'static str,
  pub auth:    &'static str,
  pub users:   &'static str,
  pub artists: &'static str,
  pub posts:   &'static str,
}

#[derive(Debug, Serialize)]
pub struct ApiInfo {
  pub name:        &'static str,
  pub version:     &'static str,
  pub description: &'static str,
  pub endpoints:   Endpoints,
}

/// `GET /`
pub async fn hello() -> &'static str { "Hello World!" }

/// `GET /health`
pub async fn health(State(started): State<Instant>) -> Json<HealthResponse> {
  Json(HealthResponse {
    status:    "ok",
    timestamp: Utc::now(),
    uptime:    started.elapsed().as_secs_f64(),
    service:   SERVICE_NAME,
    version:   env!("CARGO_PKG_VERSION"),
  })
}

/// `GET /api`
pub async fn info() -> Json<ApiInfo> {
  Json(ApiInfo {
    name:        "OXGN Artist-Fan Platform API",
    version:     env!("CARGO_PKG_VERSION"),
    description: "Backend API for the OXGN artist-fan subscription platform",
    endpoints:   Endpoints {
      health:  "/health",
      auth:    "/auth/*",
      users:   "/users/*",
      artists: "/artists/*",
      posts:   "/posts/*",
    },
  })
}

/// Routes for the service endpoints. Uptime counts from this call.
pub fn router() -> Router<()> {
  Router::new()
    .route("/", get(hello))
    .route("/health", get(health))
    .route("/api", get(info))
    .with_state(Instant::now())
}
