//! Handlers for `/auth` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth/admin/login` | Body: `{"email":"…","password":"…"}` |
//! | `POST` | `/auth/artist/login` | Same body; responds with the artist profile |
//!
//! Failed logins answer 401 with the same message whichever part was wrong.

use std::sync::Arc;

use axum::{Json, extract::State};
use oxgn_core::{
  artist::Artist,
  login::{self, AdminIdentity},
  store::PlatformStore,
};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email:    String,
  pub password: String,
}

/// `POST /auth/admin/login`
pub async fn admin_login<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<AdminIdentity>, ApiError>
where
  S: PlatformStore,
{
  let identity =
    login::authenticate_admin(store.as_ref(), &body.email, &body.password).await?;
  info!(email = %identity.email, "admin signed in");
  Ok(Json(identity))
}

/// `POST /auth/artist/login`
pub async fn artist_login<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<Artist>, ApiError>
where
  S: PlatformStore,
{
  let artist =
    login::authenticate_artist(store.as_ref(), &body.email, &body.password).await?;
  info!(artist_id = %artist.id, "artist signed in");
  Ok(Json(artist))
}
