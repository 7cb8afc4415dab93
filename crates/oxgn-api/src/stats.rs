//! `GET /stats`: the admin overview figures.

use std::sync::Arc;

use axum::{Json, extract::State};
use oxgn_core::{query::PlatformKpis, store::PlatformStore};

use crate::error::ApiError;

pub async fn platform<S>(State(store): State<Arc<S>>) -> Result<Json<PlatformKpis>, ApiError>
where
  S: PlatformStore,
{
  let users = store.list_users().await.map_err(ApiError::store)?;
  let artists = store.list_artists().await.map_err(ApiError::store)?;
  let posts = store.list_posts().await.map_err(ApiError::store)?;
  let subscriptions = store.list_subscriptions().await.map_err(ApiError::store)?;
  let invites = store.list_invites().await.map_err(ApiError::store)?;

  Ok(Json(PlatformKpis::compute(
    &users,
    &artists,
    &posts,
    &subscriptions,
    &invites,
  )))
}
