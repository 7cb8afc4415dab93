//! Handlers for `/artists` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/artists` | Optional `?search=` over name, username, cause |
//! | `GET`  | `/artists/subscribed` | Current fan's active subscriptions |
//! | `GET`  | `/artists/unsubscribed` | Everyone else |
//! | `GET`  | `/artists/{id}` | 404 if not found |
//! | `GET`  | `/artists/{id}/stats` | |
//! | `GET`  | `/artists/{id}/posts` | |
//! | `GET`  | `/artists/{id}/messages` | Messages the artist sent |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use oxgn_core::{
  artist::Artist,
  content::Post,
  message::Message,
  query::{self, ArtistStats},
  store::PlatformStore,
};
use serde::Deserialize;

use crate::error::ApiError;

async fn require_artist<S: PlatformStore>(store: &S, id: &str) -> Result<Artist, ApiError> {
  store
    .get_artist(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("artist {id} not found")))
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub search: Option<String>,
}

/// `GET /artists[?search=<term>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Artist>>, ApiError>
where
  S: PlatformStore,
{
  let artists = store.list_artists().await.map_err(ApiError::store)?;
  let artists = match params.search.as_deref() {
    Some(term) if !term.is_empty() => {
      query::search_artists(&artists, term).into_iter().cloned().collect()
    }
    _ => artists,
  };
  Ok(Json(artists))
}

// ─── Current fan ──────────────────────────────────────────────────────────────

/// `GET /artists/subscribed`
pub async fn subscribed<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Artist>>, ApiError>
where
  S: PlatformStore,
{
  let fan_id = store.current_fan_id().await.map_err(ApiError::store)?;
  let artists = store.list_artists().await.map_err(ApiError::store)?;
  let subs = store.list_subscriptions().await.map_err(ApiError::store)?;
  Ok(Json(
    query::subscribed_artists(&artists, &subs, &fan_id)
      .into_iter()
      .cloned()
      .collect(),
  ))
}

/// `GET /artists/unsubscribed`
pub async fn unsubscribed<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Artist>>, ApiError>
where
  S: PlatformStore,
{
  let fan_id = store.current_fan_id().await.map_err(ApiError::store)?;
  let artists = store.list_artists().await.map_err(ApiError::store)?;
  let subs = store.list_subscriptions().await.map_err(ApiError::store)?;
  Ok(Json(
    query::unsubscribed_artists(&artists, &subs, &fan_id)
      .into_iter()
      .cloned()
      .collect(),
  ))
}

// ─── Single artist ────────────────────────────────────────────────────────────

/// `GET /artists/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Artist>, ApiError>
where
  S: PlatformStore,
{
  Ok(Json(require_artist(store.as_ref(), &id).await?))
}

/// `GET /artists/{id}/stats`
pub async fn stats<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<ArtistStats>, ApiError>
where
  S: PlatformStore,
{
  let artist = require_artist(store.as_ref(), &id).await?;
  let posts = store.list_posts().await.map_err(ApiError::store)?;
  let subs = store.list_subscriptions().await.map_err(ApiError::store)?;
  Ok(Json(ArtistStats::compute(&artist, &posts, &subs)))
}

/// `GET /artists/{id}/posts`
pub async fn posts<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<Post>>, ApiError>
where
  S: PlatformStore,
{
  let artist = require_artist(store.as_ref(), &id).await?;
  let posts = store.list_posts().await.map_err(ApiError::store)?;
  Ok(Json(
    query::posts_by_artist(&posts, &artist.id).into_iter().cloned().collect(),
  ))
}

/// `GET /artists/{id}/messages`
pub async fn messages<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<Message>>, ApiError>
where
  S: PlatformStore,
{
  let artist = require_artist(store.as_ref(), &id).await?;
  let messages = store.list_messages().await.map_err(ApiError::store)?;
  Ok(Json(
    query::messages_from(&messages, &artist.id).into_iter().cloned().collect(),
  ))
}
