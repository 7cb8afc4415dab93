//! Handlers for `/posts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/posts` | Current fan's feed, newest first; optional `?artist_id=` |
//! | `GET`  | `/posts/{id}/comments` | Oldest first; 404 if the post is unknown |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use oxgn_core::{
  content::{Comment, Post},
  query,
  store::PlatformStore,
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub artist_id: Option<String>,
}

/// `GET /posts[?artist_id=<id>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Post>>, ApiError>
where
  S: PlatformStore,
{
  let fan_id = store.current_fan_id().await.map_err(ApiError::store)?;
  let posts = store.list_posts().await.map_err(ApiError::store)?;
  let subs = store.list_subscriptions().await.map_err(ApiError::store)?;

  let feed = query::subscribed_posts(&posts, &subs, &fan_id)
    .into_iter()
    .filter(|p| params.artist_id.as_ref().is_none_or(|id| &p.artist_id == id))
    .cloned()
    .collect();
  Ok(Json(feed))
}

/// `GET /posts/{id}/comments`
pub async fn comments<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>, ApiError>
where
  S: PlatformStore,
{
  store
    .get_post(&id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("post {id} not found")))?;

  let comments = store.list_comments().await.map_err(ApiError::store)?;
  Ok(Json(
    query::comments_for_post(&comments, &id).into_iter().cloned().collect(),
  ))
}
