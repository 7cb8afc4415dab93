//! Handlers for the current fan's inbox.

use std::sync::Arc;

use axum::{Json, extract::State};
use oxgn_core::{message::Message, query, store::PlatformStore};

use crate::error::ApiError;

async fn inbox<S: PlatformStore>(store: &S) -> Result<Vec<Message>, ApiError> {
  let fan_id = store.current_fan_id().await.map_err(ApiError::store)?;
  let mut messages = store.list_messages().await.map_err(ApiError::store)?;
  messages.retain(|m| m.to_id == fan_id);
  Ok(messages)
}

/// `GET /messages`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Message>>, ApiError>
where
  S: PlatformStore,
{
  Ok(Json(inbox(store.as_ref()).await?))
}

/// `GET /messages/unread`
pub async fn unread<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Message>>, ApiError>
where
  S: PlatformStore,
{
  let messages = inbox(store.as_ref()).await?;
  Ok(Json(query::unread_messages(&messages).into_iter().cloned().collect()))
}
