//! Handlers for `/invites`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use oxgn_core::{
  invite::{Invite, InviteStatus},
  query::{InviteCounts, filter_invites},
  store::PlatformStore,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InviteList {
  /// Per-status totals over every invite, whatever the filter.
  pub counts:  InviteCounts,
  pub invites: Vec<Invite>,
}

/// `GET /invites[?status=pending|accepted|expired|all]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<InviteList>, ApiError>
where
  S: PlatformStore,
{
  let status: Option<InviteStatus> = match params.status.as_deref() {
    None | Some("all") => None,
    Some(s) => Some(
      s.parse()
        .map_err(|_| ApiError::BadRequest(format!("unknown invite status: {s}")))?,
    ),
  };

  let invites = store.list_invites().await.map_err(ApiError::store)?;
  Ok(Json(InviteList {
    counts:  InviteCounts::tally(&invites),
    invites: filter_invites(&invites, status).into_iter().cloned().collect(),
  }))
}
