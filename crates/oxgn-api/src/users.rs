//! Handlers for `/users`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/users` | Optional `?role=admin\|artist\|manager\|fan\|all` and `?search=` |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use oxgn_core::{
  query::UserFilter,
  store::PlatformStore,
  user::{Role, User},
};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub role:   Option<String>,
  pub search: Option<String>,
}

/// `all` and an absent role both match every account.
fn parse_role(raw: Option<&str>) -> Result<Option<Role>, ApiError> {
  match raw {
    None | Some("all") => Ok(None),
    Some(r) => r
      .parse()
      .map(Some)
      .map_err(|_| ApiError::BadRequest(format!("unknown role: {r}"))),
  }
}

/// `GET /users[?role=<role>][&search=<term>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<User>>, ApiError>
where
  S: PlatformStore,
{
  let filter = UserFilter {
    role:   parse_role(params.role.as_deref())?,
    search: params.search.unwrap_or_default(),
  };
  let users = store.list_users().await.map_err(ApiError::store)?;
  Ok(Json(filter.apply(&users).into_iter().cloned().collect()))
}
