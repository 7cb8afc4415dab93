//! JSON REST API for OXGN.
//!
//! Exposes an axum [`Router`] backed by any [`oxgn_core::store::PlatformStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = oxgn_api::api_router(Arc::new(store)).layer(cors);
//! ```

pub mod artists;
pub mod auth;
pub mod error;
pub mod invites;
pub mod messages;
pub mod meta;
pub mod posts;
pub mod stats;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use oxgn_core::store::PlatformStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PlatformStore + 'static,
{
  let data = Router::new()
    // Accounts
    .route("/users", get(users::list::<S>))
    .route("/invites", get(invites::list::<S>))
    // Artists
    .route("/artists", get(artists::list::<S>))
    .route("/artists/subscribed", get(artists::subscribed::<S>))
    .route("/artists/unsubscribed", get(artists::unsubscribed::<S>))
    .route("/artists/{id}", get(artists::get_one::<S>))
    .route("/artists/{id}/stats", get(artists::stats::<S>))
    .route("/artists/{id}/posts", get(artists::posts::<S>))
    .route("/artists/{id}/messages", get(artists::messages::<S>))
    // Content
    .route("/posts", get(posts::list::<S>))
    .route("/posts/{id}/comments", get(posts::comments::<S>))
    .route("/messages", get(messages::list::<S>))
    .route("/messages/unread", get(messages::unread::<S>))
    .route("/stats", get(stats::platform::<S>))
    // Logins
    .route("/auth/admin/login", post(auth::admin_login::<S>))
    .route("/auth/artist/login", post(auth::artist_login::<S>))
    .with_state(store);

  meta::router().merge(data)
}

#[cfg(test)]
mod tests;
