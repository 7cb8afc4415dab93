//! The `PlatformStore` trait.
//!
//! Implemented by storage backends (e.g. `oxgn-store-memory`). Higher layers
//! (`oxgn-api`, the login gates) depend on this abstraction, so a persistent
//! backend can replace the seeded mock data without touching them.

use std::future::Future;

use crate::{
  artist::Artist,
  content::{Comment, Post},
  invite::Invite,
  message::Message,
  subscription::Subscription,
  user::{AdminCredential, ArtistCredential, User},
};

/// Read access to the platform's records.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`). Lists come back in the backend's
/// natural order; derivations in [`crate::query`] rely on that order for
/// stable tie-breaks.
pub trait PlatformStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The fan whose subscriptions drive the fan-facing views.
  fn current_fan_id(
    &self,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  // ── Accounts ──────────────────────────────────────────────────────────

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  // ── Artists and content ───────────────────────────────────────────────

  fn list_artists(
    &self,
  ) -> impl Future<Output = Result<Vec<Artist>, Self::Error>> + Send + '_;

  /// Retrieve an artist by id. Returns `None` if not found.
  fn get_artist<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Artist>, Self::Error>> + Send + 'a;

  fn list_posts(
    &self,
  ) -> impl Future<Output = Result<Vec<Post>, Self::Error>> + Send + '_;

  /// Retrieve a post by id. Returns `None` if not found.
  fn get_post<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<Post>, Self::Error>> + Send + 'a;

  fn list_comments(
    &self,
  ) -> impl Future<Output = Result<Vec<Comment>, Self::Error>> + Send + '_;

  // ── Relationships ─────────────────────────────────────────────────────

  fn list_subscriptions(
    &self,
  ) -> impl Future<Output = Result<Vec<Subscription>, Self::Error>> + Send + '_;

  fn list_messages(
    &self,
  ) -> impl Future<Output = Result<Vec<Message>, Self::Error>> + Send + '_;

  fn list_invites(
    &self,
  ) -> impl Future<Output = Result<Vec<Invite>, Self::Error>> + Send + '_;

  // ── Credentials ───────────────────────────────────────────────────────

  /// Look up the admin login registered for `email`.
  fn find_admin_credential<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<AdminCredential>, Self::Error>> + Send + 'a;

  /// Look up the artist login registered for `email`.
  fn find_artist_credential<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<ArtistCredential>, Self::Error>> + Send + 'a;

  /// The login that opens `artist_id`'s portal, used to prefill demo forms.
  fn artist_credential_for<'a>(
    &'a self,
    artist_id: &'a str,
  ) -> impl Future<Output = Result<Option<ArtistCredential>, Self::Error>> + Send + 'a;
}
