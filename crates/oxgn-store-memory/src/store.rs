//! [`MemoryStore`]: the in-memory implementation of [`PlatformStore`].

use std::{path::Path, sync::Arc, time::Duration};

use tracing::debug;

use oxgn_core::{
  artist::Artist,
  content::{Comment, Post},
  dataset::Dataset,
  invite::Invite,
  message::Message,
  store::PlatformStore,
  subscription::Subscription,
  user::{AdminCredential, ArtistCredential, User},
};

use crate::{Error, Result, seed};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A read-only platform store over a validated [`Dataset`].
///
/// Cloning is cheap: the dataset is reference-counted.
#[derive(Debug, Clone)]
pub struct MemoryStore {
  data:          Arc<Dataset>,
  login_latency: Duration,
}

impl MemoryStore {
  /// Serve `data` after checking its record invariants.
  pub fn new(data: Dataset) -> Result<Self> {
    data.validate()?;
    Ok(Self { data: Arc::new(data), login_latency: Duration::ZERO })
  }

  /// The bundled demo catalogue.
  pub fn seeded() -> Result<Self> { Self::new(seed()?) }

  /// Load a dataset from a JSON file laid out like the bundled seed.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path)
      .await
      .map_err(|source| Error::Read { path: path.to_owned(), source })?;
    Self::new(serde_json::from_str(&raw)?)
  }

  /// Delay every credential lookup by `latency`.
  pub fn with_login_latency(mut self, latency: Duration) -> Self {
    self.login_latency = latency;
    self
  }

  pub fn dataset(&self) -> &Dataset { &self.data }

  async fn simulate_login_latency(&self) {
    if !self.login_latency.is_zero() {
      tokio::time::sleep(self.login_latency).await;
    }
  }
}

// ─── PlatformStore impl ──────────────────────────────────────────────────────

impl PlatformStore for MemoryStore {
  type Error = Error;

  async fn current_fan_id(&self) -> Result<String> {
    Ok(self.data.current_fan_id.clone())
  }

  async fn list_users(&self) -> Result<Vec<User>> { Ok(self.data.users.clone()) }

  async fn list_artists(&self) -> Result<Vec<Artist>> {
    Ok(self.data.artists.clone())
  }

  async fn get_artist(&self, id: &str) -> Result<Option<Artist>> {
    Ok(self.data.artists.iter().find(|a| a.id == id).cloned())
  }

  async fn list_posts(&self) -> Result<Vec<Post>> { Ok(self.data.posts.clone()) }

  async fn get_post(&self, id: &str) -> Result<Option<Post>> {
    Ok(self.data.posts.iter().find(|p| p.id == id).cloned())
  }

  async fn list_comments(&self) -> Result<Vec<Comment>> {
    Ok(self.data.comments.clone())
  }

  async fn list_subscriptions(&self) -> Result<Vec<Subscription>> {
    Ok(self.data.subscriptions.clone())
  }

  async fn list_messages(&self) -> Result<Vec<Message>> {
    Ok(self.data.messages.clone())
  }

  async fn list_invites(&self) -> Result<Vec<Invite>> {
    Ok(self.data.invites.clone())
  }

  async fn find_admin_credential(&self, email: &str) -> Result<Option<AdminCredential>> {
    self.simulate_login_latency().await;
    let found = self.data.admin_credentials.iter().find(|c| c.email == email);
    debug!(email, found = found.is_some(), "admin credential lookup");
    Ok(found.cloned())
  }

  async fn find_artist_credential(
    &self,
    email: &str,
  ) -> Result<Option<ArtistCredential>> {
    self.simulate_login_latency().await;
    let found = self.data.artist_credentials.iter().find(|c| c.email == email);
    debug!(email, found = found.is_some(), "artist credential lookup");
    Ok(found.cloned())
  }

  async fn artist_credential_for(
    &self,
    artist_id: &str,
  ) -> Result<Option<ArtistCredential>> {
    Ok(
      self
        .data
        .artist_credentials
        .iter()
        .find(|c| c.artist_id == artist_id)
        .cloned(),
    )
  }
}
