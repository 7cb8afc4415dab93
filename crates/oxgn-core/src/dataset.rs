//! [`Dataset`]: every record a platform store serves, in one value.
//!
//! Relationships between records are by id only; nothing here enforces
//! referential integrity. [`Dataset::validate`] checks the per-record
//! invariants a backend must uphold before serving the data.

use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  artist::Artist,
  content::{Comment, ContentType, Post},
  invite::Invite,
  message::Message,
  subscription::Subscription,
  user::{AdminCredential, ArtistCredential, User},
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
  /// The fan whose point of view the fan-facing derivations take.
  pub current_fan_id:     String,
  pub users:              Vec<User>,
  pub artists:            Vec<Artist>,
  pub posts:              Vec<Post>,
  pub comments:           Vec<Comment>,
  pub subscriptions:      Vec<Subscription>,
  pub messages:           Vec<Message>,
  pub invites:            Vec<Invite>,
  pub admin_credentials:  Vec<AdminCredential>,
  pub artist_credentials: Vec<ArtistCredential>,
}

impl Dataset {
  /// Reject artists without a positive price and text posts carrying media.
  pub fn validate(&self) -> Result<()> {
    if let Some(artist) =
      self.artists.iter().find(|a| a.subscription_price.is_zero())
    {
      return Err(Error::NonPositivePrice(artist.id.clone()));
    }
    if let Some(post) = self
      .posts
      .iter()
      .find(|p| p.content_type == ContentType::Text && !p.media_urls.is_empty())
    {
      return Err(Error::TextPostWithMedia(post.id.clone()));
    }
    Ok(())
  }
}
