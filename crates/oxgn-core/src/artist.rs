//! Artists: the content creators fans subscribe to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
  pub id:                 String,
  /// Weak reference to the owning [`User`](crate::user::User).
  pub user_id:            String,
  pub username:           String,
  pub display_name:       String,
  pub avatar_url:         String,
  pub banner_url:         String,
  pub story:              String,
  pub location:           String,
  /// The cause the artist supports, shown on their profile.
  pub cause:              String,
  /// Monthly price; always positive.
  pub subscription_price: Money,
  pub subscriber_count:   u64,
  pub is_verified:        bool,
  pub created_at:         DateTime<Utc>,
}

impl Artist {
  pub fn snapshot(&self) -> ArtistSnapshot {
    ArtistSnapshot {
      id:                 self.id.clone(),
      display_name:       self.display_name.clone(),
      username:           self.username.clone(),
      avatar_url:         self.avatar_url.clone(),
      subscription_price: self.subscription_price,
    }
  }
}

/// The part of an [`Artist`] the onboarding flow carries between steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistSnapshot {
  pub id:                 String,
  pub display_name:       String,
  pub username:           String,
  pub avatar_url:         String,
  pub subscription_price: Money,
}
