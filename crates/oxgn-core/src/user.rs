//! Platform accounts and their (mock) login credentials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What an account is allowed to do on the platform.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
  Admin,
  Artist,
  Manager,
  Fan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:         String,
  pub email:      String,
  pub first_name: String,
  pub last_name:  String,
  pub avatar_url: String,
  pub role:       Role,
  pub created_at: DateTime<Utc>,
}

impl User {
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

/// An admin portal login. Plaintext: this is demo data, not an auth system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminCredential {
  pub email:    String,
  pub password: String,
}

/// An artist portal login, bound to the artist profile it opens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistCredential {
  pub email:     String,
  pub password:  String,
  pub artist_id: String,
}
