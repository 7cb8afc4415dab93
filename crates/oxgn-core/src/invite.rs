//! Admin-issued invitations to join the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Roles an invitation can grant. Admins are never invited.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InviteRole {
  Artist,
  Manager,
  Fan,
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InviteStatus {
  Pending,
  Accepted,
  Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invite {
  pub id:         String,
  pub email:      String,
  pub role:       InviteRole,
  pub status:     InviteStatus,
  /// Id of the admin who sent it.
  pub invited_by: String,
  pub created_at: DateTime<Utc>,
  pub expires_at: DateTime<Utc>,
}
