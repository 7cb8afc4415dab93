//! Direct messages from artists to fans.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  pub id:         String,
  /// Weak reference to an artist or user.
  pub from_id:    String,
  pub to_id:      String,
  pub from_name:  String,
  pub content:    String,
  pub created_at: DateTime<Utc>,
  pub is_read:    bool,
}
