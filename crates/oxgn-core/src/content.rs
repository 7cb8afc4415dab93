//! Posts published by artists and the comments fans leave on them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
  Text,
  Image,
  Video,
  Audio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
  pub id:             String,
  pub artist_id:      String,
  pub title:          String,
  pub content:        String,
  pub content_type:   ContentType,
  /// Ordered media locations; empty for text posts.
  pub media_urls:     Vec<String>,
  pub likes_count:    u64,
  pub comments_count: u64,
  /// Whether the current fan had liked the post when the data was loaded.
  pub is_liked:       bool,
  pub created_at:     DateTime<Utc>,
}

impl Post {
  /// The first media url, if the post is of a kind that renders one.
  pub fn primary_media(&self) -> Option<&str> {
    match self.content_type {
      ContentType::Text => None,
      _ => self.media_urls.first().map(String::as_str),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
  pub id:         String,
  pub post_id:    String,
  pub user_id:    String,
  pub user_name:  String,
  pub content:    String,
  pub created_at: DateTime<Utc>,
}
