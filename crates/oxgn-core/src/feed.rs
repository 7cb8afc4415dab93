//! Per-post interaction state for the fan feed.
//!
//! Nothing here writes back to the store: likes and comments are local to the
//! session, and a submitted comment is handed back to the caller.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::Post;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostUiState {
  pub liked:             bool,
  pub comments_expanded: bool,
  pub draft_comment:     String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FeedAction {
  ToggleLike { post_id: String },
  ToggleComments { post_id: String },
  EditComment { post_id: String, text: String },
  SubmitComment { post_id: String },
  /// `None` shows every subscribed artist.
  FilterArtist { artist_id: Option<String> },
}

/// A comment the fan just posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmittedComment {
  pub post_id: String,
  pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct FeedState {
  posts:         HashMap<String, PostUiState>,
  artist_filter: Option<String>,
}

impl FeedState {
  /// Seed like flags from each post's stored `is_liked`.
  pub fn new<'a>(posts: impl IntoIterator<Item = &'a Post>) -> Self {
    let posts = posts
      .into_iter()
      .map(|p| {
        (p.id.clone(), PostUiState { liked: p.is_liked, ..Default::default() })
      })
      .collect();
    Self { posts, artist_filter: None }
  }

  pub fn post(&self, post_id: &str) -> Option<&PostUiState> { self.posts.get(post_id) }

  pub fn artist_filter(&self) -> Option<&str> { self.artist_filter.as_deref() }

  fn entry(&mut self, post_id: String) -> &mut PostUiState {
    self.posts.entry(post_id).or_default()
  }

  pub fn apply(&mut self, action: FeedAction) -> Option<SubmittedComment> {
    match action {
      FeedAction::ToggleLike { post_id } => {
        let ui = self.entry(post_id);
        ui.liked = !ui.liked;
      }
      FeedAction::ToggleComments { post_id } => {
        let ui = self.entry(post_id);
        ui.comments_expanded = !ui.comments_expanded;
      }
      FeedAction::EditComment { post_id, text } => {
        self.entry(post_id).draft_comment = text;
      }
      FeedAction::SubmitComment { post_id } => {
        let ui = self.posts.get_mut(&post_id)?;
        let content = ui.draft_comment.trim();
        if content.is_empty() {
          return None;
        }
        let content = content.to_owned();
        ui.draft_comment.clear();
        return Some(SubmittedComment { post_id, content });
      }
      FeedAction::FilterArtist { artist_id } => self.artist_filter = artist_id,
    }
    None
  }

  pub fn is_liked(&self, post: &Post) -> bool {
    self.posts.get(&post.id).map_or(post.is_liked, |ui| ui.liked)
  }

  /// The like count to show, adjusted by one when the local flag differs
  /// from the stored one.
  pub fn likes_count(&self, post: &Post) -> u64 {
    match (post.is_liked, self.is_liked(post)) {
      (false, true) => post.likes_count + 1,
      (true, false) => post.likes_count.saturating_sub(1),
      _ => post.likes_count,
    }
  }

  /// Narrow `posts` to the selected artist, if any.
  pub fn visible<'a>(&self, posts: Vec<&'a Post>) -> Vec<&'a Post> {
    match &self.artist_filter {
      Some(artist_id) => posts.into_iter().filter(|p| &p.artist_id == artist_id).collect(),
      None => posts,
    }
  }
}
