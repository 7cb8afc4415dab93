//! Pure derivations over platform records.
//!
//! Nothing here fails: a query with no matches yields an empty result. Every
//! function preserves the input order unless it documents a sort, and all
//! sorts are stable, so records with equal timestamps keep their original
//! relative order.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
  Money,
  artist::Artist,
  content::{Comment, Post},
  invite::{Invite, InviteStatus},
  message::Message,
  subscription::Subscription,
  user::{Role, User},
};

// ─── Fan subscriptions ───────────────────────────────────────────────────────

/// Ids of the artists `fan_id` holds an active subscription to.
pub fn active_artist_ids<'a>(
  subscriptions: &'a [Subscription],
  fan_id: &str,
) -> HashSet<&'a str> {
  subscriptions
    .iter()
    .filter(|s| s.fan_id == fan_id && s.is_active())
    .map(|s| s.artist_id.as_str())
    .collect()
}

/// Artists `fan_id` actively subscribes to, in artist order.
pub fn subscribed_artists<'a>(
  artists: &'a [Artist],
  subscriptions: &[Subscription],
  fan_id: &str,
) -> Vec<&'a Artist> {
  let ids = active_artist_ids(subscriptions, fan_id);
  artists.iter().filter(|a| ids.contains(a.id.as_str())).collect()
}

/// The complement of [`subscribed_artists`] over the full artist set.
pub fn unsubscribed_artists<'a>(
  artists: &'a [Artist],
  subscriptions: &[Subscription],
  fan_id: &str,
) -> Vec<&'a Artist> {
  let ids = active_artist_ids(subscriptions, fan_id);
  artists.iter().filter(|a| !ids.contains(a.id.as_str())).collect()
}

/// Posts from subscribed artists, newest first.
pub fn subscribed_posts<'a>(
  posts: &'a [Post],
  subscriptions: &[Subscription],
  fan_id: &str,
) -> Vec<&'a Post> {
  let ids = active_artist_ids(subscriptions, fan_id);
  let mut feed: Vec<&Post> = posts
    .iter()
    .filter(|p| ids.contains(p.artist_id.as_str()))
    .collect();
  feed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
  feed
}

/// Sum of the active subscription amounts in `subscriptions`.
pub fn monthly_spend(subscriptions: &[Subscription]) -> Money {
  subscriptions
    .iter()
    .filter(|s| s.is_active())
    .map(|s| s.amount)
    .sum()
}

// ─── Messages and comments ───────────────────────────────────────────────────

pub fn unread_messages(messages: &[Message]) -> Vec<&Message> {
  messages.iter().filter(|m| !m.is_read).collect()
}

/// Messages sent by `from_id` (an artist's outbox).
pub fn messages_from<'a>(messages: &'a [Message], from_id: &str) -> Vec<&'a Message> {
  messages.iter().filter(|m| m.from_id == from_id).collect()
}

/// Comments on `post_id`, oldest first.
pub fn comments_for_post<'a>(comments: &'a [Comment], post_id: &str) -> Vec<&'a Comment> {
  let mut thread: Vec<&Comment> =
    comments.iter().filter(|c| c.post_id == post_id).collect();
  thread.sort_by(|a, b| a.created_at.cmp(&b.created_at));
  thread
}

pub fn posts_by_artist<'a>(posts: &'a [Post], artist_id: &str) -> Vec<&'a Post> {
  posts.iter().filter(|p| p.artist_id == artist_id).collect()
}

// ─── Admin filters ───────────────────────────────────────────────────────────

/// Admin user-list filter: role match and case-insensitive search over name
/// parts and email.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
  /// `None` matches every role.
  pub role:   Option<Role>,
  pub search: String,
}

impl UserFilter {
  pub fn matches(&self, user: &User) -> bool {
    let role_ok = self.role.is_none_or(|r| r == user.role);
    let needle = self.search.to_lowercase();
    let search_ok = [&user.first_name, &user.last_name, &user.email]
      .iter()
      .any(|field| field.to_lowercase().contains(&needle));
    role_ok && search_ok
  }

  pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
    users.iter().filter(|u| self.matches(u)).collect()
  }
}

/// Case-insensitive search over display name, username and cause.
pub fn search_artists<'a>(artists: &'a [Artist], term: &str) -> Vec<&'a Artist> {
  let needle = term.to_lowercase();
  artists
    .iter()
    .filter(|a| {
      a.display_name.to_lowercase().contains(&needle)
        || a.username.to_lowercase().contains(&needle)
        || a.cause.to_lowercase().contains(&needle)
    })
    .collect()
}

/// Invites with `status`, or all of them when `status` is `None`.
pub fn filter_invites(
  invites: &[Invite],
  status: Option<InviteStatus>,
) -> Vec<&Invite> {
  invites
    .iter()
    .filter(|i| status.is_none_or(|s| s == i.status))
    .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InviteCounts {
  pub pending:  usize,
  pub accepted: usize,
  pub expired:  usize,
}

impl InviteCounts {
  pub fn tally(invites: &[Invite]) -> Self {
    invites.iter().fold(Self::default(), |mut acc, invite| {
      match invite.status {
        InviteStatus::Pending => acc.pending += 1,
        InviteStatus::Accepted => acc.accepted += 1,
        InviteStatus::Expired => acc.expired += 1,
      }
      acc
    })
  }
}

// ─── Statistics ──────────────────────────────────────────────────────────────

/// Platform-wide figures for the admin overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformKpis {
  pub total_users:          usize,
  pub total_artists:        usize,
  pub total_fans:           usize,
  pub total_managers:       usize,
  pub total_posts:          usize,
  pub active_subscriptions: usize,
  pub monthly_revenue:      Money,
  pub pending_invites:      usize,
  /// Active subscriptions per fan, as a whole percentage (half rounds up).
  pub conversion_percent:   u64,
}

impl PlatformKpis {
  pub fn compute(
    users: &[User],
    artists: &[Artist],
    posts: &[Post],
    subscriptions: &[Subscription],
    invites: &[Invite],
  ) -> Self {
    let count_role = |role: Role| users.iter().filter(|u| u.role == role).count();
    let total_fans = count_role(Role::Fan);
    let active_subscriptions =
      subscriptions.iter().filter(|s| s.is_active()).count();

    let conversion_percent = if total_fans == 0 {
      0
    } else {
      let (active, fans) = (active_subscriptions as u64, total_fans as u64);
      (active * 200 + fans) / (fans * 2)
    };

    Self {
      total_users: users.len(),
      total_artists: artists.len(),
      total_fans,
      total_managers: count_role(Role::Manager),
      total_posts: posts.len(),
      active_subscriptions,
      monthly_revenue: monthly_spend(subscriptions),
      pending_invites: InviteCounts::tally(invites).pending,
      conversion_percent,
    }
  }
}

/// Per-artist figures shared by the admin artist table and the artist's own
/// overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistStats {
  pub artist_id:          String,
  pub total_posts:        usize,
  pub total_likes:        u64,
  pub total_comments:     u64,
  pub active_subscribers: usize,
  /// Sum of the artist's active subscription amounts.
  pub active_revenue:     Money,
  /// Every subscription on record for the artist, at the current price.
  pub projected_revenue:  Money,
}

impl ArtistStats {
  pub fn compute(
    artist: &Artist,
    posts: &[Post],
    subscriptions: &[Subscription],
  ) -> Self {
    let own_posts = posts_by_artist(posts, &artist.id);
    let own_subs: Vec<Subscription> = subscriptions
      .iter()
      .filter(|s| s.artist_id == artist.id)
      .cloned()
      .collect();
    let active_subscribers = own_subs.iter().filter(|s| s.is_active()).count();

    Self {
      artist_id: artist.id.clone(),
      total_posts: own_posts.len(),
      total_likes: own_posts.iter().map(|p| p.likes_count).sum(),
      total_comments: own_posts.iter().map(|p| p.comments_count).sum(),
      active_subscribers,
      active_revenue: monthly_spend(&own_subs),
      projected_revenue: artist.subscription_price.times(own_subs.len() as u64),
    }
  }
}
