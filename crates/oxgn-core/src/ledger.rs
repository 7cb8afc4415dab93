//! Session-local copies of the fan's subscriptions, inbox, and discovery list.
//!
//! Each view takes a snapshot from the store and mutates it in place. The
//! store is never written.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::{
  Error, Money, Result,
  artist::{Artist, ArtistSnapshot},
  billing::PaymentProcessor,
  message::Message,
  query,
  subscription::{BillingBadge, Subscription},
};

// ─── Subscriptions ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SubscriptionLedger {
  subscriptions: Vec<Subscription>,
}

impl SubscriptionLedger {
  pub fn new(subscriptions: Vec<Subscription>) -> Self { Self { subscriptions } }

  pub fn subscriptions(&self) -> &[Subscription] { &self.subscriptions }

  fn find_mut(&mut self, id: &str) -> Option<&mut Subscription> {
    self.subscriptions.iter_mut().find(|s| s.id == id)
  }

  /// Stop renewal at the end of the current period. Returns `false` for an
  /// unknown id.
  pub fn cancel(&mut self, id: &str) -> bool {
    self.set_cancel_flag(id, true)
  }

  pub fn reactivate(&mut self, id: &str) -> bool {
    self.set_cancel_flag(id, false)
  }

  fn set_cancel_flag(&mut self, id: &str, cancel: bool) -> bool {
    match self.find_mut(id) {
      Some(sub) => {
        sub.cancel_at_period_end = cancel;
        true
      }
      None => false,
    }
  }

  pub fn badge(&self, id: &str) -> Option<BillingBadge> {
    self.subscriptions.iter().find(|s| s.id == id).map(Subscription::badge)
  }

  /// Cancelling subscriptions still count until their period ends.
  pub fn monthly_spend(&self) -> Money { query::monthly_spend(&self.subscriptions) }
}

// ─── Inbox ───────────────────────────────────────────────────────────────────

/// A reply the fan sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
  pub in_reply_to: String,
  pub to_id:       String,
  pub content:     String,
}

#[derive(Debug, Clone, Default)]
pub struct Inbox {
  messages:    Vec<Message>,
  replying_to: Option<String>,
  pub draft:   String,
}

impl Inbox {
  pub fn new(messages: Vec<Message>) -> Self {
    Self { messages, ..Default::default() }
  }

  pub fn messages(&self) -> &[Message] { &self.messages }

  pub fn unread_count(&self) -> usize { self.messages.iter().filter(|m| !m.is_read).count() }

  /// The message the reply box is open for.
  pub fn replying_to(&self) -> Option<&Message> {
    let id = self.replying_to.as_deref()?;
    self.messages.iter().find(|m| m.id == id)
  }

  pub fn mark_read(&mut self, id: &str) -> bool {
    match self.messages.iter_mut().find(|m| m.id == id) {
      Some(m) => {
        m.is_read = true;
        true
      }
      None => false,
    }
  }

  pub fn delete(&mut self, id: &str) -> bool {
    let before = self.messages.len();
    self.messages.retain(|m| m.id != id);
    if self.replying_to.as_deref() == Some(id) {
      self.cancel_reply();
    }
    self.messages.len() != before
  }

  /// Open the reply box for `id`, marking it read.
  pub fn start_reply(&mut self, id: &str) -> bool {
    if !self.mark_read(id) {
      return false;
    }
    self.replying_to = Some(id.to_owned());
    self.draft.clear();
    true
  }

  pub fn cancel_reply(&mut self) {
    self.replying_to = None;
    self.draft.clear();
  }

  /// Send the draft. A blank draft keeps the reply box open.
  pub fn submit_reply(&mut self) -> Option<Reply> {
    let content = self.draft.trim();
    if content.is_empty() {
      return None;
    }
    let content = content.to_owned();
    let message = self.replying_to()?;
    let reply = Reply {
      in_reply_to: message.id.clone(),
      to_id: message.from_id.clone(),
      content,
    };
    self.cancel_reply();
    Some(reply)
  }
}

// ─── Discovery ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscribeStatus {
  #[default]
  Idle,
  Processing,
  Subscribed,
}

/// Artists the fan can still subscribe to.
#[derive(Debug, Clone, Default)]
pub struct DiscoverState {
  artists: Vec<Artist>,
  status:  HashMap<String, SubscribeStatus>,
}

impl DiscoverState {
  pub fn new(unsubscribed: Vec<Artist>) -> Self {
    Self { artists: unsubscribed, status: HashMap::new() }
  }

  pub fn artists(&self) -> &[Artist] { &self.artists }

  pub fn status(&self, artist_id: &str) -> SubscribeStatus {
    self.status.get(artist_id).copied().unwrap_or_default()
  }

  /// Mark `artist_id` as processing. Returns the artist, or `None` if it is
  /// not listed or already in flight.
  pub fn begin(&mut self, artist_id: &str) -> Option<ArtistSnapshot> {
    if self.status(artist_id) != SubscribeStatus::Idle {
      return None;
    }
    let artist = self.artists.iter().find(|a| a.id == artist_id)?.snapshot();
    self.status.insert(artist_id.to_owned(), SubscribeStatus::Processing);
    Some(artist)
  }

  /// The subscription went through: the artist leaves the list.
  pub fn complete(&mut self, artist_id: &str) {
    self.status.insert(artist_id.to_owned(), SubscribeStatus::Subscribed);
    self.artists.retain(|a| a.id != artist_id);
  }

  pub fn fail(&mut self, artist_id: &str) {
    self.status.remove(artist_id);
  }

  /// Run a subscribe through `processor`, moving `artist_id` through
  /// processing to subscribed.
  pub async fn subscribe<P: PaymentProcessor>(
    &mut self,
    artist_id: &str,
    processor: &P,
  ) -> Result<()> {
    match self.status(artist_id) {
      SubscribeStatus::Idle => {}
      SubscribeStatus::Processing => {
        return Err(Error::InvalidTransition { state: "processing", action: "subscribe" });
      }
      SubscribeStatus::Subscribed => {
        return Err(Error::InvalidTransition { state: "subscribed", action: "subscribe" });
      }
    }
    let artist = self
      .begin(artist_id)
      .ok_or_else(|| Error::ArtistNotFound(artist_id.to_owned()))?;

    if let Err(e) = processor.confirm_subscription(&artist).await {
      self.fail(artist_id);
      return Err(Error::Payment(Box::new(e)));
    }

    debug!(artist_id, "subscribed from discovery");
    self.complete(artist_id);
    Ok(())
  }
}
