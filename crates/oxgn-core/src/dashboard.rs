//! Tabbed dashboards for each persona.
//!
//! A tab's working state (likes, drafts, filters) lives only while the tab is
//! showing. Selecting another tab rebuilds the new tab's state from the
//! dashboard's snapshot, so edits in the tab being left are lost.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

use crate::{
  artist::Artist,
  content::Post,
  feed::FeedState,
  invite::InviteStatus,
  ledger::{DiscoverState, Inbox, SubscriptionLedger},
  message::Message,
  query::{self, UserFilter},
  store::PlatformStore,
  subscription::Subscription,
};

/// A dashboard section. The first variant is where a dashboard opens.
pub trait Tab: Copy + Eq + Display + FromStr + IntoEnumIterator {
  const FIRST: Self;
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FanTab {
  Feed,
  Discover,
  Subscriptions,
  Messages,
}

impl Tab for FanTab {
  const FIRST: Self = FanTab::Feed;
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AdminTab {
  Overview,
  Users,
  Artists,
  Invites,
}

impl Tab for AdminTab {
  const FIRST: Self = AdminTab::Overview;
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArtistTab {
  Overview,
  Content,
  Profile,
  Messages,
  Settings,
}

impl Tab for ArtistTab {
  const FIRST: Self = ArtistTab::Overview;
}

/// Which tab of a dashboard is showing. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dashboard<T> {
  active: T,
}

impl<T: Tab> Default for Dashboard<T> {
  fn default() -> Self { Self { active: T::FIRST } }
}

impl<T: Tab> Dashboard<T> {
  pub fn active_tab(&self) -> T { self.active }

  pub fn select(&mut self, tab: T) { self.active = tab; }

  /// Select a tab by its lowercase name. Unknown names leave the selection
  /// alone.
  pub fn select_named(&mut self, name: &str) -> Result<(), T::Err> {
    self.active = name.parse()?;
    Ok(())
  }

  /// All tabs in display order.
  pub fn tabs() -> impl Iterator<Item = T> { T::iter() }
}

// ─── Fan dashboard ───────────────────────────────────────────────────────────

/// The records the fan dashboard's tabs are built from.
#[derive(Debug, Clone, Default)]
pub struct FanSnapshot {
  /// Posts from subscribed artists, newest first.
  pub feed:          Vec<Post>,
  pub discover:      Vec<Artist>,
  pub subscriptions: Vec<Subscription>,
  pub inbox:         Vec<Message>,
}

impl FanSnapshot {
  /// Read the current fan's view of the platform from `store`.
  pub async fn load<S: PlatformStore>(store: &S) -> Result<Self, S::Error> {
    let fan_id = store.current_fan_id().await?;
    let artists = store.list_artists().await?;
    let posts = store.list_posts().await?;
    let mut subscriptions = store.list_subscriptions().await?;
    let mut inbox = store.list_messages().await?;

    let feed = query::subscribed_posts(&posts, &subscriptions, &fan_id)
      .into_iter()
      .cloned()
      .collect();
    let discover = query::unsubscribed_artists(&artists, &subscriptions, &fan_id)
      .into_iter()
      .cloned()
      .collect();
    subscriptions.retain(|s| s.fan_id == fan_id);
    inbox.retain(|m| m.to_id == fan_id);

    Ok(Self { feed, discover, subscriptions, inbox })
  }
}

#[derive(Debug, Clone)]
pub enum FanView {
  Feed(FeedState),
  Discover(DiscoverState),
  Subscriptions(SubscriptionLedger),
  Messages(Inbox),
}

impl FanView {
  fn open(tab: FanTab, snapshot: &FanSnapshot) -> Self {
    match tab {
      FanTab::Feed => Self::Feed(FeedState::new(&snapshot.feed)),
      FanTab::Discover => Self::Discover(DiscoverState::new(snapshot.discover.clone())),
      FanTab::Subscriptions => {
        Self::Subscriptions(SubscriptionLedger::new(snapshot.subscriptions.clone()))
      }
      FanTab::Messages => Self::Messages(Inbox::new(snapshot.inbox.clone())),
    }
  }
}

#[derive(Debug, Clone)]
pub struct FanDashboard {
  tabs:     Dashboard<FanTab>,
  snapshot: FanSnapshot,
  view:     FanView,
}

impl FanDashboard {
  pub fn new(snapshot: FanSnapshot) -> Self {
    let view = FanView::open(FanTab::FIRST, &snapshot);
    Self { tabs: Dashboard::default(), snapshot, view }
  }

  pub fn active_tab(&self) -> FanTab { self.tabs.active_tab() }

  pub fn snapshot(&self) -> &FanSnapshot { &self.snapshot }

  pub fn view(&self) -> &FanView { &self.view }

  /// Show `tab`. Re-selecting the active tab keeps its state.
  pub fn select(&mut self, tab: FanTab) {
    if tab == self.tabs.active_tab() {
      return;
    }
    self.tabs.select(tab);
    self.view = FanView::open(tab, &self.snapshot);
  }

  pub fn select_named(&mut self, name: &str) -> Result<(), strum::ParseError> {
    self.select(name.parse()?);
    Ok(())
  }

  pub fn feed_mut(&mut self) -> Option<&mut FeedState> {
    match &mut self.view {
      FanView::Feed(feed) => Some(feed),
      _ => None,
    }
  }

  pub fn discover_mut(&mut self) -> Option<&mut DiscoverState> {
    match &mut self.view {
      FanView::Discover(discover) => Some(discover),
      _ => None,
    }
  }

  pub fn subscriptions_mut(&mut self) -> Option<&mut SubscriptionLedger> {
    match &mut self.view {
      FanView::Subscriptions(ledger) => Some(ledger),
      _ => None,
    }
  }

  pub fn inbox_mut(&mut self) -> Option<&mut Inbox> {
    match &mut self.view {
      FanView::Messages(inbox) => Some(inbox),
      _ => None,
    }
  }
}

// ─── Admin dashboard ─────────────────────────────────────────────────────────

/// Per-tab filters of the admin dashboard. The overview has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminView {
  Overview,
  Users(UserFilter),
  Artists { search: String },
  Invites { status: Option<InviteStatus> },
}

impl AdminView {
  fn open(tab: AdminTab) -> Self {
    match tab {
      AdminTab::Overview => Self::Overview,
      AdminTab::Users => Self::Users(UserFilter::default()),
      AdminTab::Artists => Self::Artists { search: String::new() },
      AdminTab::Invites => Self::Invites { status: None },
    }
  }
}

#[derive(Debug, Clone)]
pub struct AdminDashboard {
  tabs: Dashboard<AdminTab>,
  view: AdminView,
}

impl Default for AdminDashboard {
  fn default() -> Self {
    Self { tabs: Dashboard::default(), view: AdminView::open(AdminTab::FIRST) }
  }
}

impl AdminDashboard {
  pub fn active_tab(&self) -> AdminTab { self.tabs.active_tab() }

  pub fn view(&self) -> &AdminView { &self.view }

  pub fn view_mut(&mut self) -> &mut AdminView { &mut self.view }

  /// Show `tab` with its filters cleared. Re-selecting the active tab keeps
  /// them.
  pub fn select(&mut self, tab: AdminTab) {
    if tab == self.tabs.active_tab() {
      return;
    }
    self.tabs.select(tab);
    self.view = AdminView::open(tab);
  }
}
