//! Integration tests for `MemoryStore` against the bundled demo catalogue.

use std::time::{Duration, Instant};

use oxgn_core::{
  Money,
  billing::PaymentProcessor,
  checkout::{Field, PaymentForm},
  dashboard::{FanDashboard, FanSnapshot, FanTab},
  dataset::Dataset,
  feed::FeedAction,
  ledger::{DiscoverState, SubscribeStatus},
  login::{self, LoginError},
  onboarding::{OnboardingFlow, OnboardingState},
  query::{self, ArtistStats, InviteCounts, PlatformKpis},
  store::PlatformStore,
};

use crate::{Error, MemoryStore, SimulatedPayments, seed};

fn store() -> MemoryStore { MemoryStore::seeded().expect("seed dataset") }

// ─── Seed ────────────────────────────────────────────────────────────────────

#[test]
fn seed_parses_and_validates() {
  let data = seed().unwrap();
  assert_eq!(data.current_fan_id, "fan-1");
  assert_eq!(data.users.len(), 8);
  assert_eq!(data.artists.len(), 4);
  assert_eq!(data.posts.len(), 6);
  assert_eq!(data.comments.len(), 3);
  assert_eq!(data.subscriptions.len(), 3);
  assert_eq!(data.messages.len(), 3);
  assert_eq!(data.invites.len(), 2);
  assert!(data.validate().is_ok());
}

#[test]
fn invalid_dataset_is_refused() {
  let mut data = seed().unwrap();
  data.artists[0].subscription_price = Money::ZERO;
  assert!(matches!(MemoryStore::new(data), Err(Error::Core(_))));
}

#[tokio::test]
async fn open_reports_missing_file() {
  let err = MemoryStore::open("/nonexistent/oxgn-seed.json").await.unwrap_err();
  assert!(matches!(err, Error::Read { .. }));
}

#[test]
fn empty_dataset_is_servable() {
  let store = MemoryStore::new(Dataset::default()).unwrap();
  assert!(store.dataset().artists.is_empty());
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn get_artist_and_post_by_id() {
  let s = store();
  let artist = s.get_artist("soul-fire").await.unwrap().unwrap();
  assert_eq!(artist.display_name, "Soul Fire");
  assert_eq!(artist.subscriber_count, 4521);
  assert!(s.get_artist("nobody").await.unwrap().is_none());

  let post = s.get_post("post-3").await.unwrap().unwrap();
  assert!(post.primary_media().is_none());
  assert!(s.get_post("post-99").await.unwrap().is_none());
}

#[tokio::test]
async fn fan_views_over_seed() {
  let s = store();
  let fan = s.current_fan_id().await.unwrap();
  let artists = s.list_artists().await.unwrap();
  let subs = s.list_subscriptions().await.unwrap();
  let posts = s.list_posts().await.unwrap();

  let subscribed: Vec<&str> = query::subscribed_artists(&artists, &subs, &fan)
    .iter()
    .map(|a| a.id.as_str())
    .collect();
  assert_eq!(subscribed, ["luna-echo", "neon-waves", "soul-fire"]);

  let discover = query::unsubscribed_artists(&artists, &subs, &fan);
  assert_eq!(discover.len(), 1);
  assert_eq!(discover[0].id, "wild-rose");

  let feed: Vec<&str> = query::subscribed_posts(&posts, &subs, &fan)
    .iter()
    .map(|p| p.id.as_str())
    .collect();
  assert_eq!(feed, ["post-1", "post-2", "post-3", "post-4", "post-5", "post-6"]);

  assert_eq!(query::monthly_spend(&subs).to_string(), "$26.97");
}

#[tokio::test]
async fn feed_and_discovery_posts_partition_all_posts() {
  let s = store();
  let fan = s.current_fan_id().await.unwrap();
  let artists = s.list_artists().await.unwrap();
  let posts = s.list_posts().await.unwrap();

  // Drop one subscription so both sides are non-empty.
  let mut subs = s.list_subscriptions().await.unwrap();
  subs.retain(|sub| sub.artist_id != "neon-waves");

  let feed = query::subscribed_posts(&posts, &subs, &fan);
  let elsewhere: Vec<_> = query::unsubscribed_artists(&artists, &subs, &fan)
    .iter()
    .flat_map(|a| query::posts_by_artist(&posts, &a.id))
    .collect();

  assert_eq!(feed.len() + elsewhere.len(), posts.len());
  assert!(feed.iter().all(|p| elsewhere.iter().all(|q| q.id != p.id)));
  assert!(elsewhere.iter().all(|p| p.artist_id == "neon-waves"));
}

#[tokio::test]
async fn messages_and_comments_over_seed() {
  let s = store();
  let messages = s.list_messages().await.unwrap();
  let unread = query::unread_messages(&messages);
  assert_eq!(unread.len(), 1);
  assert_eq!(unread[0].id, "msg-2");

  let comments = s.list_comments().await.unwrap();
  let thread: Vec<&str> = query::comments_for_post(&comments, "post-1")
    .iter()
    .map(|c| c.user_name.as_str())
    .collect();
  assert_eq!(thread, ["Sarah M.", "Alex R."]);
  assert!(query::comments_for_post(&comments, "post-2").is_empty());
}

#[tokio::test]
async fn admin_figures_over_seed() {
  let s = store();
  let kpis = PlatformKpis::compute(
    &s.list_users().await.unwrap(),
    &s.list_artists().await.unwrap(),
    &s.list_posts().await.unwrap(),
    &s.list_subscriptions().await.unwrap(),
    &s.list_invites().await.unwrap(),
  );
  assert_eq!(kpis.total_users, 8);
  assert_eq!(kpis.total_fans, 3);
  assert_eq!(kpis.total_managers, 0);
  assert_eq!(kpis.active_subscriptions, 3);
  assert_eq!(kpis.monthly_revenue, Money::from_cents(2697));
  assert_eq!(kpis.pending_invites, 1);
  assert_eq!(kpis.conversion_percent, 100);

  let counts = InviteCounts::tally(&s.list_invites().await.unwrap());
  assert_eq!(counts, InviteCounts { pending: 1, accepted: 1, expired: 0 });
}

#[tokio::test]
async fn artist_stats_over_seed() {
  let s = store();
  let luna = s.get_artist("luna-echo").await.unwrap().unwrap();
  let stats = ArtistStats::compute(
    &luna,
    &s.list_posts().await.unwrap(),
    &s.list_subscriptions().await.unwrap(),
  );
  assert_eq!(stats.total_posts, 2);
  assert_eq!(stats.total_likes, 323);
  assert_eq!(stats.total_comments, 90);
  assert_eq!(stats.active_subscribers, 1);
  assert_eq!(stats.active_revenue, Money::from_cents(899));
}

// ─── Fan dashboard ───────────────────────────────────────────────────────────

#[tokio::test]
async fn fan_snapshot_over_seed() {
  let snapshot = FanSnapshot::load(&store()).await.unwrap();
  assert_eq!(snapshot.feed.len(), 6);
  assert_eq!(snapshot.discover.len(), 1);
  assert_eq!(snapshot.subscriptions.len(), 3);
  assert_eq!(snapshot.inbox.len(), 3);
}

#[tokio::test]
async fn switching_tabs_drops_unsaved_edits() {
  let mut dash = FanDashboard::new(FanSnapshot::load(&store()).await.unwrap());
  assert_eq!(dash.active_tab(), FanTab::Feed);
  let baseline = dash.snapshot().feed[0].is_liked;
  let post_id = dash.snapshot().feed[0].id.clone();

  let feed = dash.feed_mut().unwrap();
  feed.apply(FeedAction::ToggleLike { post_id: post_id.clone() });
  feed.apply(FeedAction::EditComment {
    post_id: post_id.clone(),
    text:    "half-written".into(),
  });

  // Re-selecting the showing tab keeps its edits.
  dash.select(FanTab::Feed);
  let ui = dash.feed_mut().unwrap().post(&post_id).cloned().unwrap();
  assert_eq!(ui.draft_comment, "half-written");
  assert_eq!(ui.liked, !baseline);

  dash.select(FanTab::Messages);
  assert!(dash.feed_mut().is_none());
  let inbox = dash.inbox_mut().unwrap();
  assert!(inbox.start_reply("msg-2"));
  inbox.draft = "thanks for the".into();
  assert_eq!(inbox.unread_count(), 0);

  dash.select(FanTab::Feed);
  let ui = dash.feed_mut().unwrap().post(&post_id).cloned().unwrap();
  assert!(ui.draft_comment.is_empty());
  assert_eq!(ui.liked, baseline);

  dash.select_named("messages").unwrap();
  let inbox = dash.inbox_mut().unwrap();
  assert!(inbox.replying_to().is_none());
  assert!(inbox.draft.is_empty());
  assert_eq!(inbox.unread_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn discover_list_is_rebuilt_after_leaving_the_tab() {
  let payments = SimulatedPayments::default();
  let mut dash = FanDashboard::new(FanSnapshot::load(&store()).await.unwrap());

  dash.select(FanTab::Discover);
  let discover = dash.discover_mut().unwrap();
  discover.subscribe("wild-rose", &payments).await.unwrap();
  assert!(discover.artists().is_empty());

  dash.select(FanTab::Subscriptions);
  let ledger = dash.subscriptions_mut().unwrap();
  let first = ledger.subscriptions()[0].id.clone();
  assert!(ledger.cancel(&first));

  dash.select(FanTab::Discover);
  let discover = dash.discover_mut().unwrap();
  assert_eq!(discover.artists().len(), 1);
  assert_eq!(discover.status("wild-rose"), SubscribeStatus::Idle);

  dash.select(FanTab::Subscriptions);
  let ledger = dash.subscriptions_mut().unwrap();
  assert!(!ledger.subscriptions()[0].cancel_at_period_end);
}

// ─── Logins ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn demo_logins_open_their_portals() {
  let s = store();
  let admin = login::authenticate_admin(&s, "admin@oxre.com", "admin123")
    .await
    .unwrap();
  assert_eq!(admin.user.unwrap().id, "admin-1");

  for (email, artist_id) in [
    ("luna@example.com", "luna-echo"),
    ("neon@example.com", "neon-waves"),
    ("soul@example.com", "soul-fire"),
    ("rose@example.com", "wild-rose"),
  ] {
    let artist = login::authenticate_artist(&s, email, "artist123").await.unwrap();
    assert_eq!(artist.id, artist_id);
  }
}

#[tokio::test]
async fn any_other_password_fails() {
  let s = store();
  let err = login::authenticate_admin(&s, "admin@oxre.com", "Admin123")
    .await
    .unwrap_err();
  assert!(matches!(err, LoginError::InvalidCredentials));
  assert!(s.artist_credential_for("luna-echo").await.unwrap().is_some());
}

#[tokio::test(start_paused = true)]
async fn login_lookups_wait_for_configured_latency() {
  let s = store().with_login_latency(Duration::from_millis(1000));
  let started = tokio::time::Instant::now();
  login::authenticate_admin(&s, "admin@oxre.com", "admin123")
    .await
    .unwrap();
  assert!(started.elapsed() >= Duration::from_millis(1000));

  // Prefill lookups are not delayed.
  let started = tokio::time::Instant::now();
  s.artist_credential_for("wild-rose").await.unwrap();
  assert_eq!(started.elapsed(), Duration::ZERO);
}

// ─── Payments ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn onboarding_against_seed_and_simulated_payments() {
  let s = store();
  let payments = SimulatedPayments::default();
  let wild_rose = s.get_artist("wild-rose").await.unwrap().unwrap();

  let mut flow = OnboardingFlow::default();
  flow.subscribe(&wild_rose, &payments).await.unwrap();

  let mut form = PaymentForm::default();
  for (field, value) in [
    (Field::Email, "demo@example.com"),
    (Field::CardNumber, "4242424242424242"),
    (Field::ExpiryDate, "1228"),
    (Field::Cvv, "123"),
    (Field::CardholderName, "Demo User"),
    (Field::BillingAddress, "123 Main Street"),
    (Field::City, "Portland"),
    (Field::ZipCode, "97201"),
  ] {
    form.set(field, value);
  }
  let receipt = flow.submit_payment(&form, &payments).await.unwrap();
  assert_eq!(receipt.amount.to_string(), "$9.71");
  assert!(matches!(flow.state(), OnboardingState::Success { .. }));
}

#[tokio::test(start_paused = true)]
async fn discovery_subscribe_waits_then_removes_artist() {
  let s = store();
  let fan = s.current_fan_id().await.unwrap();
  let artists = s.list_artists().await.unwrap();
  let subs = s.list_subscriptions().await.unwrap();
  let unsubscribed = query::unsubscribed_artists(&artists, &subs, &fan)
    .into_iter()
    .cloned()
    .collect();

  let payments = SimulatedPayments::new(Duration::from_millis(2000), Duration::ZERO);
  let mut discover = DiscoverState::new(unsubscribed);
  let started = tokio::time::Instant::now();
  discover.subscribe("wild-rose", &payments).await.unwrap();
  assert!(started.elapsed() >= Duration::from_millis(2000));
  assert!(discover.artists().is_empty());
}

#[tokio::test]
async fn simulated_charge_is_immediate_without_latency() {
  let payments = SimulatedPayments::default();
  let artist = store().get_artist("luna-echo").await.unwrap().unwrap();
  let started = Instant::now();
  payments.confirm_subscription(&artist.snapshot()).await.unwrap();
  assert!(started.elapsed() < Duration::from_secs(1));
}
