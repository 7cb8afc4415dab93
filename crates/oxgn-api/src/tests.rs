//! Router tests against the seeded in-memory store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use oxgn_store_memory::MemoryStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

fn app() -> axum::Router {
  api_router(Arc::new(MemoryStore::seeded().expect("seed dataset")))
}

async fn get(uri: &str) -> Response {
  let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
  app().oneshot(req).await.unwrap()
}

async fn post_json(uri: &str, body: Value) -> Response {
  let req = Request::builder()
    .method("POST")
    .uri(uri)
    .header(header::CONTENT_TYPE, "application/json")
    .body(Body::from(body.to_string()))
    .unwrap();
  app().oneshot(req).await.unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn ids(value: &Value) -> Vec<&str> {
  value
    .as_array()
    .unwrap()
    .iter()
    .map(|v| v["id"].as_str().unwrap())
    .collect()
}

// ── Service endpoints ─────────────────────────────────────────────────────────

#[tokio::test]
async fn root_says_hello() {
  let resp = get("/").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  assert_eq!(&bytes[..], b"Hello World!");
}

#[tokio::test]
async fn health_reports_ok() {
  let resp = get("/health").await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = json_body(resp).await;
  assert_eq!(body["status"], "ok");
  assert_eq!(body["service"], "OXGN API");
  assert!(body["uptime"].as_f64().unwrap() >= 0.0);
  let stamp = body["timestamp"].as_str().unwrap();
  assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok(), "timestamp: {stamp}");
}

#[tokio::test]
async fn api_info_lists_endpoint_groups() {
  let body = json_body(get("/api").await).await;
  assert_eq!(body["name"], "OXGN Artist-Fan Platform API");
  assert_eq!(body["endpoints"]["auth"], "/auth/*");
  assert_eq!(body["endpoints"]["posts"], "/posts/*");
}

// ── Users and invites ─────────────────────────────────────────────────────────

#[tokio::test]
async fn users_filter_by_role_and_search() {
  let fans = json_body(get("/users?role=fan").await).await;
  assert_eq!(ids(&fans), ["fan-1", "fan-2", "fan-3"]);

  let all = json_body(get("/users?role=all&search=EXAMPLE.COM").await).await;
  assert_eq!(all.as_array().unwrap().len(), 7);

  let resp = get("/users?role=superuser").await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(json_body(resp).await["error"], "unknown role: superuser");
}

#[tokio::test]
async fn invites_carry_counts() {
  let body = json_body(get("/invites?status=pending").await).await;
  assert_eq!(body["counts"], json!({ "pending": 1, "accepted": 1, "expired": 0 }));
  assert_eq!(ids(&body["invites"]), ["invite-1"]);
}

// ── Artists ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn artist_lists_for_current_fan() {
  let subscribed = json_body(get("/artists/subscribed").await).await;
  assert_eq!(ids(&subscribed), ["luna-echo", "neon-waves", "soul-fire"]);

  let unsubscribed = json_body(get("/artists/unsubscribed").await).await;
  assert_eq!(ids(&unsubscribed), ["wild-rose"]);

  let searched = json_body(get("/artists?search=youth").await).await;
  assert_eq!(ids(&searched), ["soul-fire"]);
}

#[tokio::test]
async fn single_artist_and_stats() {
  let artist = json_body(get("/artists/wild-rose").await).await;
  assert_eq!(artist["is_verified"], false);
  assert_eq!(artist["subscription_price"], 8.99);

  let stats = json_body(get("/artists/neon-waves/stats").await).await;
  assert_eq!(stats["total_posts"], 2);
  assert_eq!(stats["total_likes"], 354);
  assert_eq!(stats["active_subscribers"], 1);

  let posts = json_body(get("/artists/soul-fire/posts").await).await;
  assert_eq!(ids(&posts), ["post-4", "post-6"]);

  let sent = json_body(get("/artists/luna-echo/messages").await).await;
  assert_eq!(ids(&sent), ["msg-1"]);
}

#[tokio::test]
async fn unknown_artist_is_404() {
  for uri in ["/artists/nobody", "/artists/nobody/stats"] {
    let resp = get(uri).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
    assert_eq!(json_body(resp).await["error"], "artist nobody not found");
  }
}

// ── Content ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn feed_is_newest_first_and_filterable() {
  let feed = json_body(get("/posts").await).await;
  assert_eq!(
    ids(&feed),
    ["post-1", "post-2", "post-3", "post-4", "post-5", "post-6"]
  );

  let luna = json_body(get("/posts?artist_id=luna-echo").await).await;
  assert_eq!(ids(&luna), ["post-1", "post-3"]);
}

#[tokio::test]
async fn comments_oldest_first() {
  let thread = json_body(get("/posts/post-1/comments").await).await;
  assert_eq!(ids(&thread), ["comment-1", "comment-2"]);

  let empty = json_body(get("/posts/post-2/comments").await).await;
  assert!(empty.as_array().unwrap().is_empty());

  assert_eq!(get("/posts/post-99/comments").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn inbox_and_unread() {
  let inbox = json_body(get("/messages").await).await;
  assert_eq!(inbox.as_array().unwrap().len(), 3);

  let unread = json_body(get("/messages/unread").await).await;
  assert_eq!(ids(&unread), ["msg-2"]);
}

#[tokio::test]
async fn platform_stats() {
  let stats = json_body(get("/stats").await).await;
  assert_eq!(stats["total_users"], 8);
  assert_eq!(stats["active_subscriptions"], 3);
  assert_eq!(stats["monthly_revenue"], 26.97);
  assert_eq!(stats["conversion_percent"], 100);
}

// ── Logins ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn admin_login_accepts_demo_credentials() {
  let resp = post_json(
    "/auth/admin/login",
    json!({ "email": "admin@oxre.com", "password": "admin123" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = json_body(resp).await;
  assert_eq!(body["email"], "admin@oxre.com");
  assert_eq!(body["user"]["last_name"], "Administrator");
}

#[tokio::test]
async fn bad_login_is_401_with_generic_message() {
  let resp = post_json(
    "/auth/admin/login",
    json!({ "email": "admin@oxre.com", "password": "wrong" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(json_body(resp).await["error"], "Invalid email or password");

  let resp = post_json(
    "/auth/artist/login",
    json!({ "email": "ghost@example.com", "password": "artist123" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn artist_login_returns_profile() {
  let resp = post_json(
    "/auth/artist/login",
    json!({ "email": "rose@example.com", "password": "artist123" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(json_body(resp).await["id"], "wild-rose");
}
