//! Router tests driven through `tower::ServiceExt::oneshot` against an
//! in-memory SQLite store.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
  response::Response,
};
use chrono::{DateTime, Utc};
use debate_core::{store::TopicStore, topic::Topic};
use debate_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;
use uuid::Uuid;

use super::*;

async fn make_state() -> ApiState<SqliteStore> {
  let store = SqliteStore::open_in_memory().await.unwrap();
  ApiState::new(Arc::new(store))
}

async fn send<S: TopicStore + 'static>(
  state: &ApiState<S>,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> Response {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(v) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(v.to_string())
    }
    None => Body::empty(),
  };
  api_router(state.clone())
    .oneshot(builder.body(body).unwrap())
    .await
    .unwrap()
}

async fn json_body(resp: Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn timestamp(v: &Value) -> DateTime<Utc> {
  v.as_str().unwrap().parse().unwrap()
}

async fn create_topic(state: &ApiState<SqliteStore>, title: &str) -> Value {
  let resp = send(state, "POST", "/api/topics", Some(json!({ "title": title }))).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  json_body(resp).await
}

async fn get_topic(state: &ApiState<SqliteStore>, id: &str) -> Response {
  send(state, "GET", &format!("/api/topics/{id}"), None).await
}

// ── Root ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn root_returns_banner() {
  let state = make_state().await;
  for uri in ["/api/", "/api"] {
    let resp = send(&state, "GET", uri, None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["message"], "Debate Prep Pad API");
  }
}

// ── Topics ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_topic_returns_empty_topic() {
  let state = make_state().await;
  let topic = create_topic(&state, "X").await;

  assert!(!topic["id"].as_str().unwrap().is_empty());
  assert_eq!(topic["title"], "X");
  assert_eq!(topic["arguments_for"], json!([]));
  assert_eq!(topic["arguments_against"], json!([]));
  assert_eq!(topic["created_at"], topic["updated_at"]);
}

#[tokio::test]
async fn create_topic_rejects_empty_title() {
  let state = make_state().await;
  let resp = send(&state, "POST", "/api/topics", Some(json!({ "title": "  " }))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert!(json_body(resp).await["detail"].is_string());
}

#[tokio::test]
async fn create_topic_rejects_malformed_body() {
  let state = make_state().await;
  let resp = send(&state, "POST", "/api/topics", Some(json!({ "name": "X" }))).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_topics_newest_first() {
  let state = make_state().await;
  let mut ids = Vec::new();
  for i in 0..3 {
    let t = create_topic(&state, &format!("topic {i}")).await;
    ids.push(t["id"].clone());
  }

  let resp = send(&state, "GET", "/api/topics", None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let listed = json_body(resp).await;
  let listed: Vec<Value> =
    listed.as_array().unwrap().iter().map(|t| t["id"].clone()).collect();
  ids.reverse();
  assert_eq!(listed, ids);
}

#[tokio::test]
async fn list_topics_honours_limit() {
  let state = make_state().await.with_list_limit(2);
  for i in 0..3 {
    create_topic(&state, &format!("topic {i}")).await;
  }
  let resp = send(&state, "GET", "/api/topics", None).await;
  assert_eq!(json_body(resp).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_missing_topic_returns_404_detail() {
  let state = make_state().await;
  for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_owned()] {
    let resp = get_topic(&state, &id).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await, json!({ "detail": "Topic not found" }));
  }
}

#[tokio::test]
async fn delete_topic_then_get_is_404() {
  let state = make_state().await;
  let topic = create_topic(&state, "X").await;
  let id = topic["id"].as_str().unwrap();

  let resp = send(&state, "DELETE", &format!("/api/topics/{id}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(json_body(resp).await["message"], "Topic deleted successfully");

  assert_eq!(get_topic(&state, id).await.status(), StatusCode::NOT_FOUND);

  let again = send(&state, "DELETE", &format!("/api/topics/{id}"), None).await;
  assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

// ── Arguments ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_remove_argument_scenario() {
  let state = make_state().await;
  let topic = create_topic(&state, "X").await;
  let id = topic["id"].as_str().unwrap().to_owned();
  let uri = format!("/api/topics/{id}/arguments");

  // Add "for".
  let resp = send(
    &state,
    "POST",
    &uri,
    Some(json!({ "point": "P1", "supporting_facts": ["F1"], "side": "for" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated = json_body(resp).await;
  assert_eq!(updated["arguments_for"].as_array().unwrap().len(), 1);
  assert_eq!(updated["arguments_for"][0]["point"], "P1");
  assert_eq!(updated["arguments_for"][0]["supporting_facts"], json!(["F1"]));
  assert_eq!(updated["arguments_against"], json!([]));

  // Invalid side leaves the topic untouched.
  let before = json_body(get_topic(&state, &id).await).await;
  let resp = send(
    &state,
    "POST",
    &uri,
    Some(json!({ "point": "P2", "supporting_facts": [], "side": "sideways" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    json_body(resp).await["detail"],
    "Side must be 'for' or 'against'"
  );
  assert_eq!(json_body(get_topic(&state, &id).await).await, before);

  // Removing an unknown argument id is a silent no-op.
  let resp = send(
    &state,
    "DELETE",
    &format!("{uri}/{}", Uuid::new_v4()),
    None,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let after = json_body(get_topic(&state, &id).await).await;
  assert_eq!(after["arguments_for"].as_array().unwrap().len(), 1);
  assert_eq!(after["arguments_against"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn side_is_case_sensitive() {
  let state = make_state().await;
  let topic = create_topic(&state, "X").await;
  let id = topic["id"].as_str().unwrap();

  let resp = send(
    &state,
    "POST",
    &format!("/api/topics/{id}/arguments"),
    Some(json!({ "point": "P", "side": "For" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn add_against_then_remove_by_id() {
  let state = make_state().await;
  let topic = create_topic(&state, "X").await;
  let id = topic["id"].as_str().unwrap();
  let uri = format!("/api/topics/{id}/arguments");

  let updated = json_body(
    send(
      &state,
      "POST",
      &uri,
      Some(json!({ "point": "C1", "supporting_facts": ["a", "a"], "side": "against" })),
    )
    .await,
  )
  .await;
  assert_eq!(updated["arguments_for"], json!([]));
  let arg_id = updated["arguments_against"][0]["id"].as_str().unwrap();
  assert!(timestamp(&updated["updated_at"]) >= timestamp(&topic["updated_at"]));

  let resp = send(&state, "DELETE", &format!("{uri}/{arg_id}"), None).await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(json_body(resp).await["message"], "Argument deleted successfully");

  let after = json_body(get_topic(&state, id).await).await;
  assert_eq!(after["arguments_against"], json!([]));
}

#[tokio::test]
async fn argument_routes_404_for_missing_topic() {
  let state = make_state().await;
  let missing = Uuid::new_v4();

  let resp = send(
    &state,
    "POST",
    &format!("/api/topics/{missing}/arguments"),
    Some(json!({ "point": "P", "side": "for" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = send(
    &state,
    "DELETE",
    &format!("/api/topics/{missing}/arguments/{}", Uuid::new_v4()),
    None,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ── Generation ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn generate_echoes_topic_with_canned_set() {
  let state = make_state().await;
  let resp = send(
    &state,
    "POST",
    "/api/generate-arguments",
    Some(json!({ "topic": "Should AI be used in education?" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = json_body(resp).await;
  assert_eq!(body["topic"], "Should AI be used in education?");
  assert_eq!(body["arguments_for"].as_array().unwrap().len(), 3);
  assert_eq!(body["arguments_against"].as_array().unwrap().len(), 3);
  assert_eq!(body["arguments_for"][0]["point"], "Personalized learning experiences");
  assert!(body["arguments_against"][2]["supporting_facts"].is_array());
}

#[tokio::test]
async fn generate_ignores_topic_content() {
  let a = generate::mock_arguments("a");
  let b = generate::mock_arguments("b");
  assert_eq!(a.arguments_for, b.arguments_for);
  assert_eq!(a.arguments_against, b.arguments_against);
  assert_ne!(a.topic, b.topic);
}

// ── Store failures ──────────────────────────────────────────────────────────

/// Deletes each topic right after handing it out, so the following `replace`
/// finds nothing to overwrite.
struct VanishingStore(SqliteStore);

impl TopicStore for VanishingStore {
  type Error = debate_store_sqlite::Error;

  async fn insert(&self, topic: &Topic) -> Result<(), Self::Error> {
    self.0.insert(topic).await
  }

  async fn find_all(&self, limit: usize) -> Result<Vec<Topic>, Self::Error> {
    self.0.find_all(limit).await
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Topic>, Self::Error> {
    let topic = self.0.find_by_id(id).await?;
    self.0.delete_by_id(id).await?;
    Ok(topic)
  }

  async fn replace(&self, topic: &Topic) -> Result<(), Self::Error> {
    self.0.replace(topic).await
  }

  async fn delete_by_id(&self, id: Uuid) -> Result<bool, Self::Error> {
    self.0.delete_by_id(id).await
  }
}

#[tokio::test]
async fn closed_store_returns_generic_500() {
  let store = SqliteStore::open_in_memory().await.unwrap();
  let state = ApiState::new(Arc::new(store.clone()));
  store.close().await.unwrap();

  let resp = send(&state, "GET", "/api/topics", None).await;
  assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(
    json_body(resp).await,
    json!({ "detail": "Internal Server Error" })
  );
}

#[tokio::test]
async fn topic_vanishing_before_write_back_is_404() {
  let inner = SqliteStore::open_in_memory().await.unwrap();
  let topic = Topic::new("X").unwrap();
  inner.insert(&topic).await.unwrap();
  let other = Topic::new("Y").unwrap();
  inner.insert(&other).await.unwrap();

  let state = ApiState::new(Arc::new(VanishingStore(inner)));

  let resp = send(
    &state,
    "POST",
    &format!("/api/topics/{}/arguments", topic.id),
    Some(json!({ "point": "P1", "side": "for" })),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(json_body(resp).await, json!({ "detail": "Topic not found" }));

  let resp = send(
    &state,
    "DELETE",
    &format!("/api/topics/{}/arguments/{}", other.id, Uuid::new_v4()),
    None,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn store_not_found_maps_to_topic_not_found() {
  let err = ApiError::store(debate_store_sqlite::Error::TopicNotFound(Uuid::new_v4()));
  assert!(matches!(err, ApiError::NotFound(ref m) if m == error::TOPIC_NOT_FOUND));

  let err = ApiError::store(debate_store_sqlite::Error::DateParse("bad".into()));
  assert!(matches!(err, ApiError::Store(_)));
}
