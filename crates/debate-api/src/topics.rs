//! Handlers for `/api/topics` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/api/` | Service banner |
//! | `GET`    | `/api/topics` | Newest first, capped at the configured limit |
//! | `POST`   | `/api/topics` | Body: `{"title":"..."}`; returns 201 + topic |
//! | `GET`    | `/api/topics/:id` | 404 if not found |
//! | `DELETE` | `/api/topics/:id` | Cascades to all embedded arguments |

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use debate_core::{store::TopicStore, topic::Topic};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, Message, error::ApiError};

// ─── Shared helpers ───────────────────────────────────────────────────────────

/// Parse a topic id from the path. Ids that are not UUIDs cannot name any
/// stored topic, so they are reported as not found.
pub(crate) fn parse_topic_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::topic_not_found())
}

/// Fetch a topic or fail with [`ApiError::NotFound`].
pub(crate) async fn load_topic<S: TopicStore>(
  store: &S,
  raw_id: &str,
) -> Result<Topic, ApiError> {
  let id = parse_topic_id(raw_id)?;
  store
    .find_by_id(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::topic_not_found)
}

// ─── Root ─────────────────────────────────────────────────────────────────────

/// `GET /api/`
pub async fn root() -> Json<Message> { Json(Message::new("Debate Prep Pad API")) }

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /api/topics`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Topic>>, ApiError>
where
  S: TopicStore,
{
  let topics = state
    .store
    .find_all(state.list_limit)
    .await
    .map_err(ApiError::store)?;
  tracing::debug!(count = topics.len(), "listed topics");
  Ok(Json(topics))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub title: String,
}

/// `POST /api/topics`, body: `{"title":"..."}`
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  body: Result<Json<CreateBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TopicStore,
{
  let Json(body) = body?;
  let topic = Topic::new(body.title)?;
  state.store.insert(&topic).await.map_err(ApiError::store)?;
  tracing::info!(topic_id = %topic.id, title = %topic.title, "created topic");
  Ok((StatusCode::CREATED, Json(topic)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /api/topics/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Topic>, ApiError>
where
  S: TopicStore,
{
  let topic = load_topic(state.store.as_ref(), &id).await?;
  Ok(Json(topic))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /api/topics/:id`
pub async fn delete_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Message>, ApiError>
where
  S: TopicStore,
{
  let id = parse_topic_id(&id)?;
  let deleted = state.store.delete_by_id(id).await.map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::topic_not_found());
  }
  tracing::info!(topic_id = %id, "deleted topic");
  Ok(Json(Message::new("Topic deleted successfully")))
}
