//! Handlers for `/api/topics/:id/arguments` endpoints.
//!
//! Both handlers fetch the whole topic, mutate it in memory, and write the
//! whole document back. Concurrent mutations of the same topic are not
//! serialised; the last write wins.

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
};
use debate_core::{
  argument::{Argument, Side},
  store::TopicStore,
  topic::Topic,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, Message, error::ApiError, topics::load_topic};

// ─── Add ──────────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /api/topics/:id/arguments`.
#[derive(Debug, Deserialize)]
pub struct AddBody {
  pub point:            String,
  #[serde(default)]
  pub supporting_facts: Vec<String>,
  /// Kept as raw text so an unknown side yields a descriptive 400.
  pub side:             String,
}

/// `POST /api/topics/:id/arguments`: returns the updated topic.
///
/// The side and point are validated before the store is touched.
pub async fn add<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<String>,
  body: Result<Json<AddBody>, JsonRejection>,
) -> Result<Json<Topic>, ApiError>
where
  S: TopicStore,
{
  let Json(body) = body?;
  let side = Side::parse(&body.side)?;
  let argument = Argument::new(body.point, body.supporting_facts)?;
  let argument_id = argument.id;

  let mut topic = load_topic(state.store.as_ref(), &id).await?;
  topic.add_argument(side, argument);
  state.store.replace(&topic).await.map_err(ApiError::store)?;

  tracing::info!(
    topic_id = %topic.id,
    argument_id = %argument_id,
    side = %side,
    "added argument"
  );
  Ok(Json(topic))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `DELETE /api/topics/:id/arguments/:argument_id`
///
/// Searches both sides. An unknown argument id is not an error: the topic is
/// still restamped and written back.
pub async fn remove<S>(
  State(state): State<ApiState<S>>,
  Path((id, argument_id)): Path<(String, String)>,
) -> Result<Json<Message>, ApiError>
where
  S: TopicStore,
{
  let mut topic = load_topic(state.store.as_ref(), &id).await?;

  let removed = match Uuid::parse_str(&argument_id) {
    Ok(argument_id) => topic.remove_argument(argument_id),
    Err(_) => {
      topic.touch();
      false
    }
  };
  state.store.replace(&topic).await.map_err(ApiError::store)?;

  tracing::info!(
    topic_id = %topic.id,
    argument_id = %argument_id,
    removed,
    "removed argument"
  );
  Ok(Json(Message::new("Argument deleted successfully")))
}
