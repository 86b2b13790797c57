//! JSON REST API for debate preparation.
//!
//! Exposes an axum [`Router`] backed by any [`debate_core::store::TopicStore`].
//! CORS, tracing, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! Routes already carry the `/api` prefix, so the router is merged at the
//! root:
//!
//! ```rust,ignore
//! Router::new().merge(debate_api::api_router(ApiState::new(store)))
//! ```

pub mod arguments;
pub mod error;
pub mod generate;
pub mod topics;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use debate_core::store::{MAX_LIST_TOPICS, TopicStore};
use serde::{Deserialize, Serialize};

pub use error::ApiError;

// ─── State ────────────────────────────────────────────────────────────────────

/// Shared state threaded through all API handlers.
pub struct ApiState<S> {
  pub store:      Arc<S>,
  /// Maximum number of topics returned by `GET /api/topics`.
  pub list_limit: usize,
}

// Manual impl: cloning shares the store, so `S` itself need not be `Clone`.
impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), list_limit: self.list_limit }
  }
}

impl<S> ApiState<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store, list_limit: MAX_LIST_TOPICS }
  }

  /// Override the listing cap; values above [`MAX_LIST_TOPICS`] are clamped.
  pub fn with_list_limit(mut self, limit: usize) -> Self {
    self.list_limit = limit.min(MAX_LIST_TOPICS);
    self
  }
}

/// Plain confirmation body: `{"message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  pub message: String,
}

impl Message {
  pub fn new(message: impl Into<String>) -> Self {
    Self { message: message.into() }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be merged into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: TopicStore + 'static,
{
  Router::new()
    .route("/api", get(topics::root))
    .route("/api/", get(topics::root))
    // Topics
    .route("/api/topics", get(topics::list::<S>).post(topics::create::<S>))
    .route(
      "/api/topics/{id}",
      get(topics::get_one::<S>).delete(topics::delete_one::<S>),
    )
    // Arguments
    .route("/api/topics/{id}/arguments", post(arguments::add::<S>))
    .route(
      "/api/topics/{id}/arguments/{argument_id}",
      delete(arguments::remove::<S>),
    )
    // Generation
    .route("/api/generate-arguments", post(generate::handler))
    .with_state(state)
}

#[cfg(test)]
mod tests;
