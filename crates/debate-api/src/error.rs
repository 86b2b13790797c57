//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use debate_core::store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Detail message for any request that references a missing topic.
pub const TOPIC_NOT_FOUND: &str = "Topic not found";

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn topic_not_found() -> Self { Self::NotFound(TOPIC_NOT_FOUND.to_owned()) }

  /// Map a backend error, keeping "document vanished" distinct from an
  /// unavailable store.
  pub fn store<E: StoreError>(e: E) -> Self {
    if e.is_not_found() {
      Self::topic_not_found()
    } else {
      Self::Store(Box::new(e))
    }
  }
}

impl From<debate_core::Error> for ApiError {
  fn from(e: debate_core::Error) -> Self { Self::BadRequest(e.to_string()) }
}

impl From<JsonRejection> for ApiError {
  fn from(r: JsonRejection) -> Self { Self::BadRequest(r.body_text()) }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, detail) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => {
        tracing::warn!(detail = %m, "rejected request");
        (StatusCode::BAD_REQUEST, m.clone())
      }
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          "Internal Server Error".to_owned(),
        )
      }
    };
    (status, Json(json!({ "detail": detail }))).into_response()
  }
}
