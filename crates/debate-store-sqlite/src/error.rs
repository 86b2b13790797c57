//! Error type for `debate-store-sqlite`.

use debate_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("uuid parse error: {0}")]
  Uuid(#[from] uuid::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A replace targeted a topic that does not exist.
  #[error("topic not found: {0}")]
  TopicNotFound(uuid::Uuid),
}

impl StoreError for Error {
  fn is_not_found(&self) -> bool { matches!(self, Self::TopicNotFound(_)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
