//! [`SqliteStore`], the SQLite implementation of [`TopicStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use debate_core::{
  store::{MAX_LIST_TOPICS, TopicStore},
  topic::Topic,
};

use crate::{
  Error, Result,
  encode::{RawTopic, TOPIC_COLUMNS, TopicRow, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A topic store backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted. The
/// connection is opened once and released with [`SqliteStore::close`].
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Close the underlying connection. Other clones of this store fail from
  /// then on.
  pub async fn close(self) -> Result<()> {
    self.conn.close().await?;
    tracing::debug!("sqlite store closed");
    Ok(())
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── TopicStore impl ─────────────────────────────────────────────────────────

impl TopicStore for SqliteStore {
  type Error = Error;

  async fn insert(&self, topic: &Topic) -> Result<()> {
    let row = TopicRow::encode(topic)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO topics (
             topic_id, title, arguments_for, arguments_against,
             created_at, updated_at
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
          rusqlite::params![
            row.topic_id,
            row.title,
            row.arguments_for,
            row.arguments_against,
            row.created_at,
            row.updated_at,
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn find_all(&self, limit: usize) -> Result<Vec<Topic>> {
    let limit_val = limit.min(MAX_LIST_TOPICS) as i64;

    let raws: Vec<RawTopic> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {TOPIC_COLUMNS} FROM topics
           ORDER BY created_at DESC, rowid DESC
           LIMIT ?1"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], RawTopic::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawTopic::into_topic).collect()
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Topic>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawTopic> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {TOPIC_COLUMNS} FROM topics WHERE topic_id = ?1"),
              rusqlite::params![id_str],
              RawTopic::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawTopic::into_topic).transpose()
  }

  async fn replace(&self, topic: &Topic) -> Result<()> {
    let row = TopicRow::encode(topic)?;

    // `created_at` is immutable; everything else is overwritten.
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE topics
             SET title = ?2,
                 arguments_for = ?3,
                 arguments_against = ?4,
                 updated_at = ?5
           WHERE topic_id = ?1",
          rusqlite::params![
            row.topic_id,
            row.title,
            row.arguments_for,
            row.arguments_against,
            row.updated_at,
          ],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::TopicNotFound(topic.id));
    }
    Ok(())
  }

  async fn delete_by_id(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM topics WHERE topic_id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    Ok(deleted > 0)
  }
}
