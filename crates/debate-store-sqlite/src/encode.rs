//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with a fixed nanosecond width and
//! a `Z` suffix, so lexical order in SQL matches chronological order. Argument
//! lists are stored as compact JSON. UUIDs are hyphenated lowercase strings.

use chrono::{DateTime, SecondsFormat, Utc};
use debate_core::{argument::Argument, topic::Topic};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Arguments ───────────────────────────────────────────────────────────────

pub fn encode_arguments(args: &[Argument]) -> Result<String> {
  Ok(serde_json::to_string(args)?)
}

pub fn decode_arguments(s: &str) -> Result<Vec<Argument>> {
  Ok(serde_json::from_str(s)?)
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every `SELECT` that produces a [`RawTopic`].
pub const TOPIC_COLUMNS: &str =
  "topic_id, title, arguments_for, arguments_against, created_at, updated_at";

/// Raw strings read directly from a `topics` row.
pub struct RawTopic {
  pub topic_id:          String,
  pub title:             String,
  pub arguments_for:     String,
  pub arguments_against: String,
  pub created_at:        String,
  pub updated_at:        String,
}

impl RawTopic {
  /// Read a row selected with [`TOPIC_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      topic_id:          row.get(0)?,
      title:             row.get(1)?,
      arguments_for:     row.get(2)?,
      arguments_against: row.get(3)?,
      created_at:        row.get(4)?,
      updated_at:        row.get(5)?,
    })
  }

  pub fn into_topic(self) -> Result<Topic> {
    Ok(Topic {
      id:                decode_uuid(&self.topic_id)?,
      title:             self.title,
      arguments_for:     decode_arguments(&self.arguments_for)?,
      arguments_against: decode_arguments(&self.arguments_against)?,
      created_at:        decode_dt(&self.created_at)?,
      updated_at:        decode_dt(&self.updated_at)?,
    })
  }
}

/// Owned column values for writing a whole topic document.
pub struct TopicRow {
  pub topic_id:          String,
  pub title:             String,
  pub arguments_for:     String,
  pub arguments_against: String,
  pub created_at:        String,
  pub updated_at:        String,
}

impl TopicRow {
  pub fn encode(topic: &Topic) -> Result<Self> {
    Ok(Self {
      topic_id:          encode_uuid(topic.id),
      title:             topic.title.clone(),
      arguments_for:     encode_arguments(&topic.arguments_for)?,
      arguments_against: encode_arguments(&topic.arguments_against)?,
      created_at:        encode_dt(topic.created_at),
      updated_at:        encode_dt(topic.updated_at),
    })
  }
}
