//! Arguments: the claims attached to one side of a topic.
//!
//! An argument never exists on its own. It is created as a side effect of
//! adding it to a [`Topic`](crate::topic::Topic) and lives inside that topic's
//! document until it is filtered out or the topic is deleted.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::{Error, Result, error::require_text};

// ─── Side ────────────────────────────────────────────────────────────────────

/// Which side of the debate an argument supports.
///
/// Parsing is an exact, case-sensitive match on `"for"` and `"against"`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Side {
  For,
  Against,
}

impl Side {
  /// Parse a caller-supplied side string, mapping anything else to
  /// [`Error::InvalidSide`].
  pub fn parse(raw: &str) -> Result<Self> {
    Self::from_str(raw).map_err(|_| Error::InvalidSide(raw.to_owned()))
  }
}

// ─── Argument ────────────────────────────────────────────────────────────────

/// A claim with its ordered supporting facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
  pub id:               Uuid,
  pub point:            String,
  /// Display order matters; duplicates are allowed.
  #[serde(default)]
  pub supporting_facts: Vec<String>,
  pub created_at:       DateTime<Utc>,
}

impl Argument {
  /// Build a new argument with a fresh id and creation timestamp.
  pub fn new(point: impl Into<String>, supporting_facts: Vec<String>) -> Result<Self> {
    let point = point.into();
    require_text("point", &point)?;
    Ok(Self {
      id: Uuid::new_v4(),
      point,
      supporting_facts,
      created_at: Utc::now(),
    })
  }
}
