//! Topic, the aggregate that owns both argument lists.
//!
//! A topic document is the unit of storage and mutation. Arguments are only
//! ever changed by mutating the topic in memory and writing the whole document
//! back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Result,
  argument::{Argument, Side},
  error::require_text,
};

/// A debate prompt with its pro and con arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
  pub id:                Uuid,
  pub title:             String,
  /// Insertion order is preserved.
  #[serde(default)]
  pub arguments_for:     Vec<Argument>,
  #[serde(default)]
  pub arguments_against: Vec<Argument>,
  pub created_at:        DateTime<Utc>,
  /// Restamped on every argument mutation; never earlier than `created_at`.
  pub updated_at:        DateTime<Utc>,
}

impl Topic {
  /// Build a new, empty topic. `created_at` and `updated_at` are identical.
  pub fn new(title: impl Into<String>) -> Result<Self> {
    let title = title.into();
    require_text("title", &title)?;
    let now = Utc::now();
    Ok(Self {
      id: Uuid::new_v4(),
      title,
      arguments_for: Vec::new(),
      arguments_against: Vec::new(),
      created_at: now,
      updated_at: now,
    })
  }

  pub fn arguments(&self, side: Side) -> &[Argument] {
    match side {
      Side::For => &self.arguments_for,
      Side::Against => &self.arguments_against,
    }
  }

  /// Append `argument` to the end of `side`'s list.
  pub fn add_argument(&mut self, side: Side, argument: Argument) {
    match side {
      Side::For => self.arguments_for.push(argument),
      Side::Against => self.arguments_against.push(argument),
    }
    self.touch();
  }

  /// Filter `argument_id` out of both lists.
  ///
  /// The timestamp is restamped even when nothing matched. Returns whether an
  /// argument was actually removed.
  pub fn remove_argument(&mut self, argument_id: Uuid) -> bool {
    let before = self.arguments_for.len() + self.arguments_against.len();
    self.arguments_for.retain(|a| a.id != argument_id);
    self.arguments_against.retain(|a| a.id != argument_id);
    let after = self.arguments_for.len() + self.arguments_against.len();
    self.touch();
    after < before
  }

  /// Stamp `updated_at` with the current time without ever moving it
  /// backwards.
  pub fn touch(&mut self) {
    self.updated_at = Utc::now().max(self.updated_at);
  }
}
