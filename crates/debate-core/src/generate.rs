//! Response shape for argument generation.
//!
//! Drafts carry no id or timestamp; they become [`Argument`]s only when a
//! client adds them to a topic.
//!
//! [`Argument`]: crate::argument::Argument

use serde::{Deserialize, Serialize};

/// A suggested argument that has not been attached to any topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDraft {
  pub point:            String,
  #[serde(default)]
  pub supporting_facts: Vec<String>,
}

impl ArgumentDraft {
  pub fn new(point: &str, supporting_facts: &[&str]) -> Self {
    Self {
      point:            point.to_owned(),
      supporting_facts: supporting_facts.iter().map(|f| (*f).to_owned()).collect(),
    }
  }
}

/// A full suggested argument set for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArguments {
  /// The topic text, echoed back from the request.
  pub topic:             String,
  pub arguments_for:     Vec<ArgumentDraft>,
  pub arguments_against: Vec<ArgumentDraft>,
}
