//! Handler for `POST /api/generate-arguments`.
//!
//! A stateless placeholder: it always returns the same canned argument set and
//! only echoes the requested topic text. A real generator must keep the
//! [`GeneratedArguments`] response shape.

use axum::{Json, extract::rejection::JsonRejection};
use debate_core::generate::{ArgumentDraft, GeneratedArguments};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
  pub topic: String,
}

/// The canned suggestion set returned for every topic.
pub fn mock_arguments(topic: impl Into<String>) -> GeneratedArguments {
  GeneratedArguments {
    topic:             topic.into(),
    arguments_for:     vec![
      ArgumentDraft::new("Personalized learning experiences", &[
        "AI can adapt to individual learning styles",
        "Provides customized pace of learning",
      ]),
      ArgumentDraft::new("24/7 availability for student support", &[
        "AI tutors don't need breaks",
        "Instant feedback and help",
      ]),
      ArgumentDraft::new("Enhanced accessibility for special needs", &[
        "Text-to-speech capabilities",
        "Visual recognition for learning disabilities",
      ]),
    ],
    arguments_against: vec![
      ArgumentDraft::new("Lack of human emotional connection", &[
        "Students need empathy and understanding",
        "AI cannot provide emotional support",
      ]),
      ArgumentDraft::new("Over-dependence on technology", &[
        "Reduces critical thinking skills",
        "Creates technology addiction",
      ]),
      ArgumentDraft::new("Privacy and data security concerns", &[
        "Student data collection issues",
        "Potential misuse of personal information",
      ]),
    ],
  }
}

/// `POST /api/generate-arguments`, body: `{"topic":"..."}`
pub async fn handler(
  body: Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<GeneratedArguments>, ApiError> {
  let Json(body) = body?;
  tracing::debug!(topic = %body.topic, "generating canned arguments");
  Ok(Json(mock_arguments(body.topic)))
}
