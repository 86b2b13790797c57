//! Async HTTP client wrapping the debate JSON API.

use anyhow::{Context, Result, anyhow};
use debate_core::{argument::Side, generate::GeneratedArguments, topic::Topic};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;
use std::time::Duration;
use uuid::Uuid;

/// Connection settings for the debate API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// `{"message": "..."}` confirmation body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
  pub message: String,
}

/// Async HTTP client for the debate JSON REST API.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// Decode a success body, or turn the server's `detail` into an error.
  async fn decode<T: DeserializeOwned>(resp: Response, what: &str) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
      return resp.json().await.with_context(|| format!("deserialising {what}"));
    }
    let detail = resp
      .json::<serde_json::Value>()
      .await
      .ok()
      .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_owned))
      .unwrap_or_default();
    Err(anyhow!("{what} → {status}: {detail}"))
  }

  /// `GET /api/`
  pub async fn ping(&self) -> Result<Message> {
    let resp = self
      .client
      .get(self.url("/"))
      .send()
      .await
      .context("GET / failed")?;
    Self::decode(resp, "GET /").await
  }

  // ── Topics ────────────────────────────────────────────────────────────────

  /// `GET /api/topics`
  pub async fn list_topics(&self) -> Result<Vec<Topic>> {
    let resp = self
      .client
      .get(self.url("/topics"))
      .send()
      .await
      .context("GET /topics failed")?;
    Self::decode(resp, "GET /topics").await
  }

  /// `POST /api/topics`
  pub async fn create_topic(&self, title: &str) -> Result<Topic> {
    let resp = self
      .client
      .post(self.url("/topics"))
      .json(&json!({ "title": title }))
      .send()
      .await
      .context("POST /topics failed")?;
    Self::decode(resp, "POST /topics").await
  }

  /// `GET /api/topics/:id`
  pub async fn get_topic(&self, id: Uuid) -> Result<Topic> {
    let resp = self
      .client
      .get(self.url(&format!("/topics/{id}")))
      .send()
      .await
      .context("GET /topics/:id failed")?;
    Self::decode(resp, "GET /topics/:id").await
  }

  /// `DELETE /api/topics/:id`
  pub async fn delete_topic(&self, id: Uuid) -> Result<Message> {
    let resp = self
      .client
      .delete(self.url(&format!("/topics/{id}")))
      .send()
      .await
      .context("DELETE /topics/:id failed")?;
    Self::decode(resp, "DELETE /topics/:id").await
  }

  // ── Arguments ─────────────────────────────────────────────────────────────

  /// `POST /api/topics/:id/arguments`
  pub async fn add_argument(
    &self,
    topic_id: Uuid,
    side: Side,
    point: &str,
    supporting_facts: &[String],
  ) -> Result<Topic> {
    let side: &str = side.as_ref();
    let resp = self
      .client
      .post(self.url(&format!("/topics/{topic_id}/arguments")))
      .json(&json!({
        "point": point,
        "supporting_facts": supporting_facts,
        "side": side,
      }))
      .send()
      .await
      .context("POST /topics/:id/arguments failed")?;
    Self::decode(resp, "POST /topics/:id/arguments").await
  }

  /// `DELETE /api/topics/:id/arguments/:argument_id`
  pub async fn remove_argument(
    &self,
    topic_id: Uuid,
    argument_id: Uuid,
  ) -> Result<Message> {
    let resp = self
      .client
      .delete(self.url(&format!("/topics/{topic_id}/arguments/{argument_id}")))
      .send()
      .await
      .context("DELETE /topics/:id/arguments/:argument_id failed")?;
    Self::decode(resp, "DELETE /topics/:id/arguments/:argument_id").await
  }

  // ── Generation ────────────────────────────────────────────────────────────

  /// `POST /api/generate-arguments`
  pub async fn generate(&self, topic: &str) -> Result<GeneratedArguments> {
    let resp = self
      .client
      .post(self.url("/generate-arguments"))
      .json(&json!({ "topic": topic }))
      .send()
      .await
      .context("POST /generate-arguments failed")?;
    Self::decode(resp, "POST /generate-arguments").await
  }
}
