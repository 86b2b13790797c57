//! HTTP host for the debate API.
//!
//! Layers CORS and request tracing over [`debate_api::api_router`] and owns
//! the runtime configuration.

use std::{path::PathBuf, sync::Arc};

use axum::Router;
use debate_api::{ApiState, api_router};
use debate_core::store::{MAX_LIST_TOPICS, TopicStore};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `DEBATE_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  #[serde(default = "default_store_path")]
  pub store_path:      PathBuf,
  /// Cap on `GET /api/topics`; clamped to [`MAX_LIST_TOPICS`].
  #[serde(default = "default_list_limit")]
  pub list_limit:      usize,
  /// Allow any origin, method, and header.
  #[serde(default = "default_permissive_cors")]
  pub permissive_cors: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 8001 }

fn default_store_path() -> PathBuf { PathBuf::from("debate.sqlite3") }

fn default_list_limit() -> usize { MAX_LIST_TOPICS }

fn default_permissive_cors() -> bool { true }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:            default_host(),
      port:            default_port(),
      store_path:      default_store_path(),
      list_limit:      default_list_limit(),
      permissive_cors: default_permissive_cors(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router for `store`.
pub fn app<S>(store: Arc<S>, config: &ServerConfig) -> Router
where
  S: TopicStore + 'static,
{
  let state = ApiState::new(store).with_list_limit(config.list_limit);
  let router = api_router(state).layer(TraceLayer::new_for_http());

  if config.permissive_cors {
    router.layer(CorsLayer::permissive())
  } else {
    router
  }
}
