//! `debate`: command-line client for the Debate Prep Pad API.
//!
//! # Usage
//!
//! ```
//! debate --url http://localhost:8001 create "Should remote work be the default?"
//! debate add <topic-id> --side for --point "Fewer commutes" --fact "Saves time"
//! debate generate "Should AI be used in education?" --apply <topic-id>
//! ```

mod client;
mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client::{ApiClient, ApiConfig};
use debate_core::argument::Side;
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "debate", about = "Client for the Debate Prep Pad API")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE")]
  config: Option<std::path::PathBuf>,

  /// Base URL of the server (default: http://localhost:8001).
  #[arg(long, env = "DEBATE_URL")]
  url: Option<String>,

  /// Print raw JSON instead of text.
  #[arg(long, global = true)]
  json: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Check that the API is reachable.
  Ping,
  /// List topics, newest first.
  List,
  /// Create a topic.
  Create { title: String },
  /// Show one topic with all its arguments.
  Show { id: Uuid },
  /// Delete a topic and all its arguments.
  Delete { id: Uuid },
  /// Add an argument to one side of a topic.
  Add {
    topic_id: Uuid,
    #[arg(long, value_parser = Side::parse)]
    side:     Side,
    #[arg(long)]
    point:    String,
    /// Supporting fact; repeat for several, order is kept.
    #[arg(long = "fact")]
    facts:    Vec<String>,
  },
  /// Remove an argument from a topic, whichever side it is on.
  Remove { topic_id: Uuid, argument_id: Uuid },
  /// Ask for a suggested argument set.
  Generate {
    topic: String,
    /// Add every suggestion to this topic.
    #[arg(long, value_name = "TOPIC_ID")]
    apply: Option<Uuid>,
  },
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:8001".to_string()),
  };
  tracing::debug!(base_url = %api_config.base_url, "using api");

  let client = ApiClient::new(api_config)?;
  run(&client, args.command, args.json).await
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(value)?);
  } else {
    print!("{}", text(value));
  }
  Ok(())
}

async fn run(client: &ApiClient, command: Command, json: bool) -> Result<()> {
  match command {
    Command::Ping => {
      let msg = client.ping().await?;
      emit(json, &msg, |m| format!("{}\n", m.message))?;
    }
    Command::List => {
      let topics = client.list_topics().await?;
      emit(json, &topics, |topics| {
        topics.iter().map(|t| render::topic_line(t) + "\n").collect()
      })?;
    }
    Command::Create { title } => {
      let topic = client.create_topic(&title).await?;
      emit(json, &topic, render::topic_detail)?;
    }
    Command::Show { id } => {
      let topic = client.get_topic(id).await?;
      emit(json, &topic, render::topic_detail)?;
    }
    Command::Delete { id } => {
      println!("{}", client.delete_topic(id).await?.message);
    }
    Command::Add { topic_id, side, point, facts } => {
      let topic = client.add_argument(topic_id, side, &point, &facts).await?;
      emit(json, &topic, render::topic_detail)?;
    }
    Command::Remove { topic_id, argument_id } => {
      println!("{}", client.remove_argument(topic_id, argument_id).await?.message);
    }
    Command::Generate { topic, apply } => {
      let set = client.generate(&topic).await?;
      match apply {
        None => emit(json, &set, render::generated)?,
        Some(topic_id) => {
          // Suggestions are added one at a time, pros first.
          let sides = [
            (Side::For, &set.arguments_for),
            (Side::Against, &set.arguments_against),
          ];
          let mut latest = None;
          for (side, drafts) in sides {
            for draft in drafts {
              latest = Some(
                client
                  .add_argument(topic_id, side, &draft.point, &draft.supporting_facts)
                  .await?,
              );
            }
          }
          match latest {
            Some(topic) => emit(json, &topic, render::topic_detail)?,
            None => println!("no suggestions to apply"),
          }
        }
      }
    }
  }
  Ok(())
}
