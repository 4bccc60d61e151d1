//! newsgraph server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), connects to
//! Neo4j, provisions the indexes, and serves the fact-graph API over HTTP.
//! Every setting can also come from the environment with a `NEWSGRAPH_`
//! prefix, e.g. `NEWSGRAPH_NEO4J_PASSWORD`.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use newsgraph_core::page::PageDefaults;
use newsgraph_store_neo4j::{provision::provision_indexes, Neo4jStore, StoreLimits};
use serde::Deserialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "defaults::host")]
  pub host:           String,
  #[serde(default = "defaults::port")]
  pub port:           u16,
  #[serde(default = "defaults::neo4j_uri")]
  pub neo4j_uri:      String,
  #[serde(default = "defaults::neo4j_user")]
  pub neo4j_user:     String,
  #[serde(default = "defaults::neo4j_password")]
  pub neo4j_password: String,
  /// Pagination window used when a request has no usable `start`/`limit`.
  #[serde(default)]
  pub start_pagin:    i64,
  #[serde(default = "defaults::limit_pagin")]
  pub limit_pagin:    i64,
  /// Cap on News-id sets in set-scoped reads.
  #[serde(default = "defaults::limit_news")]
  pub limit_news:     usize,
}

mod defaults {
  pub fn host() -> String {
    "127.0.0.1".to_owned()
  }
  pub fn port() -> u16 {
    5000
  }
  pub fn neo4j_uri() -> String {
    "127.0.0.1:7687".to_owned()
  }
  pub fn neo4j_user() -> String {
    "neo4j".to_owned()
  }
  pub fn neo4j_password() -> String {
    "neo4j".to_owned()
  }
  pub fn limit_pagin() -> i64 {
    1000
  }
  pub fn limit_news() -> usize {
    1000
  }
}

#[derive(Parser)]
#[command(author, version, about = "News fact-graph server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("NEWSGRAPH"))
    .build()
    .context("failed to read config file")?;
  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  let graph_cfg = neo4rs::ConfigBuilder::default()
    .uri(&server_cfg.neo4j_uri)
    .user(&server_cfg.neo4j_user)
    .password(&server_cfg.neo4j_password)
    .build()
    .context("invalid neo4j configuration")?;
  let graph = neo4rs::Graph::connect(graph_cfg)
    .await
    .with_context(|| format!("failed to connect to neo4j at {}", server_cfg.neo4j_uri))?;

  provision_indexes(&graph)
    .await
    .context("failed to provision indexes")?;

  let store = Neo4jStore::new(graph, StoreLimits {
    limit_news: server_cfg.limit_news,
  });
  let defaults = PageDefaults {
    start: server_cfg.start_pagin,
    limit: server_cfg.limit_pagin,
  };

  let app = axum::Router::new()
    .nest("/api", newsgraph_api::api_router(Arc::new(store), defaults))
    .layer(TraceLayer::new_for_http());

  let address = format!("{}:{}", server_cfg.host, server_cfg.port);
  tracing::info!("listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;
  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
