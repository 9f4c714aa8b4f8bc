//! HTTP transport for Roundest.
//!
//! Exposes an axum [`Router`] serving the GraphQL schema from
//! [`roundest_graphql`] at `/graphql`, behind a permissive CORS policy.

pub mod error;
pub mod handlers;
pub mod seed;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  http::{Method, header},
  routing::get,
};
use roundest_graphql::RoundestSchema;
use serde::Deserialize;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

/// Where the GraphQL endpoint (and GraphiQL) is mounted.
pub const GRAPHQL_PATH: &str = "/graphql";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROUNDEST_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// Serve the GraphiQL IDE on `GET /graphql` without a query.
  #[serde(default = "default_true")]
  pub graphiql:   bool,
  /// Indent JSON responses.
  #[serde(default = "default_true")]
  pub pretty:     bool,
  /// Seed file applied at startup, see [`seed`].
  #[serde(default)]
  pub seed_path:  Option<PathBuf>,
}

fn default_host() -> String { "0.0.0.0".to_string() }

fn default_port() -> u16 { 8080 }

fn default_store_path() -> PathBuf { PathBuf::from("roundest.db") }

fn default_true() -> bool { true }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       default_host(),
      port:       default_port(),
      store_path: default_store_path(),
      graphiql:   true,
      pretty:     true,
      seed_path:  None,
    }
  }
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
  pub schema: RoundestSchema,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Any origin; GET, POST and OPTIONS; the standard request headers.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE])
}

/// Build the axum [`Router`] for the server.
pub fn router(state: AppState) -> Router {
  Router::new()
    .route(
      GRAPHQL_PATH,
      get(handlers::graphql::get).post(handlers::graphql::post),
    )
    .route("/health", get(handlers::health::handler))
    .fallback(|| async { Error::NotFound })
    .layer(cors_layer())
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
