//! Handlers for `/graphql`.
//!
//! | Method | Body / params | Notes |
//! |--------|---------------|-------|
//! | `POST` | JSON `{query, operationName, variables}` | Default |
//! | `POST` | raw query text | `Content-Type: application/graphql` |
//! | `GET`  | `?query=…&operationName=…&variables=<json>` | Queries only by convention |
//! | `GET`  | no `query` | GraphiQL IDE, when enabled |

use async_graphql::{Variables, http::GraphiQLSource};
use axum::{
  body::Bytes,
  extract::{Query, State},
  http::{HeaderMap, header},
  response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{AppState, GRAPHQL_PATH, error::Error, handlers::json_response};

const CONTENT_TYPE_GRAPHQL: &str = "application/graphql";

// ─── POST ─────────────────────────────────────────────────────────────────────

/// `POST /graphql`
pub async fn post(
  State(state): State<AppState>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Response, Error> {
  let request = parse_post_body(&headers, &body)?;
  Ok(execute(&state, request).await)
}

fn parse_post_body(
  headers: &HeaderMap,
  body: &[u8],
) -> Result<async_graphql::Request, Error> {
  let is_raw_query = headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|ct| ct.starts_with(CONTENT_TYPE_GRAPHQL));

  if is_raw_query {
    let query = std::str::from_utf8(body)
      .map_err(|_| Error::BadRequest("body is not valid UTF-8".to_string()))?;
    return Ok(async_graphql::Request::new(query));
  }

  Ok(serde_json::from_slice(body)?)
}

// ─── GET ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetParams {
  pub query:          Option<String>,
  pub operation_name: Option<String>,
  /// JSON-encoded variables object.
  pub variables:      Option<String>,
}

/// `GET /graphql[?query=...][&operationName=...][&variables=...]`
pub async fn get(
  State(state): State<AppState>,
  Query(params): Query<GetParams>,
) -> Result<Response, Error> {
  let Some(query) = params.query else {
    if state.config.graphiql {
      return Ok(graphiql());
    }
    return Err(Error::BadRequest("missing `query` parameter".to_string()));
  };

  let mut request = async_graphql::Request::new(query);
  if let Some(name) = params.operation_name {
    request = request.operation_name(name);
  }
  if let Some(raw) = params.variables.filter(|v| !v.is_empty()) {
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    request = request.variables(Variables::from_json(value));
  }

  Ok(execute(&state, request).await)
}

fn graphiql() -> Response {
  Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response()
}

// ─── Execution ────────────────────────────────────────────────────────────────

async fn execute(state: &AppState, request: async_graphql::Request) -> Response {
  let response = state.schema.execute(request).await;
  if response.is_err() {
    tracing::debug!(errors = ?response.errors, "graphql request failed");
  }
  json_response(&response, state.config.pretty)
}
