pub mod graphql;
pub mod health;

use axum::{
  body::Body,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use serde::Serialize;

pub(super) const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Serialise `value` as a JSON response, indented when `pretty` is set.
pub(super) fn json_response<T: Serialize>(value: &T, pretty: bool) -> Response {
  let body = if pretty {
    serde_json::to_vec_pretty(value)
  } else {
    serde_json::to_vec(value)
  };

  match body {
    Ok(bytes) => (
      StatusCode::OK,
      [(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON))],
      Body::from(bytes),
    )
      .into_response(),
    Err(e) => {
      tracing::error!(error = %e, "failed to serialise response");
      StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
  }
}
