//! Transport error type and axum `IntoResponse` implementation.
//!
//! Only failures to *read* a request land here. Failures while executing a
//! GraphQL operation are reported inside the GraphQL response body.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("malformed json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("not found")]
  NotFound,
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let status = match &self {
      Error::BadRequest(_) | Error::Json(_) => StatusCode::BAD_REQUEST,
      Error::NotFound => StatusCode::NOT_FOUND,
    };
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
