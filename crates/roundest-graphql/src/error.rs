//! Resolver error type.
//!
//! Every variant reaches the client as a plain GraphQL error message; there
//! are no structured error codes.

use thiserror::Error;

/// An error raised while resolving a field.
#[derive(Debug, Error)]
pub enum QueryError {
  #[error("invalid vote: {0}")]
  InvalidVote(#[from] roundest_core::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}
