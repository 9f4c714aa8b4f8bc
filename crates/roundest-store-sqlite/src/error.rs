//! Error type for `roundest-store-sqlite`.

use roundest_core::pokemon::PokemonId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),

  /// A vote named a Pokemon that is not in the catalog. The vote was rolled
  /// back.
  #[error("pokemon not found: {0}")]
  PokemonNotFound(PokemonId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
