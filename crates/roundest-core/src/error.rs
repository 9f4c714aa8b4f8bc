//! Error types for `roundest-core`.

use thiserror::Error;

use crate::pokemon::PokemonId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("cannot vote pokemon {0} against itself")]
  SelfVote(PokemonId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
