//! A validated head-to-head vote.

use crate::{Error, Result, pokemon::PokemonId};

/// One vote: `winner_id` gains an up-vote, `loser_id` a down-vote.
///
/// Construction rejects a Pokemon voted against itself, so every `Vote`
/// handed to a store names two distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote {
  winner_id: PokemonId,
  loser_id:  PokemonId,
}

impl Vote {
  pub fn new(winner_id: PokemonId, loser_id: PokemonId) -> Result<Self> {
    if winner_id == loser_id {
      return Err(Error::SelfVote(winner_id));
    }
    Ok(Self { winner_id, loser_id })
  }

  pub fn winner_id(&self) -> PokemonId { self.winner_id }

  pub fn loser_id(&self) -> PokemonId { self.loser_id }
}
