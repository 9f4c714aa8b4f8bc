//! GraphQL output types.
//!
//! Type and field names are part of the public wire contract and match what
//! existing clients query.

use async_graphql::SimpleObject;
use roundest_core::{
  pokemon::{Pokemon, RandomPair},
  ranking::RankedPokemon,
};

/// A catalog entry and its raw vote counters.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Pokemon")]
pub struct PokemonObject {
  pub id:         i64,
  pub name:       String,
  pub dex_id:     i64,
  pub up_votes:   i64,
  pub down_votes: i64,
}

impl From<Pokemon> for PokemonObject {
  fn from(p: Pokemon) -> Self {
    Self {
      id:         p.id,
      name:       p.name,
      dex_id:     p.dex_id,
      up_votes:   p.up_votes,
      down_votes: p.down_votes,
    }
  }
}

/// One leaderboard row.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Result")]
pub struct ResultObject {
  pub name:            String,
  pub id:              i64,
  pub dex_id:          i64,
  pub up_votes:        i64,
  pub down_votes:      i64,
  pub total_votes:     i64,
  pub win_percentage:  f64,
  pub loss_percentage: f64,
}

impl From<RankedPokemon> for ResultObject {
  fn from(r: RankedPokemon) -> Self {
    Self {
      name:            r.name,
      id:              r.id,
      dex_id:          r.dex_id,
      up_votes:        r.up_votes,
      down_votes:      r.down_votes,
      total_votes:     r.total_votes,
      win_percentage:  r.win_percentage,
      loss_percentage: r.loss_percentage,
    }
  }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "RandomPair")]
pub struct RandomPairObject {
  pub pokemon_one: PokemonObject,
  pub pokemon_two: PokemonObject,
}

impl From<RandomPair> for RandomPairObject {
  fn from(pair: RandomPair) -> Self {
    Self {
      pokemon_one: pair.pokemon_one.into(),
      pokemon_two: pair.pokemon_two.into(),
    }
  }
}

#[derive(Debug, Clone, SimpleObject)]
pub struct VoteResult {
  pub success: bool,
}
