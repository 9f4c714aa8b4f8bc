//! Ranking — the derived leaderboard view.
//!
//! Rows are computed from a snapshot of the store on every request and are
//! never persisted.

use std::{borrow::Borrow, cmp::Ordering};

use serde::{Deserialize, Serialize};

use crate::pokemon::{Pokemon, PokemonId};

/// A Pokemon's counters together with its derived win/loss statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedPokemon {
  pub name:            String,
  pub id:              PokemonId,
  pub dex_id:          i64,
  pub up_votes:        i64,
  pub down_votes:      i64,
  pub total_votes:     i64,
  /// `0.0..=100.0`; zero when the Pokemon has never been voted on.
  pub win_percentage:  f64,
  /// `0.0..=100.0`; zero when the Pokemon has never been voted on.
  pub loss_percentage: f64,
}

impl RankedPokemon {
  pub fn from_pokemon(pokemon: &Pokemon) -> Self {
    let total_votes = pokemon.up_votes + pokemon.down_votes;
    Self {
      name: pokemon.name.clone(),
      id: pokemon.id,
      dex_id: pokemon.dex_id,
      up_votes: pokemon.up_votes,
      down_votes: pokemon.down_votes,
      total_votes,
      win_percentage: percentage(pokemon.up_votes, total_votes),
      loss_percentage: percentage(pokemon.down_votes, total_votes),
    }
  }

  /// Leaderboard order: higher win percentage first, then more up-votes.
  fn leaderboard_cmp(&self, other: &Self) -> Ordering {
    other
      .win_percentage
      .total_cmp(&self.win_percentage)
      .then_with(|| other.up_votes.cmp(&self.up_votes))
  }
}

impl From<&Pokemon> for RankedPokemon {
  fn from(pokemon: &Pokemon) -> Self { Self::from_pokemon(pokemon) }
}

fn percentage(part: i64, total: i64) -> f64 {
  if total > 0 {
    part as f64 / total as f64 * 100.0
  } else {
    0.0
  }
}

/// Build the leaderboard for `pokemon`.
///
/// The sort is stable: rows with the same win percentage and the same
/// up-vote count keep the order they arrived in.
pub fn rank<I>(pokemon: I) -> Vec<RankedPokemon>
where
  I: IntoIterator,
  I::Item: Borrow<Pokemon>,
{
  let mut rows: Vec<RankedPokemon> = pokemon
    .into_iter()
    .map(|p| RankedPokemon::from_pokemon(<I::Item as Borrow<Pokemon>>::borrow(&p)))
    .collect();
  rows.sort_by(RankedPokemon::leaderboard_cmp);
  rows
}
