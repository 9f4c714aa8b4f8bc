//! Pokemon — the voteable catalog entry.
//!
//! Counters only ever grow, and only through a vote. Everything else about a
//! Pokemon is fixed once it is seeded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned primary key of a [`Pokemon`].
pub type PokemonId = i64;

/// A catalog entry together with its accumulated win/loss counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
  pub id:          PokemonId,
  pub name:        String,
  /// National Pokédex index.
  pub dex_id:      i64,
  /// Times this Pokemon won a head-to-head vote.
  pub up_votes:    i64,
  /// Times this Pokemon lost a head-to-head vote.
  pub down_votes:  i64,
  pub inserted_at: DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

/// A catalog entry to be seeded; counters start at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPokemon {
  pub name:   String,
  pub dex_id: i64,
}

impl NewPokemon {
  pub fn new(name: impl Into<String>, dex_id: i64) -> Self {
    Self { name: name.into(), dex_id }
  }
}

/// Two distinct Pokemon drawn at random for a head-to-head vote.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomPair {
  pub pokemon_one: Pokemon,
  pub pokemon_two: Pokemon,
}
