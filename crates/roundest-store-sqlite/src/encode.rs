//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use roundest_core::pokemon::{Pokemon, PokemonId};

use crate::{Error, Result};

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Raw row types ────────────────────────────────────────────────────────────

/// Column list matching [`RawPokemon::from_row`].
pub const POKEMON_COLUMNS: &str =
  "id, name, dex_id, up_votes, down_votes, inserted_at, updated_at";

/// A `pokemon` row as read from SQLite, before timestamp decoding.
pub struct RawPokemon {
  pub id:          PokemonId,
  pub name:        String,
  pub dex_id:      i64,
  pub up_votes:    i64,
  pub down_votes:  i64,
  pub inserted_at: String,
  pub updated_at:  String,
}

impl RawPokemon {
  /// Map a row selected with [`POKEMON_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:          row.get(0)?,
      name:        row.get(1)?,
      dex_id:      row.get(2)?,
      up_votes:    row.get(3)?,
      down_votes:  row.get(4)?,
      inserted_at: row.get(5)?,
      updated_at:  row.get(6)?,
    })
  }

  pub fn into_pokemon(self) -> Result<Pokemon> {
    Ok(Pokemon {
      id:          self.id,
      name:        self.name,
      dex_id:      self.dex_id,
      up_votes:    self.up_votes,
      down_votes:  self.down_votes,
      inserted_at: decode_dt(&self.inserted_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn timestamps_survive_encoding() {
    let dt = Utc.with_ymd_and_hms(2024, 11, 2, 17, 4, 9).unwrap();
    assert_eq!(decode_dt(&encode_dt(dt)).unwrap(), dt);
  }

  #[test]
  fn malformed_timestamp_is_a_parse_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
