//! [`SqliteStore`] — the SQLite implementation of [`PokemonStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use tracing::{debug, warn};

use roundest_core::{
  pokemon::{NewPokemon, Pokemon, PokemonId, RandomPair},
  store::PokemonStore,
  vote::Vote,
};

use crate::{
  encode::{encode_dt, RawPokemon, POKEMON_COLUMNS},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Roundest catalog backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a `SELECT` over [`POKEMON_COLUMNS`] and decode every row.
  async fn select_pokemon(&self, tail: &'static str) -> Result<Vec<Pokemon>> {
    let sql = format!("SELECT {POKEMON_COLUMNS} FROM pokemon {tail}");

    let raws: Vec<RawPokemon> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], RawPokemon::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawPokemon::into_pokemon).collect()
  }
}

// ─── PokemonStore impl ───────────────────────────────────────────────────────

impl PokemonStore for SqliteStore {
  type Error = Error;

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn list(&self) -> Result<Vec<Pokemon>> {
    // `id` keeps the order of equally up-voted rows stable between calls.
    self.select_pokemon("ORDER BY up_votes DESC, id ASC").await
  }

  async fn get(&self, id: PokemonId) -> Result<Option<Pokemon>> {
    let sql = format!("SELECT {POKEMON_COLUMNS} FROM pokemon WHERE id = ?1");

    let raw: Option<RawPokemon> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], RawPokemon::from_row)
            .optional()?,
        )
      })
      .await?;

    raw.map(RawPokemon::into_pokemon).transpose()
  }

  async fn random_pair(&self) -> Result<Option<RandomPair>> {
    let picked = self.select_pokemon("ORDER BY RANDOM() LIMIT 2").await?;

    match <[Pokemon; 2]>::try_from(picked) {
      Ok([pokemon_one, pokemon_two]) => {
        Ok(Some(RandomPair { pokemon_one, pokemon_two }))
      }
      Err(short) => {
        debug!(available = short.len(), "not enough pokemon for a pair");
        Ok(None)
      }
    }
  }

  async fn count(&self) -> Result<usize> {
    let count: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM pokemon", [], |r| r.get(0))?)
      })
      .await?;
    Ok(count as usize)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn vote(&self, vote: Vote) -> Result<()> {
    let winner_id = vote.winner_id();
    let loser_id  = vote.loser_id();
    let now       = encode_dt(Utc::now());

    // Both increments share one transaction. Returning before `commit` drops
    // the transaction, which rolls it back.
    let missing: Option<PokemonId> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let won = tx.execute(
          "UPDATE pokemon
           SET up_votes = up_votes + 1, updated_at = ?2
           WHERE id = ?1",
          rusqlite::params![winner_id, now],
        )?;
        if won == 0 {
          return Ok(Some(winner_id));
        }

        let lost = tx.execute(
          "UPDATE pokemon
           SET down_votes = down_votes + 1, updated_at = ?2
           WHERE id = ?1",
          rusqlite::params![loser_id, now],
        )?;
        if lost == 0 {
          return Ok(Some(loser_id));
        }

        tx.commit()?;
        Ok(None)
      })
      .await?;

    if let Some(id) = missing {
      warn!(winner_id, loser_id, missing = id, "vote rolled back");
      return Err(Error::PokemonNotFound(id));
    }

    debug!(winner_id, loser_id, "vote recorded");
    Ok(())
  }

  async fn seed(&self, entries: Vec<NewPokemon>) -> Result<usize> {
    let now = encode_dt(Utc::now());

    let inserted: usize = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let mut inserted = 0;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO pokemon (name, dex_id, up_votes, down_votes, inserted_at, updated_at)
             VALUES (?1, ?2, 0, 0, ?3, ?3)
             ON CONFLICT (dex_id) DO NOTHING",
          )?;
          for entry in &entries {
            inserted += stmt.execute(rusqlite::params![entry.name, entry.dex_id, now])?;
          }
        }
        tx.commit()?;
        Ok(inserted)
      })
      .await?;

    debug!(inserted, "catalog seeded");
    Ok(inserted)
  }
}
