//! The `PokemonStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roundest-store-sqlite`).
//! Higher layers (`roundest-graphql`, `roundest-server`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  pokemon::{NewPokemon, Pokemon, PokemonId, RandomPair},
  vote::Vote,
};

/// Abstraction over a Roundest catalog backend.
///
/// Vote counters are only ever changed by [`PokemonStore::vote`], and only by
/// relative increments. Implementations must apply both increments of a vote
/// atomically.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PokemonStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// All Pokemon, most up-voted first.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<Pokemon>, Self::Error>> + Send + '_;

  /// Retrieve a Pokemon by id. Returns `None` if not found.
  fn get(
    &self,
    id: PokemonId,
  ) -> impl Future<Output = Result<Option<Pokemon>, Self::Error>> + Send + '_;

  /// Two distinct Pokemon chosen uniformly at random.
  ///
  /// Returns `None` when the catalog holds fewer than two entries.
  fn random_pair(
    &self,
  ) -> impl Future<Output = Result<Option<RandomPair>, Self::Error>> + Send + '_;

  /// Number of Pokemon in the catalog.
  fn count(&self) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Record a vote: one up-vote for the winner and one down-vote for the
  /// loser, committed together or not at all.
  ///
  /// Fails without any effect if either Pokemon does not exist.
  fn vote(
    &self,
    vote: Vote,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert catalog entries whose `dex_id` is not already present.
  ///
  /// Returns the number of entries actually inserted.
  fn seed(
    &self,
    entries: Vec<NewPokemon>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;
}
