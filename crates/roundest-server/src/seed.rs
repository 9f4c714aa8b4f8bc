//! Catalog seed files.
//!
//! A seed file is a JSON array of `{"name": ..., "dexId": ...}` objects.
//! Entries whose `dexId` is already in the store are skipped, so the same
//! file can be applied on every start.

use std::path::Path;

use roundest_core::{pokemon::NewPokemon, store::PokemonStore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("cannot read seed file: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed seed file: {0}")]
  Json(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Parse a seed file's contents.
pub fn parse_catalog(raw: &str) -> Result<Vec<NewPokemon>, SeedError> {
  Ok(serde_json::from_str(raw)?)
}

/// Read the seed file at `path` and insert any new entries into `store`.
///
/// Returns the number of Pokemon inserted.
pub async fn seed_from_file<S>(store: &S, path: &Path) -> Result<usize, SeedError>
where
  S: PokemonStore,
{
  let raw = tokio::fs::read_to_string(path).await?;
  let entries = parse_catalog(&raw)?;
  let offered = entries.len();

  let inserted = store
    .seed(entries)
    .await
    .map_err(|e| SeedError::Store(Box::new(e)))?;

  tracing::info!(path = %path.display(), offered, inserted, "applied seed file");
  Ok(inserted)
}
