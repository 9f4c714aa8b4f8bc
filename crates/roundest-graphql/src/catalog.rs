//! Object-safe view of a [`PokemonStore`].
//!
//! `PokemonStore` returns `impl Future`, so it cannot be stored behind `dyn`.
//! Resolvers reach the store through [`Catalog`] instead, which boxes the
//! futures and the backend's error type. This keeps the schema types free of
//! a store type parameter.

use std::{future::Future, pin::Pin, sync::Arc};

use roundest_core::{
  pokemon::{Pokemon, RandomPair},
  store::PokemonStore,
  vote::Vote,
};

use crate::error::QueryError;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub(crate) type SharedCatalog = Arc<dyn Catalog>;

pub(crate) trait Catalog: Send + Sync {
  fn list(&self) -> BoxFuture<'_, Result<Vec<Pokemon>, QueryError>>;
  fn random_pair(&self) -> BoxFuture<'_, Result<Option<RandomPair>, QueryError>>;
  fn vote(&self, vote: Vote) -> BoxFuture<'_, Result<(), QueryError>>;
}

fn store_error<E>(e: E) -> QueryError
where
  E: std::error::Error + Send + Sync + 'static,
{
  tracing::warn!(error = %e, "store operation failed");
  QueryError::Store(Box::new(e))
}

impl<S> Catalog for S
where
  S: PokemonStore,
{
  fn list(&self) -> BoxFuture<'_, Result<Vec<Pokemon>, QueryError>> {
    Box::pin(async move { PokemonStore::list(self).await.map_err(store_error) })
  }

  fn random_pair(&self) -> BoxFuture<'_, Result<Option<RandomPair>, QueryError>> {
    Box::pin(async move { PokemonStore::random_pair(self).await.map_err(store_error) })
  }

  fn vote(&self, vote: Vote) -> BoxFuture<'_, Result<(), QueryError>> {
    Box::pin(async move { PokemonStore::vote(self, vote).await.map_err(store_error) })
  }
}
