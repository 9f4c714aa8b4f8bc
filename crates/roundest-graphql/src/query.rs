//! Read operations: `pokemon`, `results`, `randomPair`.

use async_graphql::{Context, Object, Result};
use roundest_core::ranking::rank;

use crate::{
  catalog::SharedCatalog,
  objects::{PokemonObject, RandomPairObject, ResultObject},
};

pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
  /// Every Pokemon, most up-voted first.
  async fn pokemon(&self, ctx: &Context<'_>) -> Result<Vec<PokemonObject>> {
    let catalog = ctx.data::<SharedCatalog>()?;
    let all = catalog.list().await?;
    Ok(all.into_iter().map(PokemonObject::from).collect())
  }

  /// The leaderboard: win percentage descending, ties broken by up-votes.
  async fn results(&self, ctx: &Context<'_>) -> Result<Vec<ResultObject>> {
    let catalog = ctx.data::<SharedCatalog>()?;
    let all = catalog.list().await?;
    Ok(rank(all).into_iter().map(ResultObject::from).collect())
  }

  /// Two random Pokemon to vote between, or `null` if the catalog has fewer
  /// than two.
  async fn random_pair(&self, ctx: &Context<'_>) -> Result<Option<RandomPairObject>> {
    let catalog = ctx.data::<SharedCatalog>()?;
    Ok(catalog.random_pair().await?.map(RandomPairObject::from))
  }
}
