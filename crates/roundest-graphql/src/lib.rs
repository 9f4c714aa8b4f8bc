//! GraphQL query surface for Roundest.
//!
//! Builds one [`async_graphql`] schema over any
//! [`roundest_core::store::PokemonStore`]. HTTP transport is the caller's
//! responsibility.
//!
//! | Root | Field | Notes |
//! |------|-------|-------|
//! | `RootQuery` | `pokemon` | All Pokemon, most up-voted first |
//! | `RootQuery` | `results` | Leaderboard rows with win/loss percentages |
//! | `RootQuery` | `randomPair` | `{pokemonOne, pokemonTwo}` or `null` |
//! | `Mutation` | `vote(upvoteId: Int!, downvoteId: Int!)` | `{success}` |

mod catalog;
pub mod error;
pub mod mutation;
pub mod objects;
pub mod query;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use roundest_core::store::PokemonStore;

use catalog::SharedCatalog;

pub use error::QueryError;
pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The complete Roundest schema.
pub type RoundestSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema, with every resolver backed by `store`.
pub fn schema<S>(store: Arc<S>) -> RoundestSchema
where
  S: PokemonStore + 'static,
{
  let catalog: SharedCatalog = store;
  Schema::build(QueryRoot, MutationRoot, EmptySubscription)
    .data(catalog)
    .finish()
}

#[cfg(test)]
mod tests {
  use super::*;

  use roundest_core::{pokemon::NewPokemon, store::PokemonStore};
  use roundest_store_sqlite::SqliteStore;
  use serde_json::{Value, json};

  async fn seeded(entries: Vec<NewPokemon>) -> (Arc<SqliteStore>, RoundestSchema) {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    store.seed(entries).await.unwrap();
    let schema = schema(store.clone());
    (store, schema)
  }

  fn starters() -> Vec<NewPokemon> {
    vec![
      NewPokemon::new("Bulbasaur", 1),
      NewPokemon::new("Charmander", 4),
      NewPokemon::new("Squirtle", 7),
    ]
  }

  async fn run(schema: &RoundestSchema, query: &str) -> Value {
    let resp = schema.execute(query).await;
    assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);
    resp.data.into_json().unwrap()
  }

  async fn id_of(store: &SqliteStore, dex_id: i64) -> i64 {
    store
      .list()
      .await
      .unwrap()
      .into_iter()
      .find(|p| p.dex_id == dex_id)
      .unwrap()
      .id
  }

  // ── Queries ─────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn pokemon_lists_every_field() {
    let (_store, schema) = seeded(starters()).await;
    let data = run(&schema, "{ pokemon { id name dexId upVotes downVotes } }").await;

    let list = data["pokemon"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    let squirtle = list.iter().find(|p| p["name"] == "Squirtle").unwrap();
    assert_eq!(squirtle["dexId"], 7);
    assert_eq!(squirtle["upVotes"], 0);
    assert_eq!(squirtle["downVotes"], 0);
  }

  #[tokio::test]
  async fn results_rank_by_win_percentage() {
    let (store, schema) = seeded(starters()).await;
    let bulbasaur = id_of(&store, 1).await;
    let charmander = id_of(&store, 4).await;
    let squirtle = id_of(&store, 7).await;

    for (up, down) in [(bulbasaur, squirtle), (bulbasaur, squirtle), (charmander, bulbasaur)] {
      run(&schema, &format!("mutation {{ vote(upvoteId: {up}, downvoteId: {down}) {{ success }} }}"))
        .await;
    }

    let data = run(
      &schema,
      "{ results { name id dexId upVotes downVotes totalVotes winPercentage lossPercentage } }",
    )
    .await;
    let rows = data["results"].as_array().unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Charmander", "Bulbasaur", "Squirtle"]);

    assert_eq!(rows[0]["winPercentage"], 100.0);
    assert_eq!(rows[1]["totalVotes"], 3);
    assert_eq!(rows[2]["lossPercentage"], 100.0);
    assert_eq!(rows[2]["winPercentage"], 0.0);
  }

  #[tokio::test]
  async fn random_pair_returns_two_pokemon() {
    let (_store, schema) = seeded(starters()).await;
    let data = run(
      &schema,
      "{ randomPair { pokemonOne { id name } pokemonTwo { id name } } }",
    )
    .await;

    let pair = &data["randomPair"];
    assert_ne!(pair["pokemonOne"]["id"], pair["pokemonTwo"]["id"]);
  }

  #[tokio::test]
  async fn random_pair_is_null_with_one_pokemon() {
    let (_store, schema) = seeded(vec![NewPokemon::new("Mew", 151)]).await;
    let data = run(&schema, "{ randomPair { pokemonOne { id } pokemonTwo { id } } }").await;
    assert_eq!(data, json!({ "randomPair": null }));
  }

  // ── Mutations ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn vote_reports_success_and_moves_counters() {
    let (store, schema) = seeded(starters()).await;
    let bulbasaur = id_of(&store, 1).await;
    let charmander = id_of(&store, 4).await;

    let data = run(
      &schema,
      &format!("mutation {{ vote(upvoteId: {bulbasaur}, downvoteId: {charmander}) {{ success }} }}"),
    )
    .await;
    assert_eq!(data, json!({ "vote": { "success": true } }));

    let winner = store.get(bulbasaur).await.unwrap().unwrap();
    let loser = store.get(charmander).await.unwrap().unwrap();
    assert_eq!(winner.up_votes, 1);
    assert_eq!(loser.down_votes, 1);
  }

  #[tokio::test]
  async fn vote_for_unknown_pokemon_is_an_error() {
    let (store, schema) = seeded(starters()).await;
    let bulbasaur = id_of(&store, 1).await;

    let resp = schema
      .execute(format!("mutation {{ vote(upvoteId: {bulbasaur}, downvoteId: 404) {{ success }} }}"))
      .await;
    assert_eq!(resp.errors.len(), 1);
    assert!(resp.errors[0].message.contains("not found"), "{:?}", resp.errors);
    assert_eq!(store.get(bulbasaur).await.unwrap().unwrap().up_votes, 0);
  }

  #[tokio::test]
  async fn self_vote_is_rejected() {
    let (store, schema) = seeded(starters()).await;
    let bulbasaur = id_of(&store, 1).await;

    let resp = schema
      .execute(format!("mutation {{ vote(upvoteId: {bulbasaur}, downvoteId: {bulbasaur}) {{ success }} }}"))
      .await;
    assert_eq!(resp.errors.len(), 1);
    assert!(resp.errors[0].message.contains("itself"), "{:?}", resp.errors);

    let after = store.get(bulbasaur).await.unwrap().unwrap();
    assert_eq!((after.up_votes, after.down_votes), (0, 0));
  }

  #[tokio::test]
  async fn vote_requires_both_arguments() {
    let (_store, schema) = seeded(starters()).await;
    let resp = schema.execute("mutation { vote(upvoteId: 1) { success } }").await;
    assert!(!resp.errors.is_empty());
  }

  #[test]
  fn sdl_uses_client_facing_names() {
    let sdl = RoundestSchema::build(QueryRoot, MutationRoot, EmptySubscription)
      .finish()
      .sdl();
    for name in ["type RootQuery", "type Mutation", "type Result", "type RandomPair", "dexId", "pokemonOne", "upvoteId: Int!"] {
      assert!(sdl.contains(name), "missing {name} in:\n{sdl}");
    }
  }
}
