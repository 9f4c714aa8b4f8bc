//! Write operations: `vote`.

use async_graphql::{Context, Object, Result};
use roundest_core::vote::Vote;

use crate::{catalog::SharedCatalog, error::QueryError, objects::VoteResult};

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
  /// Record that `upvoteId` beat `downvoteId`.
  ///
  /// Both counters change together or not at all. Voting a Pokemon against
  /// itself is rejected.
  async fn vote(
    &self,
    ctx: &Context<'_>,
    upvote_id: i64,
    downvote_id: i64,
  ) -> Result<VoteResult> {
    let vote = Vote::new(upvote_id, downvote_id).map_err(QueryError::from)?;
    let catalog = ctx.data::<SharedCatalog>()?;
    catalog.vote(vote).await?;
    Ok(VoteResult { success: true })
  }
}
