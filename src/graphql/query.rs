use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use super::FeedSnapshot;
use crate::services::{INFO, LinkService};
use crate::storage::Link;

pub struct Query;

#[Object]
impl Query {
    /// Fixed description of this API
    async fn info(&self) -> &'static str {
        INFO
    }

    /// Every posted link, oldest first
    async fn feed(&self, ctx: &Context<'_>) -> Result<Vec<Arc<Link>>> {
        match ctx.data_opt::<FeedSnapshot>() {
            Some(pinned) => Ok(pinned.0.clone()),
            None => Ok(ctx.data::<LinkService>()?.feed()),
        }
    }
}
