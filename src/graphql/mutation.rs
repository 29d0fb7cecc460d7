use std::sync::Arc;

use async_graphql::{Context, Object, Result};

use crate::services::{LinkService, PostLinkRequest};
use crate::storage::Link;

pub struct Mutation;

#[Object]
impl Mutation {
    /// Create a link and append it to the feed
    async fn post(&self, ctx: &Context<'_>, url: String, description: String) -> Result<Arc<Link>> {
        let service = ctx.data::<LinkService>()?;
        Ok(service.post(PostLinkRequest { url, description }))
    }
}
