use async_graphql::{ID, Object};

use crate::storage::Link;

/// Field resolvers project the parent link produced by `feed` or `post`.
#[Object]
impl Link {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn description(&self) -> &str {
        &self.description
    }

    async fn url(&self) -> &str {
        &self.url
    }
}
