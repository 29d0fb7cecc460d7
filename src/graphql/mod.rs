//! GraphQL schema for the link feed
//!
//! - [`Query`]: `info`, `feed`
//! - [`Mutation`]: `post`
//! - `Link` field resolvers live in [`types`]
//! - [`SchemaDeclaration`]: the SDL contract checked against these types at startup

pub mod declaration;
mod mutation;
mod query;
mod types;

pub use declaration::{FieldDeclaration, ObjectDeclaration, SchemaDeclaration};
pub use mutation::Mutation;
pub use query::Query;

use async_graphql::{EmptySubscription, Schema};

use crate::config::GraphqlConfig;
use crate::services::LinkService;
use crate::storage::Snapshot;

pub type LinkSchema = Schema<Query, Mutation, EmptySubscription>;

/// Store view pinned for the duration of one request
///
/// When present in the request data, every `feed` selection in that request
/// reads this snapshot instead of the live store.
#[derive(Clone)]
pub struct FeedSnapshot(pub Snapshot);

/// Build the executable schema with `service` as resolver context
pub fn build_schema(service: LinkService, config: &GraphqlConfig) -> LinkSchema {
    let mut builder = Schema::build(Query, Mutation, EmptySubscription).data(service);

    if let Some(depth) = config.max_depth {
        builder = builder.limit_depth(depth);
    }
    if !config.enable_introspection {
        builder = builder.disable_introspection();
    }

    builder.finish()
}

/// SDL generated from the resolver types
pub fn schema_sdl() -> String {
    Schema::build(Query, Mutation, EmptySubscription)
        .finish()
        .sdl()
}
