//! The locally declared GraphQL schema and its resolvers.

pub mod model;
mod mutation;
mod query;

use async_graphql::{EmptySubscription, Schema};

pub use mutation::MutationRoot;
pub use query::QueryRoot;

use crate::shopify::AdminClient;

pub type BackendSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the upstream client injected as context data.
#[must_use]
pub fn build_schema(client: AdminClient) -> BackendSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(client)
        .finish()
}
