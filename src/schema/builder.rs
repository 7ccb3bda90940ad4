use crate::schema::mutation::MutationRoot;
use crate::schema::query::QueryRoot;
use crate::store::SharedPostStore;

use async_graphql::{EmptySubscription, Schema};

pub type PostboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema with `store` available to every resolver
pub fn build_schema(store: SharedPostStore) -> PostboardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}
