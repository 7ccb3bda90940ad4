/// GraphQL schema for posts and books
///
/// This module declares the `Query` and `Mutation` roots and assembles them
/// into an executable schema with the post store attached as context data.

mod builder;
mod mutation;
mod query;

pub use builder::{build_schema, PostboardSchema};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
