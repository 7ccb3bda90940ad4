use crate::catalog;
use crate::model::{Book, Post, PostFilter};
use crate::store::SharedPostStore;

use async_graphql::{Context, Object, Result};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single post by id, or null when it does not exist
    async fn post(&self, ctx: &Context<'_>, id: String) -> Result<Option<Post>> {
        let store = ctx.data::<SharedPostStore>()?;
        Ok(store.find_unique(&id).await?)
    }

    /// All posts
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        let store = ctx.data::<SharedPostStore>()?;
        Ok(store.find_many(None).await?)
    }

    /// The static book catalog
    async fn books(&self) -> Option<Vec<Option<Book>>> {
        Some(catalog::books().into_iter().map(Some).collect())
    }

    /// Posts whose title or content contains `query`
    async fn search_posts(&self, ctx: &Context<'_>, query: String) -> Result<Vec<Post>> {
        let store = ctx.data::<SharedPostStore>()?;
        Ok(store.find_many(Some(&PostFilter::new(query))).await?)
    }
}
