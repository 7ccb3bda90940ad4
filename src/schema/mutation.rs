use crate::model::{NewPost, Post, PostChanges};
use crate::store::SharedPostStore;

use async_graphql::{Context, Object, Result};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a post; the id is generated by the server
    async fn create_post(&self, ctx: &Context<'_>, title: String, content: String) -> Result<Post> {
        let store = ctx.data::<SharedPostStore>()?;
        Ok(store.create(NewPost { title, content }).await?)
    }

    /// Change the title and/or content of an existing post
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: String,
        title: Option<String>,
        content: Option<String>,
    ) -> Result<Post> {
        let store = ctx.data::<SharedPostStore>()?;
        Ok(store.update(&id, PostChanges { title, content }).await?)
    }

    /// Delete a post, returning the removed record
    async fn delete_post(&self, ctx: &Context<'_>, id: String) -> Result<Post> {
        let store = ctx.data::<SharedPostStore>()?;
        Ok(store.delete(&id).await?)
    }
}
