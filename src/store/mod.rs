/// Post persistence
///
/// `PostStore` is the CRUD surface the GraphQL resolvers delegate to. Two
/// implementations exist: `SqlitePostStore` for real deployments and
/// `MemoryPostStore` for tests and throwaway runs.

mod memory;
mod sqlite;

pub use memory::MemoryPostStore;
pub use sqlite::SqlitePostStore;

use crate::config::DatabaseConfig;
use crate::error::Result;
use crate::model::{NewPost, Post, PostChanges, PostFilter};

use async_trait::async_trait;
use std::sync::Arc;

/// Store handle shared across all requests
pub type SharedPostStore = Arc<dyn PostStore>;

#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, or those matching `filter`. Order is unspecified.
    async fn find_many(&self, filter: Option<&PostFilter>) -> Result<Vec<Post>>;

    /// The post with `id`, if any
    async fn find_unique(&self, id: &str) -> Result<Option<Post>>;

    /// Insert a post under a freshly generated id
    async fn create(&self, post: NewPost) -> Result<Post>;

    /// Apply `changes` to the post with `id`.
    ///
    /// Fails with `PostboardError::PostNotFound` when no such post exists.
    async fn update(&self, id: &str, changes: PostChanges) -> Result<Post>;

    /// Remove the post with `id`, returning its last state.
    ///
    /// Fails with `PostboardError::PostNotFound` when no such post exists.
    async fn delete(&self, id: &str) -> Result<Post>;
}

/// Open the store selected by `config`, running migrations where needed
pub async fn connect(config: &DatabaseConfig) -> Result<SharedPostStore> {
    if config.is_memory_store() {
        tracing::info!("Using in-memory post store; data will not survive a restart");
        return Ok(Arc::new(MemoryPostStore::new()));
    }

    let store = SqlitePostStore::connect(&config.url, config.max_connections).await?;
    store.migrate().await?;
    Ok(Arc::new(store))
}

/// Generate an id for a new post
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
