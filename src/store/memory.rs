use super::{generate_id, PostStore};
use crate::error::{PostboardError, Result};
use crate::model::{NewPost, Post, PostChanges, PostFilter};

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local post store backed by a map
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<HashMap<String, Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn find_many(&self, filter: Option<&PostFilter>) -> Result<Vec<Post>> {
        let posts = self.posts.read().await;
        Ok(posts
            .values()
            .filter(|post| filter.map_or(true, |f| f.matches(post)))
            .cloned()
            .collect())
    }

    async fn find_unique(&self, id: &str) -> Result<Option<Post>> {
        Ok(self.posts.read().await.get(id).cloned())
    }

    async fn create(&self, post: NewPost) -> Result<Post> {
        let post = Post {
            id: generate_id(),
            title: post.title,
            content: post.content,
        };

        self.posts.write().await.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn update(&self, id: &str, changes: PostChanges) -> Result<Post> {
        let mut posts = self.posts.write().await;
        let post = posts
            .get_mut(id)
            .ok_or_else(|| PostboardError::PostNotFound(id.to_string()))?;

        changes.apply_to(post);
        Ok(post.clone())
    }

    async fn delete(&self, id: &str) -> Result<Post> {
        self.posts
            .write()
            .await
            .remove(id)
            .ok_or_else(|| PostboardError::PostNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str, content: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = MemoryPostStore::new();
        let created = store.create(new_post("Hello", "World")).await.unwrap();

        assert!(!created.id.is_empty());
        assert_eq!(store.find_unique(&created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_update_missing_post() {
        let store = MemoryPostStore::new();
        let result = store.update("missing", PostChanges::default()).await;

        assert!(matches!(result, Err(PostboardError::PostNotFound(id)) if id == "missing"));
        assert!(store.find_many(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_prior_state() {
        let store = MemoryPostStore::new();
        let created = store.create(new_post("Gone", "Soon")).await.unwrap();

        let deleted = store.delete(&created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert_eq!(store.find_unique(&created.id).await.unwrap(), None);
        assert!(matches!(
            store.delete(&created.id).await,
            Err(PostboardError::PostNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_many_with_filter() {
        let store = MemoryPostStore::new();
        store.create(new_post("Async Rust", "futures")).await.unwrap();
        store.create(new_post("Gardening", "tomatoes and rust spots")).await.unwrap();
        store.create(new_post("Cooking", "pasta")).await.unwrap();

        let mut titles: Vec<String> = store
            .find_many(Some(&PostFilter::new("ust")))
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        titles.sort();

        assert_eq!(titles, vec!["Async Rust", "Gardening"]);
        assert_eq!(store.find_many(None).await.unwrap().len(), 3);
    }
}
