//! Records served by the API and the typed inputs the store accepts.

use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// A persisted post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject, sqlx::FromRow)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// An entry of the static book catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Fields required to create a post; the id is generated by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// Partial update of a post. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostChanges {
    /// Apply the provided fields to `post` in place
    pub fn apply_to(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(content) = self.content {
            post.content = content;
        }
    }
}

/// Substring filter over title and content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFilter {
    pub contains: String,
}

impl PostFilter {
    pub fn new(contains: impl Into<String>) -> Self {
        Self {
            contains: contains.into(),
        }
    }

    /// Case-sensitive match on either field
    pub fn matches(&self, post: &Post) -> bool {
        post.title.contains(&self.contains) || post.content.contains(&self.contains)
    }
}
