use super::{generate_id, PostStore};
use crate::error::{PostboardError, Result};
use crate::model::{NewPost, Post, PostChanges, PostFilter};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::query_as;
use std::str::FromStr;
use std::time::Duration;

const CREATE_POSTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS posts (
        id      TEXT PRIMARY KEY NOT NULL,
        title   TEXT NOT NULL,
        content TEXT NOT NULL
    )
";

/// Post store backed by a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqlitePostStore {
    pool: SqlitePool,
}

impl SqlitePostStore {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a pool for `url`, creating the database file if it is missing.
    ///
    /// In-memory databases are private to a single connection, so the pool is
    /// pinned to one long-lived connection for them.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool_options = if is_in_memory(url) {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        tracing::info!("Connecting to {}", url);
        let pool = pool_options.connect_with(options).await?;

        Ok(Self::new(pool))
    }

    /// Create the posts table if it does not exist yet
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(CREATE_POSTS_TABLE).execute(&self.pool).await?;
        tracing::debug!("posts table ready");
        Ok(())
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[async_trait]
impl PostStore for SqlitePostStore {
    async fn find_many(&self, filter: Option<&PostFilter>) -> Result<Vec<Post>> {
        let posts = match filter {
            None => {
                query_as::<_, Post>("SELECT id, title, content FROM posts")
                    .fetch_all(&self.pool)
                    .await?
            }
            Some(filter) => {
                tracing::debug!("Searching posts for '{}'", filter.contains);
                // instr() is a byte-wise substring test, unlike LIKE which folds ASCII case
                query_as::<_, Post>(
                    "
                    SELECT id, title, content
                    FROM posts
                    WHERE instr(title, ?) > 0 OR instr(content, ?) > 0
                    ",
                )
                .bind(&filter.contains)
                .bind(&filter.contains)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(posts)
    }

    async fn find_unique(&self, id: &str) -> Result<Option<Post>> {
        let post = query_as::<_, Post>("SELECT id, title, content FROM posts WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(post)
    }

    async fn create(&self, post: NewPost) -> Result<Post> {
        let id = generate_id();
        tracing::debug!("Creating post {}", id);

        let post = query_as::<_, Post>(
            "
            INSERT INTO posts (id, title, content)
            VALUES (?, ?, ?)
            RETURNING id, title, content
            ",
        )
        .bind(&id)
        .bind(&post.title)
        .bind(&post.content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn update(&self, id: &str, changes: PostChanges) -> Result<Post> {
        tracing::debug!("Updating post {}", id);

        query_as::<_, Post>(
            "
            UPDATE posts
            SET title = COALESCE(?, title),
                content = COALESCE(?, content)
            WHERE id = ?
            RETURNING id, title, content
            ",
        )
        .bind(changes.title)
        .bind(changes.content)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| PostboardError::PostNotFound(id.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<Post> {
        tracing::debug!("Deleting post {}", id);

        query_as::<_, Post>("DELETE FROM posts WHERE id = ? RETURNING id, title, content")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostboardError::PostNotFound(id.to_string()))
    }
}
