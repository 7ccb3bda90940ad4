pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod schema;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::{Config, DatabaseConfig, ServerConfig};
pub use error::{PostboardError, Result};
pub use model::{Book, NewPost, Post, PostChanges, PostFilter};
pub use schema::{build_schema, PostboardSchema};
pub use store::{MemoryPostStore, PostStore, SharedPostStore, SqlitePostStore};
