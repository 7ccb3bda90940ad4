use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostboardError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("No post found with id '{0}'")]
    PostNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for PostboardError {
    fn from(err: toml::de::Error) -> Self {
        PostboardError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for PostboardError {
    fn from(err: toml::ser::Error) -> Self {
        PostboardError::Serialization(format!("TOML serialization error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, PostboardError>;
