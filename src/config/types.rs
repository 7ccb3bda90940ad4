use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the server to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Interface to bind the server to
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind: default_bind(),
        }
    }
}

impl ServerConfig {
    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        self.bind
            .parse::<IpAddr>()
            .map(|_| ())
            .map_err(|_| format!("Bind address '{}' is not a valid IP address", self.bind))
    }
}

fn default_port() -> u16 {
    4000
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

/// Post store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g., "sqlite://postboard.db", "sqlite::memory:"),
    /// or "memory" for the in-process store
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Upper bound on pooled connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
        }
    }
}

/// URL that selects the in-process store instead of SQLite
pub const MEMORY_STORE_URL: &str = "memory";

impl DatabaseConfig {
    /// Whether this configuration selects the in-process store
    pub fn is_memory_store(&self) -> bool {
        self.url == MEMORY_STORE_URL
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.is_memory_store() && !self.url.starts_with("sqlite:") {
            return Err(format!(
                "Database URL '{}' must start with 'sqlite:' or be '{}'",
                self.url, MEMORY_STORE_URL
            ));
        }

        if self.max_connections == 0 {
            return Err("max_connections must be at least 1".to_string());
        }

        Ok(())
    }
}

fn default_database_url() -> String {
    "sqlite://postboard.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_validation_valid() {
        let server = ServerConfig {
            port: 4000,
            bind: "127.0.0.1".to_string(),
        };

        assert!(server.validate().is_ok());
    }

    #[test]
    fn test_server_validation_invalid_bind() {
        let server = ServerConfig {
            port: 4000,
            bind: "localhost:4000".to_string(),
        };

        assert!(server.validate().is_err());
    }

    #[test]
    fn test_database_validation_accepts_sqlite_and_memory() {
        let file = DatabaseConfig {
            url: "sqlite://posts.db".to_string(),
            max_connections: 5,
        };
        let in_memory_sqlite = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        };
        let memory = DatabaseConfig {
            url: "memory".to_string(),
            max_connections: 1,
        };

        assert!(file.validate().is_ok());
        assert!(in_memory_sqlite.validate().is_ok());
        assert!(memory.validate().is_ok());
        assert!(memory.is_memory_store());
        assert!(!in_memory_sqlite.is_memory_store());
    }

    #[test]
    fn test_database_validation_rejects_other_schemes() {
        let database = DatabaseConfig {
            url: "postgres://localhost/posts".to_string(),
            max_connections: 5,
        };

        assert!(database.validate().is_err());
    }

    #[test]
    fn test_database_validation_rejects_zero_connections() {
        let database = DatabaseConfig {
            url: "sqlite://posts.db".to_string(),
            max_connections: 0,
        };

        assert!(database.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.database.url, "sqlite://postboard.db");
        assert_eq!(config.database.max_connections, 5);
    }
}
