mod types;

pub use types::{Config, DatabaseConfig, ServerConfig, MEMORY_STORE_URL};

use crate::error::{PostboardError, Result};
use std::fs;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &str) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .map_err(|e| PostboardError::Config(format!("Failed to read config file '{}': {}", path, e)))?;

    let config: Config = toml::from_str(&contents)?;
    validate(&config)?;

    Ok(config)
}

/// Load configuration from a TOML file, falling back to defaults when the file is absent
pub fn load_config_or_default(path: &str) -> Result<Config> {
    if Path::new(path).exists() {
        load_config(path)
    } else {
        tracing::warn!("Config file '{}' not found, using defaults", path);
        Ok(Config::default())
    }
}

/// Save configuration to a TOML file
pub fn save_config(config: &Config, path: &str) -> Result<()> {
    validate(config)?;

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)
        .map_err(|e| PostboardError::Config(format!("Failed to write config file '{}': {}", path, e)))?;

    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    config.server.validate().map_err(PostboardError::Config)?;
    config.database.validate().map_err(PostboardError::Config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[test]
    fn test_load_valid_config() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[server]
port = 8080
bind = "127.0.0.1"

[database]
url = "sqlite://data/posts.db"
max_connections = 3
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.database.url, "sqlite://data/posts.db");
        assert_eq!(config.database.max_connections, 3);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[database]
url = "memory"
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert!(config.database.is_memory_store());
        assert_eq!(config.database.max_connections, 5);
    }

    #[test]
    fn test_load_invalid_database_url() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = r#"
[database]
url = "mysql://localhost/posts"
"#;
        temp_file.write_all(config_content.as_bytes()).unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(config, Err(PostboardError::Config(_))));
    }

    #[test]
    fn test_load_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[server\nport = ").unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path().to_str().unwrap());
        assert!(matches!(config, Err(PostboardError::Config(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = load_config_or_default(path.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 4000);

        assert!(load_config(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_save_and_load_config() {
        let config = Config {
            server: ServerConfig {
                port: 4001,
                bind: "127.0.0.1".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
        };

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        save_config(&config, path).unwrap();
        let loaded_config = load_config(path).unwrap();

        assert_eq!(loaded_config.server.port, 4001);
        assert_eq!(loaded_config.server.bind, "127.0.0.1");
        assert_eq!(loaded_config.database.url, "sqlite::memory:");
        assert_eq!(loaded_config.database.max_connections, 1);
    }
}
