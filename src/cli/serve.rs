use postboard::config::Config;
use postboard::error::{PostboardError, Result};
use std::net::{IpAddr, SocketAddr};

/// Run the serve command to start the GraphQL server
pub async fn run(config_path: String, port: Option<u16>, database_url: Option<String>) -> Result<()> {
    tracing::info!("📖 Loading configuration from {}", config_path);

    let mut config = postboard::config::load_config_or_default(&config_path)?;
    apply_overrides(&mut config, port, database_url)?;

    tracing::info!("🗄️  Opening post store at {}", config.database.url);
    let store = postboard::store::connect(&config.database).await?;

    let schema = postboard::schema::build_schema(store);
    tracing::info!("✅ Schema built successfully");

    let bind: IpAddr = config
        .server
        .bind
        .parse()
        .map_err(|_| PostboardError::Config(format!("Invalid bind address '{}'", config.server.bind)))?;
    let addr = SocketAddr::new(bind, config.server.port);

    tracing::info!("🚀 GraphQL server running on http://localhost:{}", config.server.port);
    tracing::info!("📊 Playground: http://localhost:{}/graphql", config.server.port);
    tracing::info!("💡 Press Ctrl+C to stop the server");

    postboard::server::serve(schema, addr).await
}

fn apply_overrides(config: &mut Config, port: Option<u16>, database_url: Option<String>) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port;
    }

    if let Some(url) = database_url {
        config.database.url = url;
        config
            .database
            .validate()
            .map_err(PostboardError::Config)?;
    }

    Ok(())
}
