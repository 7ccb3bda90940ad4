use clap::{Parser, Subcommand};
use postboard::error::Result;

mod cli;

#[derive(Parser)]
#[command(name = "postboard")]
#[command(version = "0.1.0")]
#[command(about = "A small GraphQL API for posts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a default configuration file
    Init {
        /// Output config file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Start GraphQL server
    Serve {
        /// Config file path (defaults are used if the file does not exist)
        #[arg(long, default_value = "postboard.toml")]
        config: String,

        /// Server port, overrides the config file
        #[arg(long)]
        port: Option<u16>,

        /// Database URL, overrides the config file ("memory" for a throwaway store)
        #[arg(long)]
        database_url: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema {
        /// Output file path (if not specified, outputs to stdout)
        #[arg(long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into())
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { output } => {
            cli::init::run(output)?;
        }
        Commands::Serve { config, port, database_url } => {
            cli::serve::run(config, port, database_url).await?;
        }
        Commands::Schema { output } => {
            cli::schema::run(output)?;
        }
    }

    Ok(())
}
