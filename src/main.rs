use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use saturn::backend::BackendClient;
use saturn::{chat, constants};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Start an interactive conversation with the Saturn backend.
    Chat {
        #[arg(long, help = "Backend query endpoint (defaults to SATURN_URL).")]
        endpoint: Option<String>,
    },
    /// Send a single query and print the reply, without the interactive loop.
    Ask {
        query: String,
        #[arg(long, help = "Backend query endpoint (defaults to SATURN_URL).")]
        endpoint: Option<String>,
    },
}

fn resolve_endpoint(endpoint: Option<String>) -> String {
    endpoint.unwrap_or_else(|| constants::SATURN_URL.clone())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (for SATURN_URL and friends)
    dotenvy::dotenv().ok();

    // Reads log level from RUST_LOG (e.g. RUST_LOG=info,saturn=debug)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    info!("Saturn client starting with command: {:?}", cli.command);

    match cli.command {
        Commands::Chat { endpoint } => {
            let client = BackendClient::new(resolve_endpoint(endpoint));
            chat::run(&client).await.context("Conversation failed")?;
        }
        Commands::Ask { query, endpoint } => {
            let client = BackendClient::new(resolve_endpoint(endpoint));
            let response = client.query(&query).await.context("Query failed")?;
            println!("{response}");
        }
    }

    Ok(())
}
