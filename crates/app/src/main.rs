mod config;
mod server;

use clap::Parser;
use config::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment is used as-is
    let dotenv = dotenvy::dotenv();

    match Cli::parse().command {
        Commands::Start(config) => {
            server::init_tracing(config.debug);
            if let Ok(path) = dotenv {
                tracing::info!("Loaded environment from {}", path.display());
            }
            server::start_server(&config).await
        }
        Commands::Version => {
            println!("Plexdi Studio v{}", env!("CARGO_PKG_VERSION"));
            println!("Commission intake and notification service");
            Ok(())
        }
    }
}
