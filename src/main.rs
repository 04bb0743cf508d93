use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pe_screener::api::YahooFinanceClient;
use pe_screener::models::Config;
use pe_screener::screener::Screener;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pe_screener=info")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("🚀 Starting undervalued stock screening");

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("❌ Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize Yahoo Finance client
    let client = match YahooFinanceClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to initialize Yahoo Finance client: {}", e);
            eprintln!("❌ Client Error: {}", e);
            std::process::exit(1);
        }
    };

    let screener = Screener::new(client, config);
    screener.run().await;

    Ok(())
}
