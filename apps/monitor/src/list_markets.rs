//! One-shot market listing.
//!
//! Prints every active market and its implied APY for each configured
//! network, then exits. Useful for picking pools to add to the watch-list.

mod config;

use clap::Parser;
use config::AppConfig;
use pendle_feeds::MarketDataClient;
use tracing::{warn, Level};

/// Pendle market listing CLI.
#[derive(Parser, Debug)]
#[command(name = "pendle-markets")]
#[command(about = "List all current Pendle markets and APYs per network", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.json")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::load_or_default(&args.config);
    let networks = config.network_set();
    let client = MarketDataClient::new(config.client_config())?;

    for (chain_id, name) in networks.iter() {
        let snapshot = match client.fetch(chain_id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(chain = name, chain_id, error = %e, "Skipping network");
                continue;
            }
        };

        println!(
            "\n=== AVAILABLE POOLS ON {} (Chain ID: {}) ===",
            name.to_uppercase(),
            chain_id
        );
        for market in &snapshot.markets {
            println!("Name: {}", market.name);
            println!("Address: {}", market.address);
            println!("Current implied APY: {:.2}%", market.implied_apy_pct());
            println!("Expiry: {}", market.expiry.as_deref().unwrap_or("Unknown"));
            println!("{}", "-".repeat(40));
        }
    }

    Ok(())
}
