//! Pendle multi-chain implied APY monitor.
//!
//! Polls the Pendle market-data API for every configured network, classifies
//! each market against the global and watch-list thresholds, and delivers
//! the per-cycle alert digests to Telegram.

mod config;

use clap::Parser;
use config::AppConfig;
use pendle_alerts::{TelegramNotifier, WatchlistStore};
use pendle_core::NetworkSet;
use pendle_engine::{analyze, cycle_timestamp, high_apy_digest, tracked_digest};
use pendle_feeds::MarketDataClient;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Pendle APY monitor CLI.
#[derive(Parser, Debug)]
#[command(name = "pendle-monitor")]
#[command(about = "Pendle multi-chain implied APY monitoring bot", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.json")]
    config: String,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args.log_level);
    let _ = dotenvy::dotenv();

    let config = AppConfig::load_or_default(&args.config);
    let networks = config.network_set();

    info!("Pendle multi-chain implied APY monitoring bot started");
    info!(
        "Monitored networks: {}",
        networks
            .iter()
            .map(|(chain_id, name)| format!("{} (ID: {})", name, chain_id))
            .collect::<Vec<_>>()
            .join(", ")
    );
    info!("Press Ctrl+C to terminate");

    // Credentials are not validated here; a missing token or chat id
    // surfaces as a logged failure on the first notification attempt.
    let token = std::env::var("TELEGRAM_TOKEN").unwrap_or_default();
    let chat_id = std::env::var("CHAT_ID").unwrap_or_default();
    let notifier = TelegramNotifier::new(&token, chat_id);

    let client = MarketDataClient::new(config.client_config())?;

    // A corrupt watch-list file fails here, before the first cycle; an
    // absent one just starts the store empty.
    let watchlist = WatchlistStore::load(&config.watchlist_path)?;

    run_monitor_loop(&client, &networks, &watchlist, &notifier, &config).await;

    info!("Bot terminated");
    Ok(())
}

/// The polling loop: fetch-all, analyze, notify, sleep, repeat until
/// interrupted.
async fn run_monitor_loop(
    client: &MarketDataClient,
    networks: &NetworkSet,
    watchlist: &WatchlistStore,
    notifier: &TelegramNotifier,
    config: &AppConfig,
) {
    let interval = Duration::from_secs(config.poll_interval_secs);

    loop {
        let snapshots = client.fetch_all(networks).await;
        let analysis = analyze(
            &snapshots,
            networks,
            watchlist.pools(),
            config.global_threshold_pct,
        );

        let timestamp = cycle_timestamp();
        if let Some(digest) =
            high_apy_digest(&timestamp, config.global_threshold_pct, &analysis.high_apy)
        {
            notifier.notify(&digest).await;
        }
        if let Some(digest) = tracked_digest(&timestamp, &analysis.tracked_drops) {
            notifier.notify(&digest).await;
        }

        info!(
            "Waiting, next check in {} seconds",
            config.poll_interval_secs
        );
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, shutting down");
                break;
            }
        }
    }
}
