//! Application configuration.

use pendle_core::NetworkSet;
use pendle_feeds::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Application configuration, read from a JSON file at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Networks to poll each cycle.
    pub networks: Vec<NetworkSettings>,
    /// Global implied-APY threshold in percent.
    pub global_threshold_pct: f64,
    /// Seconds between polling cycles.
    pub poll_interval_secs: u64,
    /// Path of the persisted watch-list file.
    pub watchlist_path: String,
    /// Market-data client settings.
    pub market_data: MarketDataSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        let networks = NetworkSet::default()
            .iter()
            .map(|(chain_id, name)| NetworkSettings {
                chain_id,
                name: name.to_string(),
            })
            .collect();

        Self {
            networks,
            global_threshold_pct: 20.0,
            poll_interval_secs: 600,
            watchlist_path: "tracked_pools.json".to_string(),
            market_data: MarketDataSettings::default(),
        }
    }
}

impl AppConfig {
    /// Read the config file, falling back to defaults when it is missing
    /// or invalid. Configuration problems degrade, they never stop the
    /// monitor.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    info!(path, "Loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path, error = %e, "Invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path, "No config file found, using defaults");
                Self::default()
            }
        }
    }

    /// The monitored network set described by this config.
    pub fn network_set(&self) -> NetworkSet {
        let mut set = NetworkSet::empty();
        for network in &self.networks {
            set.add(network.chain_id, network.name.as_str());
        }
        set
    }

    /// Market-data client configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.market_data.base_url.clone(),
            timeout: Duration::from_secs(self.market_data.timeout_secs),
            max_retries: self.market_data.max_retries,
            retry_base_delay: Duration::from_secs(self.market_data.retry_base_delay_secs),
        }
    }
}

/// One monitored network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    pub chain_id: u64,
    pub name: String,
}

/// Market-data client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataSettings {
    /// Base URL of the Pendle API.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum retries for transient fetch failures.
    pub max_retries: u32,
    /// Base backoff delay between retries, in seconds.
    pub retry_base_delay_secs: u64,
}

impl Default for MarketDataSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_retries: 2,
            retry_base_delay_secs: 2,
        }
    }
}
