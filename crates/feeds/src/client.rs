//! REST client for the Pendle active-markets endpoint.
//!
//! One GET per monitored network per polling cycle. Fetches run strictly
//! sequentially; a failed network is logged and omitted so a partial result
//! never fails the whole cycle.

use crate::error::MarketDataError;
use pendle_core::{MarketSnapshot, NetworkSet};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Default base URL of the Pendle v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api-v2.pendle.finance/core/v1";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the market-data API.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Maximum retries for transient failures.
    pub max_retries: u32,
    /// Base delay for exponential backoff between retries.
    pub retry_base_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            max_retries: 2,
            retry_base_delay: Duration::from_secs(2),
        }
    }
}

/// HTTP client for fetching per-network market snapshots.
pub struct MarketDataClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl MarketDataClient {
    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self, MarketDataError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    fn markets_url(&self, chain_id: u64) -> String {
        format!("{}/{}/markets/active", self.config.base_url, chain_id)
    }

    /// Fetch the active markets for one network, retrying transient
    /// failures with exponential backoff.
    pub async fn fetch(&self, chain_id: u64) -> Result<MarketSnapshot, MarketDataError> {
        let mut attempt = 0u32;
        loop {
            match self.fetch_once(chain_id).await {
                Ok(snapshot) => return Ok(snapshot),
                Err(e) => {
                    attempt += 1;
                    match e.retry_delay(attempt, self.config.retry_base_delay) {
                        Some(delay) if attempt <= self.config.max_retries => {
                            warn!(
                                chain_id,
                                attempt,
                                error = %e,
                                "Fetch failed, retrying in {:?}",
                                delay
                            );
                            tokio::time::sleep(delay).await;
                        }
                        _ => return Err(e),
                    }
                }
            }
        }
    }

    async fn fetch_once(&self, chain_id: u64) -> Result<MarketSnapshot, MarketDataError> {
        let url = self.markets_url(chain_id);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::Status { status, url });
        }

        response
            .json::<MarketSnapshot>()
            .await
            .map_err(|e| MarketDataError::Parse(e.to_string()))
    }

    /// Fetch snapshots for every configured network, one at a time.
    ///
    /// Networks whose fetch fails are logged and left out of the result;
    /// the map is keyed by chain id in ascending order.
    pub async fn fetch_all(&self, networks: &NetworkSet) -> BTreeMap<u64, MarketSnapshot> {
        let mut snapshots = BTreeMap::new();

        for (chain_id, name) in networks.iter() {
            match self.fetch(chain_id).await {
                Ok(snapshot) => {
                    debug!(
                        chain = name,
                        chain_id,
                        markets = snapshot.markets.len(),
                        "Fetched markets"
                    );
                    snapshots.insert(chain_id, snapshot);
                }
                Err(e) => {
                    warn!(
                        chain = name,
                        chain_id,
                        error = %e,
                        "Error while fetching markets, skipping network this cycle"
                    );
                }
            }
        }

        snapshots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 2);
    }

    #[test]
    fn test_markets_url() {
        let client = MarketDataClient::new(ClientConfig {
            base_url: "https://api.example.com/v1".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            client.markets_url(42161),
            "https://api.example.com/v1/42161/markets/active"
        );
    }

    #[tokio::test]
    async fn test_fetch_all_with_no_networks() {
        let client = MarketDataClient::new(ClientConfig::default()).unwrap();
        let snapshots = client.fetch_all(&NetworkSet::empty()).await;
        assert!(snapshots.is_empty());
    }
}
