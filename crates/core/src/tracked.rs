//! Tracked pools with individual alert thresholds.

use serde::{Deserialize, Serialize};

/// Default minimum-APY threshold for newly tracked pools, in percent.
pub const DEFAULT_MIN_THRESHOLD_PCT: f64 = 20.0;

/// Watch-list key for a pool: `"<chain_id>-<address>"`.
#[inline]
pub fn pool_key(chain_id: u64, address: &str) -> String {
    format!("{}-{}", chain_id, address)
}

/// A pool the operator flagged for individualized monitoring.
///
/// Keyed by [`pool_key`] in the watch-list; the key is always
/// reconstructible from the chain id and market address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedPool {
    /// Descriptive name chosen by the operator.
    pub name: String,
    /// Alert when the implied APY drops strictly below this percentage.
    pub min_threshold: f64,
    /// Display name of the pool's network at the time it was added.
    pub chain: String,
}
