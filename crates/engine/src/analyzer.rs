//! Implied-APY threshold analysis.
//!
//! One pure pass over the per-network snapshots of a polling cycle. No state
//! is kept between cycles, so a market that stays above the threshold alerts
//! again on every pass.

use pendle_core::{pool_key, MarketSnapshot, NetworkSet, TrackedPool};
use std::collections::BTreeMap;
use tracing::debug;

/// Format a threshold percentage the way operators enter them: whole
/// numbers keep one decimal ("20.0"), everything else prints as-is.
pub(crate) fn fmt_threshold(pct: f64) -> String {
    if pct.fract() == 0.0 {
        format!("{:.1}", pct)
    } else {
        pct.to_string()
    }
}

/// Result of one analysis pass: the two independent alert groups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Markets whose implied APY is strictly above the global threshold.
    pub high_apy: Vec<String>,
    /// Tracked pools whose implied APY dropped strictly below their own
    /// minimum threshold.
    pub tracked_drops: Vec<String>,
}

impl Analysis {
    pub fn is_empty(&self) -> bool {
        self.high_apy.is_empty() && self.tracked_drops.is_empty()
    }
}

/// Classify every market in the cycle's snapshots.
///
/// Both checks are independent: the same market can appear in both groups.
/// Comparisons are strict, so exact equality to a threshold never alerts.
/// Message order follows ascending chain id, then provider order within
/// each snapshot.
pub fn analyze(
    snapshots: &BTreeMap<u64, MarketSnapshot>,
    networks: &NetworkSet,
    tracked_pools: &BTreeMap<String, TrackedPool>,
    global_threshold_pct: f64,
) -> Analysis {
    let mut analysis = Analysis::default();

    for (&chain_id, snapshot) in snapshots {
        let chain_name = networks.label(chain_id);

        for market in &snapshot.markets {
            let implied_apy = market.implied_apy_pct();

            if implied_apy > global_threshold_pct {
                analysis.high_apy.push(format!(
                    "🚀 [{}] Pool {} has an implied APY of {:.2}%",
                    chain_name, market.name, implied_apy
                ));
            }

            let key = pool_key(chain_id, &market.address);
            if let Some(pool) = tracked_pools.get(&key) {
                if implied_apy < pool.min_threshold {
                    analysis.tracked_drops.push(format!(
                        "⚠️ [{}] Your monitored pool {} has dropped to {:.2}% (below {}%)",
                        chain_name,
                        pool.name,
                        implied_apy,
                        fmt_threshold(pool.min_threshold)
                    ));
                }
            }
        }
    }

    debug!(
        high_apy = analysis.high_apy.len(),
        tracked_drops = analysis.tracked_drops.len(),
        "Analysis pass complete"
    );

    analysis
}
