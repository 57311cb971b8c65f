//! Market data wire types for the Pendle active-markets endpoint.

use serde::Deserialize;

/// One network's markets for a single polling cycle.
///
/// Ephemeral: lives only for the analysis pass that consumes it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub markets: Vec<Market>,
}

/// A single active market (pool / Principal Token).
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    pub address: String,
    #[serde(default = "unknown_name")]
    pub name: String,
    #[serde(default)]
    pub details: MarketDetails,
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Nested `details` object carrying the yield metrics.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketDetails {
    /// Implied APY as a raw fraction (0.25 = 25%). Defaults to 0 when the
    /// provider omits the field.
    #[serde(rename = "impliedApy", default)]
    pub implied_apy: f64,
}

fn unknown_name() -> String {
    "Unknown".to_string()
}

impl Market {
    /// Implied APY as a percentage.
    #[inline]
    pub fn implied_apy_pct(&self) -> f64 {
        self.details.implied_apy * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_snapshot_parses_provider_body() {
        let body = r#"{
            "markets": [
                {
                    "address": "0xabc",
                    "name": "PT-X",
                    "details": { "impliedApy": 0.25 },
                    "expiry": "2026-12-31T00:00:00.000Z"
                }
            ]
        }"#;
        let snapshot: MarketSnapshot = serde_json::from_str(body).unwrap();
        assert_eq!(snapshot.markets.len(), 1);

        let market = &snapshot.markets[0];
        assert_eq!(market.address, "0xabc");
        assert_eq!(market.name, "PT-X");
        assert_eq!(market.implied_apy_pct(), 25.0);
        assert_eq!(market.expiry.as_deref(), Some("2026-12-31T00:00:00.000Z"));
    }

    #[test]
    fn test_missing_fields_default() {
        // Absent impliedApy is treated as 0, absent name as "Unknown".
        let body = r#"{ "markets": [ { "address": "0xdef" } ] }"#;
        let snapshot: MarketSnapshot = serde_json::from_str(body).unwrap();

        let market = &snapshot.markets[0];
        assert_eq!(market.name, "Unknown");
        assert_eq!(market.implied_apy_pct(), 0.0);
        assert_eq!(market.expiry, None);
    }

    #[test]
    fn test_empty_body_yields_no_markets() {
        let snapshot: MarketSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.markets.is_empty());
    }
}
