//! Per-cycle alert digests.
//!
//! The scheduler delivers each alert group of a cycle as one message:
//! a timestamped header followed by the individual lines.

use crate::analyzer::fmt_threshold;

/// Timestamp used in digest headers, computed once per cycle.
pub fn cycle_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Digest for markets above the global threshold. `None` when empty.
pub fn high_apy_digest(timestamp: &str, threshold_pct: f64, lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    Some(format!(
        "🔔 {} - Pools with implied APY above {}%:\n\n{}",
        timestamp,
        fmt_threshold(threshold_pct),
        lines.join("\n")
    ))
}

/// Digest for tracked pools below their thresholds. `None` when empty.
pub fn tracked_digest(timestamp: &str, lines: &[String]) -> Option<String> {
    if lines.is_empty() {
        return None;
    }
    Some(format!(
        "🔔 {} - Monitored pool updates:\n\n{}",
        timestamp,
        lines.join("\n")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_high_apy_digest_format() {
        let lines = vec![
            "🚀 [Ethereum] Pool PT-X has an implied APY of 25.00%".to_string(),
            "🚀 [Base] Pool PT-Y has an implied APY of 31.40%".to_string(),
        ];
        let digest = high_apy_digest("2026-08-27 12:00:00", 20.0, &lines).unwrap();
        assert_eq!(
            digest,
            "🔔 2026-08-27 12:00:00 - Pools with implied APY above 20.0%:\n\n\
             🚀 [Ethereum] Pool PT-X has an implied APY of 25.00%\n\
             🚀 [Base] Pool PT-Y has an implied APY of 31.40%"
        );
    }

    #[test]
    fn test_tracked_digest_format() {
        let lines = vec![
            "⚠️ [Ethereum] Your monitored pool PT-X has dropped to 25.00% (below 30.0%)"
                .to_string(),
        ];
        let digest = tracked_digest("2026-08-27 12:00:00", &lines).unwrap();
        assert!(digest.starts_with("🔔 2026-08-27 12:00:00 - Monitored pool updates:\n\n"));
        assert!(digest.ends_with("(below 30.0%)"));
    }

    #[test]
    fn test_empty_groups_produce_no_digest() {
        assert_eq!(high_apy_digest("ts", 20.0, &[]), None);
        assert_eq!(tracked_digest("ts", &[]), None);
    }
}
