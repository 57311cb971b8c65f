//! Error types for market data fetches.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching a network's markets.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("failed to parse response body: {0}")]
    Parse(String),
}

impl MarketDataError {
    /// Returns true if this error is transient and likely to succeed on retry.
    pub fn is_transient(&self) -> bool {
        match self {
            MarketDataError::Request(e) => !e.is_builder(),
            MarketDataError::Status { status, .. } => {
                status.is_server_error() || *status == reqwest::StatusCode::TOO_MANY_REQUESTS
            }
            MarketDataError::Parse(_) => false,
        }
    }

    /// Suggested delay before the given retry attempt (1-based).
    pub fn retry_delay(&self, attempt: u32, base: Duration) -> Option<Duration> {
        if !self.is_transient() {
            return None;
        }
        // Exponential backoff: base, 2*base, 4*base, ...
        Some(base * 2u32.saturating_pow(attempt.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors_are_not_transient() {
        let err = MarketDataError::Parse("unexpected token".to_string());
        assert!(!err.is_transient());
        assert_eq!(err.retry_delay(1, Duration::from_secs(2)), None);
    }

    #[test]
    fn test_server_errors_are_transient() {
        let err = MarketDataError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://example.com".to_string(),
        };
        assert!(err.is_transient());
        assert_eq!(
            err.retry_delay(1, Duration::from_secs(2)),
            Some(Duration::from_secs(2))
        );
        assert_eq!(
            err.retry_delay(2, Duration::from_secs(2)),
            Some(Duration::from_secs(4))
        );
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        let err = MarketDataError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "https://example.com".to_string(),
        };
        assert!(!err.is_transient());
    }
}
