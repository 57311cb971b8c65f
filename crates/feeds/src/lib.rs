//! Market data collection from the Pendle REST API.
//!
//! - `client` - HTTP client with per-request timeout and bounded retry
//! - `error` - fetch error taxonomy

pub mod client;
pub mod error;

pub use client::{ClientConfig, MarketDataClient, DEFAULT_BASE_URL};
pub use error::MarketDataError;
