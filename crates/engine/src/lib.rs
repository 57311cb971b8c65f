//! Implied-APY analysis for the Pendle monitor.
//!
//! Classifies each cycle's market snapshots against the global threshold
//! and the per-pool watch-list thresholds, and builds the per-cycle
//! notification digests.

pub mod analyzer;
pub mod digest;

pub use analyzer::{analyze, Analysis};
pub use digest::{cycle_timestamp, high_apy_digest, tracked_digest};
