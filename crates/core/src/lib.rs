//! Core data types for the Pendle APY monitor.

pub mod market;
pub mod network;
pub mod tracked;

pub use market::*;
pub use network::*;
pub use tracked::*;
