//! Telegram notification and watch-list persistence.
//!
//! This crate provides:
//! - Telegram delivery of per-cycle alert digests
//! - the file-backed watch-list of tracked pools

pub mod store;
pub mod telegram;

pub use store::{StoreError, WatchlistStore};
pub use telegram::{TelegramError, TelegramNotifier};
