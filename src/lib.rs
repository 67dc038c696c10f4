//! TikEarnBot Telegram Bot
//!
//! A Telegram bot where users earn FC credits by completing tasks, track
//! their balance, request withdrawals and refer other users for a bonus.
//! All state lives in a single JSON document on disk.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{TikEarnError, Result};

// Re-export main components for easy access
pub use database::RecordStore;
pub use services::{AccountService, ServiceFactory};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
