//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod task;
pub mod payment;
pub mod document;

// Re-export commonly used models
pub use user::{User, LedgerEntry, LedgerKind};
pub use task::TaskIssuance;
pub use payment::PayoutRequest;
pub use document::StoreDocument;
