//! Test helpers module
//!
//! This module provides utilities and helpers for testing the TikEarnBot application.
//! It includes a mock Telegram server, test data and test context setup.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_context;
pub mod simple_test;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
