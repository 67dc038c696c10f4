//! Database module
//!
//! This module handles persistence of the bot state

pub mod store;

pub use store::RecordStore;
