//! Services module
//!
//! This module contains business logic services

pub mod account;

// Re-export commonly used services
pub use account::{AccountService, ReferralOutcome, TaskGrant, WithdrawalOutcome};

use std::sync::Arc;
use crate::config::settings::Settings;
use crate::database::RecordStore;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub account_service: AccountService,
    pub settings: Arc<Settings>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory backed by the configured record store
    pub fn new(settings: Settings) -> Self {
        let store = RecordStore::new(&settings.storage.path);
        let account_service = AccountService::new(store, settings.rewards.clone());

        Self {
            account_service,
            settings: Arc::new(settings),
        }
    }
}
