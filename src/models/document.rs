//! Persisted document model
//!
//! The whole bot state lives in one JSON document with three collections.

use serde::{Deserialize, Serialize};
use super::{payment::PayoutRequest, user::User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub users: Vec<User>,
    /// Never written by the bot; kept so existing files round-trip unchanged
    #[serde(default)]
    pub taches: Vec<serde_json::Value>,
    #[serde(default)]
    pub paiements: Vec<PayoutRequest>,
}

impl StoreDocument {
    pub fn user_index_by_chat_id(&self, chat_id: i64) -> Option<usize> {
        self.users.iter().position(|u| u.chat_id == chat_id)
    }

    pub fn user_index_by_code(&self, code: &str) -> Option<usize> {
        self.users.iter().position(|u| u.id == code)
    }

    pub fn find_user(&self, chat_id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.chat_id == chat_id)
    }
}
