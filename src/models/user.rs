//! User model

use serde::{Deserialize, Serialize};

/// An account, keyed by Telegram chat id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub chat_id: i64,
    /// Balance in FC
    pub solde: u64,
    /// Referral code, also used as the user's public handle
    pub id: String,
    #[serde(default)]
    pub historique: Vec<LedgerEntry>,
    /// Referral code of the referring user, set at most once
    #[serde(default)]
    pub parrain: Option<String>,
}

impl User {
    /// A fresh account with an empty ledger
    pub fn new(chat_id: i64, id: String) -> Self {
        Self {
            chat_id,
            solde: 0,
            id,
            historique: Vec::new(),
            parrain: None,
        }
    }

    /// Add `amount` to the balance, returning the new balance
    pub fn credit(&mut self, amount: u64) -> u64 {
        self.solde = self.solde.saturating_add(amount);
        self.solde
    }
}

/// Kind of a ledger entry. Kinds this bot does not write are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LedgerKind {
    Task,
    Other(String),
}

impl LedgerKind {
    pub fn as_str(&self) -> &str {
        match self {
            LedgerKind::Task => "tache",
            LedgerKind::Other(kind) => kind,
        }
    }
}

impl From<String> for LedgerKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "tache" => LedgerKind::Task,
            _ => LedgerKind::Other(kind),
        }
    }
}

impl From<LedgerKind> for String {
    fn from(kind: LedgerKind) -> Self {
        match kind {
            LedgerKind::Task => "tache".to_string(),
            LedgerKind::Other(kind) => kind,
        }
    }
}

/// One reward event in a user's history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "type")]
    pub kind: LedgerKind,
    pub id: String,
    pub gain: u64,
}
