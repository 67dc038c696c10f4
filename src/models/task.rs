//! Task issuance model

use serde::{Deserialize, Serialize};
use super::user::{LedgerEntry, LedgerKind};

/// A task handed out by `/taches`; only its ledger entry is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskIssuance {
    pub id: String,
    pub lien: String,
    pub recompense: u64,
}

impl TaskIssuance {
    pub fn ledger_entry(&self) -> LedgerEntry {
        LedgerEntry {
            kind: LedgerKind::Task,
            id: self.id.clone(),
            gain: self.recompense,
        }
    }
}
