//! Test data helpers
//!
//! Chat identifiers and documents shared by the integration tests.

use serde_json::{json, Value};

/// Chat id of the user driving most scenarios
pub fn test_chat_id() -> i64 {
    987654321
}

/// Chat id of a user who shares their referral code
pub fn referrer_chat_id() -> i64 {
    111222333
}

/// Chat id of a third, unrelated user
pub fn other_chat_id() -> i64 {
    444555666
}

/// A document as written by an older deployment, with a legacy `taches` entry
pub fn legacy_document() -> Value {
    json!({
        "users": [
            {
                "chatId": referrer_chat_id(),
                "solde": 250,
                "id": "V1StGXR8_Z5jdHi6B-myT",
                "historique": [
                    {"type": "tache", "id": "abc", "gain": 50}
                ],
                "parrain": null
            }
        ],
        "taches": [{"id": "legacy"}],
        "paiements": [
            {
                "id": "p-1",
                "chatId": referrer_chat_id(),
                "montant": 100,
                "date": "2024-05-01T10:00:00.000Z"
            }
        ]
    })
}
