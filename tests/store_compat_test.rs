//! Record store compatibility tests
//!
//! Existing `db.json` files must keep working and round-trip untouched
//! collections.

mod helpers;

use helpers::*;

#[tokio::test]
async fn test_existing_document_is_used() {
    let ctx = TestContext::new();
    std::fs::write(ctx.store_path(), legacy_document().to_string()).unwrap();

    let reply = ctx.send(referrer_chat_id(), "/solde").await;
    assert!(reply.text.contains("*250 FC*"));

    let code = ctx.services.account_service.referral_code(referrer_chat_id()).await.unwrap();
    assert_eq!(code, "V1StGXR8_Z5jdHi6B-myT");
}

#[tokio::test]
async fn test_mutation_preserves_other_collections() {
    let ctx = TestContext::new();
    std::fs::write(ctx.store_path(), legacy_document().to_string()).unwrap();

    ctx.send(test_chat_id(), "/start V1StGXR8_Z5jdHi6B-myT").await;

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ctx.store_path()).unwrap()).unwrap();
    assert_eq!(raw["taches"], serde_json::json!([{"id": "legacy"}]));
    assert_eq!(raw["paiements"].as_array().map(Vec::len), Some(1));
    assert_eq!(raw["paiements"][0]["chatId"], referrer_chat_id());

    let users = raw["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["solde"], 300);
    assert_eq!(users[1]["parrain"], "V1StGXR8_Z5jdHi6B-myT");
    assert_eq!(users[1]["historique"], serde_json::json!([]));
}

#[tokio::test]
async fn test_init_creates_default_document() {
    let ctx = TestContext::new();

    ctx.services.account_service.store().init().await.unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(ctx.store_path()).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({"users": [], "taches": [], "paiements": []}));
}

#[tokio::test]
async fn test_init_keeps_existing_document() {
    let ctx = TestContext::new();
    std::fs::write(ctx.store_path(), legacy_document().to_string()).unwrap();

    let document = ctx.services.account_service.store().init().await.unwrap();

    assert_eq!(document.users.len(), 1);
    assert_eq!(document.paiements.len(), 1);
    assert_eq!(ctx.user(referrer_chat_id()).await.unwrap().solde, 250);
}
