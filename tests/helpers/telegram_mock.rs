//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Telegram method names are case-insensitive; teloxide sends them capitalized
const SEND_MESSAGE_PATH: &str = r"(?i)^/bot[^/]+/sendmessage$";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self { success: true }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// A bot whose requests go to this mock server
    pub fn bot(&self) -> Bot {
        let api_url = reqwest_url(&self.server.uri());
        Bot::new(test_bot_token()).set_api_url(api_url)
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, chat_id: i64, config: MockResponseConfig) {
        let response_body = if config.success {
            json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "TikEarnBot",
                        "username": "TikEarnBot"
                    },
                    "chat": {
                        "id": chat_id,
                        "first_name": "Test",
                        "type": "private"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            })
        } else {
            json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })
        };

        let response = ResponseTemplate::new(if config.success { 200 } else { 400 })
            .set_body_json(response_body);

        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE_PATH))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of every sendMessage call received so far
    pub async fn sent_messages(&self) -> Vec<Value> {
        let received_requests = self.server.received_requests().await.unwrap_or_default();
        received_requests
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with("/sendmessage"))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }
}

fn reqwest_url(uri: &str) -> url::Url {
    url::Url::parse(uri).expect("mock server uri is a valid url")
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}
