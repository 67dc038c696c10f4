//! Test context for unified test setup
//!
//! This module provides a test context backed by a temporary record store
//! so each test runs the real services against its own JSON document.

use std::path::PathBuf;
use tempfile::TempDir;
use TikEarnBot::config::Settings;
use TikEarnBot::handlers::{handle_command, Command, Reply};
use TikEarnBot::models::{StoreDocument, User};
use TikEarnBot::services::ServiceFactory;

use super::simple_test::init_test_env;
use super::telegram_mock::test_bot_token;

/// Unified test context that manages all test components
pub struct TestContext {
    pub services: ServiceFactory,
    pub settings: Settings,
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Create a new test context with default rewards
    pub fn new() -> Self {
        Self::new_with_settings(|_| {})
    }

    /// Create a new test context, letting the caller adjust settings
    pub fn new_with_settings(configure: impl FnOnce(&mut Settings)) -> Self {
        init_test_env();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut settings = Settings::default();
        settings.bot.token = test_bot_token();
        settings.storage.path = temp_dir.path().join("db.json").display().to_string();
        configure(&mut settings);

        let services = ServiceFactory::new(settings.clone());

        Self {
            services,
            settings,
            temp_dir,
        }
    }

    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.settings.storage.path)
    }

    /// Run `text` through command parsing and dispatch for `chat_id`
    pub async fn send(&self, chat_id: i64, text: &str) -> Reply {
        let cmd = parse_command(text);
        handle_command(&self.services, chat_id, cmd)
            .await
            .expect("command should succeed")
    }

    /// Current persisted document
    pub async fn document(&self) -> StoreDocument {
        self.services
            .account_service
            .store()
            .load()
            .await
            .expect("document should load")
    }

    /// Persisted user for `chat_id`, if any
    pub async fn user(&self, chat_id: i64) -> Option<User> {
        self.document().await.find_user(chat_id).cloned()
    }
}

/// Parse a chat message the way the dispatcher does
pub fn parse_command(text: &str) -> Command {
    use teloxide::utils::command::BotCommands;
    Command::parse(text, "TikEarnBot").expect("text should be a known command")
}
