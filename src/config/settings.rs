//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub storage: StorageConfig,
    pub rewards: RewardsConfig,
    pub payments: PaymentsConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    /// Public username used to build referral links
    pub username: String,
    /// Public base URL; long polling is used when absent
    pub webhook_url: Option<String>,
    /// Listen port for the webhook server
    pub port: u16,
}

/// Record store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub path: String,
}

/// Ledger amounts and task parameters, in FC
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RewardsConfig {
    pub task_reward: u64,
    pub referral_bonus: u64,
    pub min_withdrawal: u64,
    pub task_link: String,
    pub allow_self_referral: bool,
}

/// Payout contact details shown to users
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentsConfig {
    pub contact: String,
    pub method: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for the daily rolling log file
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from defaults, configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let defaults = Settings::default();

        let settings = config::Config::builder()
            .set_default("bot.token", defaults.bot.token)?
            .set_default("bot.username", defaults.bot.username)?
            .set_default("bot.port", i64::from(defaults.bot.port))?
            .set_default("storage.path", defaults.storage.path)?
            .set_default("rewards.task_reward", defaults.rewards.task_reward as i64)?
            .set_default("rewards.referral_bonus", defaults.rewards.referral_bonus as i64)?
            .set_default("rewards.min_withdrawal", defaults.rewards.min_withdrawal as i64)?
            .set_default("rewards.task_link", defaults.rewards.task_link)?
            .set_default("rewards.allow_self_referral", defaults.rewards.allow_self_referral)?
            .set_default("payments.contact", defaults.payments.contact)?
            .set_default("payments.method", defaults.payments.method)?
            .set_default("logging.level", defaults.logging.level)?
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("TIKEARN")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("bot.token", std::env::var("BOT_TOKEN").ok())?
            .set_override_option("bot.webhook_url", std::env::var("WEBHOOK_URL").ok())?
            .set_override_option("bot.port", std::env::var("PORT").ok())?
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::TikEarnError> {
        super::validation::validate_settings(self)
    }

    /// Whether updates are received through a webhook instead of long polling
    pub fn is_webhook_mode(&self) -> bool {
        self.bot.webhook_url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                username: "TikEarnBot".to_string(),
                webhook_url: None,
                port: 8080,
            },
            storage: StorageConfig {
                path: "db.json".to_string(),
            },
            rewards: RewardsConfig {
                task_reward: 50,
                referral_bonus: 50,
                min_withdrawal: 100,
                task_link: "https://www.tiktok.com/@exemple/video/123456".to_string(),
                allow_self_referral: true,
            },
            payments: PaymentsConfig {
                contact: "@ton_username".to_string(),
                method: "Airtel Money".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
