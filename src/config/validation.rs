//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{TikEarnError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_storage_config(&settings.storage)?;
    validate_rewards_config(&settings.rewards)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.trim().is_empty() {
        return Err(TikEarnError::Config(
            "Bot token is required".to_string()
        ));
    }

    if config.username.trim().is_empty() {
        return Err(TikEarnError::Config(
            "Bot username is required to build referral links".to_string()
        ));
    }

    if let Some(webhook_url) = config.webhook_url.as_deref().filter(|u| !u.trim().is_empty()) {
        let parsed = url::Url::parse(webhook_url)?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(TikEarnError::Config(
                format!("Webhook URL must use http or https, got: {}", parsed.scheme())
            ));
        }

        if config.port == 0 {
            return Err(TikEarnError::Config(
                "Webhook port must be greater than 0".to_string()
            ));
        }
    }

    Ok(())
}

/// Validate record store configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    if config.path.trim().is_empty() {
        return Err(TikEarnError::Config(
            "Storage path is required".to_string()
        ));
    }

    Ok(())
}

/// Validate reward amounts
fn validate_rewards_config(config: &super::RewardsConfig) -> Result<()> {
    if config.min_withdrawal == 0 {
        return Err(TikEarnError::Config(
            "Minimum withdrawal must be greater than 0".to_string()
        ));
    }

    if config.task_link.trim().is_empty() {
        return Err(TikEarnError::Config(
            "Task link is required".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(TikEarnError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(TikEarnError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}
