//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Length of generated referral codes
pub const REFERRAL_CODE_LENGTH: usize = 21;

/// Alphabet allowed in Telegram deep-link `start` parameters
const REFERRAL_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                  abcdefghijklmnopqrstuvwxyz\
                                  0123456789_-";

/// Generate a new UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Generate a random referral code usable as a deep-link payload
pub fn generate_referral_code() -> String {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..REFERRAL_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..REFERRAL_CHARSET.len());
            REFERRAL_CHARSET[idx] as char
        })
        .collect()
}

/// Check whether a string only uses characters a referral code can contain
pub fn is_referral_code_charset(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| REFERRAL_CHARSET.contains(&b))
}

/// Build the shareable `t.me` link that starts the bot with a referral code
pub fn referral_link(bot_username: &str, code: &str) -> String {
    format!("https://t.me/{}?start={}", bot_username.trim_start_matches('@'), code)
}

/// Escape text for Telegram MarkdownV2
pub fn escape_markdown(text: &str) -> String {
    text.replace('\\', r"\\")
        .replace('_', r"\_")
        .replace('*', r"\*")
        .replace('[', r"\[")
        .replace(']', r"\]")
        .replace('(', r"\(")
        .replace(')', r"\)")
        .replace('~', r"\~")
        .replace('`', r"\`")
        .replace('>', r"\>")
        .replace('#', r"\#")
        .replace('+', r"\+")
        .replace('-', r"\-")
        .replace('=', r"\=")
        .replace('|', r"\|")
        .replace('{', r"\{")
        .replace('}', r"\}")
        .replace('.', r"\.")
        .replace('!', r"\!")
}

/// Escape `text` and wrap it in MarkdownV2 bold markers
pub fn markdown_bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
