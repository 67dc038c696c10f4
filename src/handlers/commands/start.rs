//! Start command handler
//!
//! Handles /start, the entry point for new users and for referral deep links

use tracing::{debug, info};
use crate::utils::errors::Result;
use crate::utils::helpers::{escape_markdown, is_referral_code_charset, markdown_bold};
use crate::services::{ReferralOutcome, ServiceFactory};
use super::Reply;

/// Handle /start command, applying the referral code when one is given
pub async fn handle_start(services: &ServiceFactory, chat_id: i64, referral_code: &str) -> Result<Reply> {
    let accounts = &services.account_service;
    accounts.ensure_user(chat_id).await?;

    let referral_code = referral_code.trim();
    if !referral_code.is_empty() {
        if is_referral_code_charset(referral_code) {
            match accounts.apply_referral(chat_id, referral_code).await? {
                ReferralOutcome::Applied { referrer_chat_id } => {
                    info!(chat_id = chat_id, referrer_chat_id = referrer_chat_id, "Referral bonus granted");
                }
                outcome => {
                    debug!(chat_id = chat_id, outcome = ?outcome, "Referral code ignored");
                }
            }
        } else {
            debug!(chat_id = chat_id, "Malformed referral code ignored");
        }
    }

    Ok(welcome_reply(&services.settings.bot.username))
}

fn welcome_reply(bot_name: &str) -> Reply {
    let bot_name = bot_name.trim_start_matches('@');
    Reply::markdown(format!(
        "👋 Bienvenue sur {} {}\n\n{}\n\n{}",
        markdown_bold(bot_name),
        escape_markdown("!"),
        escape_markdown("💰 Gagne de l'argent en accomplissant des tâches TikTok."),
        escape_markdown("Tape /taches pour commencer !"),
    ))
}
