//! Referral code command handler

use crate::utils::errors::Result;
use crate::utils::helpers::{escape_markdown, markdown_bold, referral_link};
use crate::services::ServiceFactory;
use super::Reply;

/// Handle /moncode command
pub async fn handle_referral_code(services: &ServiceFactory, chat_id: i64) -> Result<Reply> {
    let code = services.account_service.referral_code(chat_id).await?;
    let link = referral_link(&services.settings.bot.username, &code);

    Ok(Reply::markdown(format!(
        "🔗 Ton code de parrainage : {}\nPartage ce lien :\n{}",
        markdown_bold(&code),
        escape_markdown(&link),
    )))
}
