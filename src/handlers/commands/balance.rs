//! Balance command handler

use crate::utils::errors::Result;
use crate::utils::helpers::markdown_bold;
use crate::services::ServiceFactory;
use super::Reply;

/// Handle /solde command
pub async fn handle_balance(services: &ServiceFactory, chat_id: i64) -> Result<Reply> {
    let solde = services.account_service.balance(chat_id).await?;
    Ok(Reply::markdown(format!(
        "💼 Ton solde actuel : {}",
        markdown_bold(&format!("{} FC", solde))
    )))
}
