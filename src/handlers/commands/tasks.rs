//! Task command handler

use crate::utils::errors::Result;
use crate::utils::helpers::{escape_markdown, markdown_bold};
use crate::services::ServiceFactory;
use super::Reply;

/// Handle /taches command: every call grants a new task and its reward
pub async fn handle_tasks(services: &ServiceFactory, chat_id: i64) -> Result<Reply> {
    let grant = services.account_service.grant_task(chat_id).await?;

    Ok(Reply::markdown(format!(
        "🕹️ Nouvelle tâche :\nClique ici : {}\n\n✅ Tu gagnes {} pour l'avoir faite{}",
        escape_markdown(&grant.task.lien),
        markdown_bold(&format!("{} FC", grant.task.recompense)),
        escape_markdown("."),
    )))
}
