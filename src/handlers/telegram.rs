//! Telegram transport adapter
//!
//! Builds the teloxide update handler, turns incoming commands into calls to
//! the command dispatcher and sends the resulting replies.

use std::sync::Arc;
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Message, Update};
use tracing::{debug, error, warn};
use url::Url;
use crate::services::ServiceFactory;
use crate::utils::errors::{Result, TikEarnError};
use crate::utils::logging::log_user_action;
use super::commands::{handle_command, Command, Reply};

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = std::result::Result<(), HandlerError>;

/// Path the webhook listener serves updates on
pub const WEBHOOK_PATH: &str = "webhook";

/// Create the main update handler
pub fn create_handler() -> UpdateHandler<HandlerError> {
    dptree::entry().branch(
        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .endpoint(handle_commands),
            )
            .branch(dptree::endpoint(handle_other_messages)),
    )
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: Command,
    services: Arc<ServiceFactory>,
) -> HandlerResult {
    let chat_id = msg.chat.id.0;
    log_user_action(chat_id, cmd.name(), None);

    let result = match handle_command(&services, chat_id, cmd).await {
        Ok(reply) => send_reply(&bot, msg.chat.id, reply).await.map(|_| ()),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        report_command_error(chat_id, &e);
        return Err(e.into());
    }

    Ok(())
}

/// Log a failed command; transient failures only warrant a warning
fn report_command_error(chat_id: i64, e: &TikEarnError) {
    if e.is_recoverable() {
        warn!(chat_id = chat_id, error = %e, severity = %e.severity(), "Command failed");
    } else {
        error!(chat_id = chat_id, error = %e, severity = %e.severity(), "Error handling command");
    }
}

/// Messages that are not commands get no answer
async fn handle_other_messages(msg: Message) -> HandlerResult {
    debug!(chat_id = msg.chat.id.0, "Ignoring non-command message");
    Ok(())
}

/// Send a reply to `chat_id`, applying its parse mode
pub async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<Message> {
    let mut request = bot.send_message(chat_id, reply.text);
    if let Some(mode) = reply.parse_mode {
        request = request.parse_mode(mode);
    }

    Ok(request.await?)
}

/// Full webhook URL for a public base URL
pub fn webhook_endpoint(base_url: &str) -> Result<Url> {
    let base = base_url.trim();
    let base = if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    };

    Ok(Url::parse(&base)?.join(WEBHOOK_PATH)?)
}
