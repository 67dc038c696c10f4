//! Help command handler

use teloxide::utils::command::BotCommands;
use super::{Command, Reply};

/// Handle /help command
pub fn handle_help() -> Reply {
    Reply::plain(Command::descriptions().to_string())
}
