//! Bot handlers module
//!
//! This module contains the Telegram bot handlers:
//! - Command handlers producing replies from account operations
//! - The teloxide adapter that receives updates and sends replies

pub mod commands;
pub mod telegram;

// Re-export commonly used handler functions
pub use commands::{handle_command, Command, Reply};
pub use telegram::{create_handler, send_reply, webhook_endpoint};
