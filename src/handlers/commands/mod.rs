//! Command handlers module
//!
//! This module contains handlers for all bot commands like /start, /solde, etc.
//! Handlers never talk to Telegram: they return a [`Reply`] for the transport
//! adapter to send.

pub mod start;
pub mod balance;
pub mod tasks;
pub mod withdraw;
pub mod pay;
pub mod referral;
pub mod help;

use teloxide::{types::ParseMode, utils::command::BotCommands};
use crate::utils::errors::Result;
use crate::services::ServiceFactory;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Commandes disponibles :")]
pub enum Command {
    #[command(description = "démarrer le bot (code de parrainage facultatif)")]
    Start(String),
    #[command(description = "afficher ton solde")]
    Solde,
    #[command(description = "obtenir une nouvelle tâche")]
    Taches,
    #[command(description = "demander un retrait de ton solde")]
    Retirer,
    #[command(description = "acheter des likes ou abonnés")]
    Payer,
    #[command(description = "afficher ton code de parrainage")]
    Moncode,
    #[command(description = "afficher cette aide")]
    Help,
}

impl Command {
    /// Command name without the leading slash, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start(_) => "start",
            Command::Solde => "solde",
            Command::Taches => "taches",
            Command::Retirer => "retirer",
            Command::Payer => "payer",
            Command::Moncode => "moncode",
            Command::Help => "help",
        }
    }
}

/// Outgoing text addressed to the chat that sent the command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub parse_mode: Option<ParseMode>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: None,
        }
    }

    /// Text already escaped for MarkdownV2
    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            parse_mode: Some(ParseMode::MarkdownV2),
        }
    }
}

/// Main command dispatcher
pub async fn handle_command(services: &ServiceFactory, chat_id: i64, cmd: Command) -> Result<Reply> {
    match cmd {
        Command::Start(code) => start::handle_start(services, chat_id, &code).await,
        Command::Solde => balance::handle_balance(services, chat_id).await,
        Command::Taches => tasks::handle_tasks(services, chat_id).await,
        Command::Retirer => withdraw::handle_withdraw(services, chat_id).await,
        Command::Payer => Ok(pay::handle_pay(services)),
        Command::Moncode => referral::handle_referral_code(services, chat_id).await,
        Command::Help => Ok(help::handle_help()),
    }
}
