//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the TikEarnBot application.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be kept alive
/// for as long as the process logs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match &config.file_path {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "tikearnbot.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(chat_id: i64, action: &str, details: Option<&str>) {
    info!(
        chat_id = chat_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a balance change on a user's account
pub fn log_ledger_event(chat_id: i64, kind: &str, amount: u64, balance: u64) {
    info!(
        chat_id = chat_id,
        kind = kind,
        amount = amount,
        balance = balance,
        "Ledger event recorded"
    );
}

/// Log a rejected withdrawal
pub fn log_withdrawal_rejected(chat_id: i64, balance: u64, minimum: u64) {
    warn!(
        chat_id = chat_id,
        balance = balance,
        minimum = minimum,
        "Withdrawal below minimum"
    );
}

/// Log record store operations
pub fn log_storage_operation(operation: &str, path: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            path = path,
            duration_ms = duration_ms,
            "Storage operation completed"
        );
    } else {
        error!(
            operation = operation,
            path = path,
            duration_ms = duration_ms,
            "Storage operation failed"
        );
    }
}
