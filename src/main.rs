//! TikEarnBot Telegram Bot
//!
//! Main application entry point

use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{info, warn};

use TikEarnBot::{
    config::Settings,
    utils::logging,
    services::ServiceFactory,
    handlers::{create_handler, webhook_endpoint},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", TikEarnBot::info());

    // Initialize services
    let services = ServiceFactory::new(settings.clone());
    services.account_service.store().init().await?;

    let bot = Bot::new(&settings.bot.token);

    let mut dispatcher = Dispatcher::builder(bot.clone(), create_handler())
        .dependencies(dptree::deps![Arc::new(services)])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    match settings.bot.webhook_url.as_deref().filter(|_| settings.is_webhook_mode()) {
        Some(base_url) => {
            let url = webhook_endpoint(base_url)?;
            let address = SocketAddr::from(([0, 0, 0, 0], settings.bot.port));
            info!(url = %url, address = %address, "Starting bot in webhook mode...");

            let listener = webhooks::axum(bot, webhooks::Options::new(address, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
        None => {
            info!("Starting bot with polling mode...");
            dispatcher.dispatch().await;
        }
    }

    info!("TikEarnBot has been shut down.");

    Ok(())
}
