//! Hotel search bot entry point.

use std::process::ExitCode;
use std::sync::Arc;

use teloxide::Bot;

use hotel_search_bot::adapters::{
    run_polling, HotelsApiClient, InMemorySessionStore, TelegramMessenger,
};
use hotel_search_bot::application::{ConversationHandler, ListingAggregator};
use hotel_search_bot::config::AppConfig;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    config.logging.init_tracing();

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return ExitCode::FAILURE;
    }

    let hotels = match HotelsApiClient::new(config.hotels.client_config()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::error!(error = %e, "Failed to build hotel API client");
            return ExitCode::FAILURE;
        }
    };

    let aggregator = ListingAggregator::new(hotels.clone(), config.hotels.currency.clone())
        .with_max_pages(config.hotels.max_pages);

    let bot = Bot::new(config.telegram.token());
    let handler = Arc::new(ConversationHandler::new(
        Arc::new(InMemorySessionStore::new()),
        hotels,
        Arc::new(aggregator),
        Arc::new(TelegramMessenger::new(bot.clone())),
    ));

    tracing::info!(
        api_host = %config.hotels.api_host,
        currency = %config.hotels.currency,
        "Hotel search bot starting"
    );

    run_polling(bot, handler).await;
    ExitCode::SUCCESS
}
