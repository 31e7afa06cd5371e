//! Long-polling loop that feeds Telegram text messages into the
//! conversation handler.

use std::sync::Arc;

use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::Update;

use crate::application::handlers::ConversationHandler;
use crate::domain::foundation::ChatId;

/// Runs the bot until ctrl-c.
///
/// The dispatcher serializes updates per chat, so one chat's messages are
/// handled in arrival order while different chats proceed concurrently.
pub async fn run_polling(bot: Bot, handler: Arc<ConversationHandler>) {
    let tree = Update::filter_message().endpoint(on_message);

    tracing::info!("Starting Telegram long polling");

    Dispatcher::builder(bot, tree)
        .dependencies(dptree::deps![handler])
        .default_handler(|update| async move {
            tracing::debug!(?update, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::warn!("Dispatcher stopped");
}

async fn on_message(msg: Message, handler: Arc<ConversationHandler>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        tracing::debug!(chat = msg.chat.id.0, "Ignoring non-text message");
        return Ok(());
    };

    let chat = ChatId::new(msg.chat.id.0);
    if let Err(e) = handler.handle_text(chat, text).await {
        tracing::error!(chat = %chat, error = %e, "Failed to handle message");
    }

    Ok(())
}
