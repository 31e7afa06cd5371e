//! Telegram transport: outbound messenger and the inbound polling loop.

mod messenger;
mod runner;

pub use messenger::TelegramMessenger;
pub use runner::run_polling;
