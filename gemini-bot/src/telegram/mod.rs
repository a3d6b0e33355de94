//! Telegram layer: type adapters, Bot implementation, reply splitting, REPL runner.

mod adapters;
mod bot_adapter;
mod runner;
mod split;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{prepare_bot, run_repl};
pub use split::{split_message, TELEGRAM_MAX_LEN};
