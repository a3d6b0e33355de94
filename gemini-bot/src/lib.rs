//! # Gemini Telegram bot
//!
//! Relays Telegram chat messages to Gemini and replies with the model's answer. `/start` and
//! `/help` reply with fixed text, `/clear` resets the chat's conversation, anything else goes
//! to the model with the chat's history.
//!
//! Layers: [`core`] (types, Handler, Bot, errors, logging), [`chain`] (HandlerChain),
//! [`handlers`] (the command router), [`conversation`] (sessions), [`telegram`] (teloxide
//! adapters and REPL runner), [`runner`] (entry point and per-message error boundary).

pub mod chain;
pub mod cli;
pub mod command;
pub mod components;
pub mod config;
pub mod conversation;
pub mod core;
pub mod handlers;
pub mod queue;
pub mod replies;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli};

pub use core::{
    init_tracing, Bot, BotError, Chat, Handler, HandlerResponse, Message, Result, ToCoreMessage,
    ToCoreUser, User,
};

pub use chain::HandlerChain;
pub use command::{Command, COMMANDS};
pub use components::{
    build_bot_components, build_bot_components_with_client, build_handler_chain, BotComponents,
};
pub use config::BotConfig;
pub use conversation::{ConversationManager, SessionKey, SessionScope};
pub use handlers::{CommandHandler, ConversationHandler, LoggingHandler};
pub use queue::ChatQueues;
pub use runner::{process_message, run_bot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
