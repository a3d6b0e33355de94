//! Error types for the bot.
//!
//! [`BotError::Config`] is the only fatal class (startup). Everything else is per-message and
//! is turned into the generic failure reply at the message-handling boundary.

use llm_client::LlmError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// Missing or invalid settings; the process exits before serving.
    #[error("Config error: {0}")]
    Config(String),

    /// The model exchange failed (upstream, timeout, or empty response).
    #[error("Conversation error: {0}")]
    Conversation(#[from] LlmError),

    /// Telegram API call failed.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
