//! Outbound side of the transport.
//!
//! [`Bot`] is transport-agnostic; `TelegramBotAdapter` implements it via teloxide and tests
//! substitute a recording mock.

use crate::core::error::{BotError, Result};
use crate::core::types::{Chat, Message};
use async_trait::async_trait;

#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Replies to `message` in its chat, quoting it where the transport supports that.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
}

/// Parses a transport message id string into Telegram's numeric id.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Transport(format!("Invalid message_id: {}", s)))
}
