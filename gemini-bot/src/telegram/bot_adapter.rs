//! Wraps teloxide::Bot and implements [`crate::core::Bot`]. Long texts are split to fit
//! Telegram's limit; a reply quotes the original message in its first chunk only.

use crate::core::{parse_message_id, Bot as CoreBot, BotError, Chat, Message, Result};
use async_trait::async_trait;
use teloxide::{
    prelude::*,
    types::{ChatId, MessageId, ReplyParameters},
};
use tracing::debug;

use super::split::{split_message, TELEGRAM_MAX_LEN};

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    async fn send_chunk(&self, chat_id: i64, text: String, reply_to: Option<i32>) -> Result<()> {
        let request = self.bot.send_message(ChatId(chat_id), text);
        let request = match reply_to {
            Some(id) => request.reply_parameters(ReplyParameters::new(MessageId(id))),
            None => request,
        };
        request
            .await
            .map_err(|e| BotError::Transport(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        for chunk in split_message(text, TELEGRAM_MAX_LEN) {
            self.send_chunk(chat.id, chunk, None).await?;
        }
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let mut reply_to = Some(parse_message_id(&message.id)?);
        let chunks = split_message(text, TELEGRAM_MAX_LEN);
        debug!(chat_id = message.chat.id, chunks = chunks.len(), "sending reply");
        for chunk in chunks {
            self.send_chunk(message.chat.id, chunk, reply_to.take()).await?;
        }
        Ok(())
    }
}
