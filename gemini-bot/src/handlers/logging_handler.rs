//! Logs each exchange: the incoming text in before(), the outcome in after(); always continues.

use crate::core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use tracing::{info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response.text() {
            Some(text) => info!(
                chat_id = message.chat.id,
                reply_len = text.len(),
                reply_content = %text,
                "Replying"
            ),
            None => info!(chat_id = message.chat.id, response = ?response, "No reply"),
        }
        Ok(())
    }
}
