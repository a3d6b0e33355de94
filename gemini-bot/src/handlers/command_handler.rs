//! Fixed commands: `/start`, `/help`, `/clear`. Anything else continues down the chain.

use crate::command::{self, Command};
use crate::conversation::ConversationManager;
use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::replies;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct CommandHandler {
    conversations: Arc<ConversationManager>,
    /// Filled by `getMe` at startup; needed to accept `/cmd@bot_username` in groups.
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

impl CommandHandler {
    pub fn new(
        conversations: Arc<ConversationManager>,
        bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
    ) -> Self {
        Self {
            conversations,
            bot_username,
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let username = self.bot_username.read().await.clone();
        let Some(command) = command::parse(&message.content, username.as_deref()) else {
            return Ok(HandlerResponse::Continue);
        };
        info!(command = command.token(), "Command received");

        let reply = match command {
            Command::Start => replies::GREETING,
            Command::Help => replies::HELP,
            Command::Clear => {
                self.conversations.reset(message.chat.id).await;
                replies::CLEARED
            }
        };
        Ok(HandlerResponse::Reply(reply.to_string()))
    }
}
