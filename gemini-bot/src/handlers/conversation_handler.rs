//! Catch-all: forwards the text to the chat's model session and answers with the completion.

use crate::conversation::ConversationManager;
use crate::core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

pub struct ConversationHandler {
    conversations: Arc<ConversationManager>,
}

impl ConversationHandler {
    pub fn new(conversations: Arc<ConversationManager>) -> Self {
        Self { conversations }
    }
}

#[async_trait]
impl Handler for ConversationHandler {
    /// Always ends the chain: with the model's reply, or with the conversation error.
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = self
            .conversations
            .send(message.chat.id, &message.content)
            .await?;
        Ok(HandlerResponse::Answer(reply))
    }
}
