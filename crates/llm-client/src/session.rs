//! Chat session: a conversation handle over an [`LlmClient`] with its own turn history.

use std::sync::Arc;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{ChatMessage, LlmClient, LlmError};

/// Conversation handle. Each successful [`ChatSession::send_message`] appends the user turn
/// and the model turn; a failed one leaves history untouched. Identity is the `id`, fresh per
/// session, so replacing a session is observable.
///
/// With a turn limit set, the oldest exchanges are dropped once history exceeds it.
pub struct ChatSession {
    id: Uuid,
    client: Arc<dyn LlmClient>,
    history: Vec<ChatMessage>,
    max_turns: Option<usize>,
}

/// Starts a session with the given history (usually empty).
pub fn start_chat(client: Arc<dyn LlmClient>, history: Vec<ChatMessage>) -> ChatSession {
    ChatSession::new(client, history)
}

impl ChatSession {
    pub fn new(client: Arc<dyn LlmClient>, history: Vec<ChatMessage>) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            history,
            max_turns: None,
        }
    }

    /// Keeps at most `max_turns` exchanges (2 × `max_turns` messages); `None` keeps all.
    pub fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self.trim_history();
        self
    }

    fn trim_history(&mut self) {
        if let Some(max_turns) = self.max_turns {
            let keep = max_turns.saturating_mul(2);
            if self.history.len() > keep {
                let excess = self.history.len() - keep;
                self.history.drain(..excess);
            }
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Sends `text` as a new user turn and returns the model's reply.
    ///
    /// History is only extended after the reply arrives, so dropping this future mid-flight
    /// (e.g. on timeout) leaves the session as it was.
    #[instrument(skip(self, text), fields(session_id = %self.id, history_len = self.history.len()))]
    pub async fn send_message(&mut self, text: &str) -> Result<String, LlmError> {
        let user_turn = ChatMessage::user(text);
        let mut messages = Vec::with_capacity(self.history.len() + 1);
        messages.extend(self.history.iter().cloned());
        messages.push(user_turn.clone());

        let reply = self.client.get_llm_response_with_messages(messages).await?;
        if reply.trim().is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        self.history.push(user_turn);
        self.history.push(ChatMessage::assistant(reply.clone()));
        self.trim_history();
        debug!(history_len = self.history.len(), "session history extended");
        Ok(reply)
    }
}
