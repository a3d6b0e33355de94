use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use llm_client::{start_chat, ChatSession, LlmClient, LlmError};
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{SessionKey, SessionScope};

/// Owns the live sessions, one per [`SessionKey`].
///
/// Each session sits behind its own lock, so for a given key `send` and `reset` run one at a
/// time while different keys proceed independently. The map lock is only held to look up or
/// insert a slot, never across a model call.
///
/// Sessions are kept for the life of the process, one per chat seen. Their size is bounded by
/// [`ConversationManager::with_max_history_turns`]; without a limit, history grows until `/clear`.
pub struct ConversationManager {
    client: Arc<dyn LlmClient>,
    scope: SessionScope,
    timeout: Duration,
    max_history_turns: Option<usize>,
    sessions: Mutex<HashMap<SessionKey, Arc<Mutex<ChatSession>>>>,
}

impl ConversationManager {
    pub fn new(client: Arc<dyn LlmClient>, scope: SessionScope, timeout: Duration) -> Self {
        Self {
            client,
            scope,
            timeout,
            max_history_turns: None,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Limits every session created from now on to `max_turns` exchanges.
    pub fn with_max_history_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_history_turns = max_turns;
        self
    }

    pub fn scope(&self) -> SessionScope {
        self.scope
    }

    fn fresh_session(&self) -> ChatSession {
        start_chat(self.client.clone(), Vec::new()).with_max_turns(self.max_history_turns)
    }

    /// Returns the slot for `key`, creating an empty-history session on first use.
    async fn slot(&self, key: SessionKey) -> Arc<Mutex<ChatSession>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(self.fresh_session())))
            .clone()
    }

    async fn existing_slot(&self, chat_id: i64) -> Option<Arc<Mutex<ChatSession>>> {
        let key = self.scope.key_for(chat_id);
        self.sessions.lock().await.get(&key).cloned()
    }

    /// Sends `text` as a user turn on the chat's session and returns the model's reply.
    ///
    /// Bounded by the configured timeout. On any error the session's history is unchanged
    /// and the error propagates; there is no retry.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub async fn send(&self, chat_id: i64, text: &str) -> Result<String, LlmError> {
        let slot = self.slot(self.scope.key_for(chat_id)).await;
        let mut session = slot.lock().await;
        info!(
            session_id = %session.id(),
            history_len = session.history().len(),
            "forwarding message to model"
        );

        let outcome = tokio::time::timeout(self.timeout, session.send_message(text)).await;
        match outcome {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    session_id = %session.id(),
                    timeout_secs = self.timeout.as_secs(),
                    "model call timed out"
                );
                Err(LlmError::Timeout(self.timeout))
            }
        }
    }

    /// Discards the chat's session and installs a fresh one with empty history.
    /// Waits for an in-flight `send` on the same session to finish first.
    #[instrument(skip(self))]
    pub async fn reset(&self, chat_id: i64) {
        let key = self.scope.key_for(chat_id);
        let existing = {
            let mut sessions = self.sessions.lock().await;
            let current = sessions.get(&key).cloned();
            match current {
                Some(slot) => slot,
                None => {
                    let session = self.fresh_session();
                    info!(new_session_id = %session.id(), "session created by reset");
                    sessions.insert(key, Arc::new(Mutex::new(session)));
                    return;
                }
            }
        };

        let mut session = existing.lock().await;
        let old_id = session.id();
        *session = self.fresh_session();
        info!(old_session_id = %old_id, new_session_id = %session.id(), "session reset");
    }

    /// Id of the chat's current session, if one exists.
    pub async fn session_id(&self, chat_id: i64) -> Option<Uuid> {
        let slot = self.existing_slot(chat_id).await?;
        let session = slot.lock().await;
        Some(session.id())
    }

    /// Number of turns in the chat's current session (0 if none exists).
    pub async fn history_len(&self, chat_id: i64) -> usize {
        match self.existing_slot(chat_id).await {
            Some(slot) => slot.lock().await.history().len(),
            None => 0,
        }
    }

    /// Number of live sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}
