//! Shared test doubles: a recording [`Bot`], a scripted model client, and message builders.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use gemini_bot::{Bot, Chat, Message, Result, User};
use llm_client::{ChatMessage, LlmClient, LlmError};

/// Records every outbound text as `(chat_id, text)`; texts sent via `reply_to` are also
/// recorded as quoted.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<(i64, String)>>,
    quoted: Mutex<Vec<String>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(i64, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, t)| t).collect()
    }

    /// Texts that quoted the incoming message.
    pub fn quoted(&self) -> Vec<String> {
        self.quoted.lock().unwrap().clone()
    }

    /// Waits until at least `count` texts were sent; panics after 5 seconds.
    pub async fn wait_for_sent(&self, count: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.sent.lock().unwrap().len() < count {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("timed out waiting for outbound messages");
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push((chat.id, text.to_string()));
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.quoted.lock().unwrap().push(text.to_string());
        self.sent
            .lock()
            .unwrap()
            .push((message.chat.id, text.to_string()));
        Ok(())
    }
}

/// Model client with scripted outcomes. Each call pops the next scripted result; once the
/// script is empty it answers `"reply <n>"` where n counts calls from 1.
/// Records the messages of every call.
#[derive(Default)]
pub struct FakeLlm {
    script: Mutex<VecDeque<std::result::Result<String, LlmError>>>,
    calls: Mutex<Vec<Vec<ChatMessage>>>,
    delay: Option<Duration>,
}

impl FakeLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn push_reply(&self, text: &str) {
        self.script.lock().unwrap().push_back(Ok(text.to_string()));
    }

    pub fn push_error(&self, err: LlmError) {
        self.script.lock().unwrap().push_back(Err(err));
    }

    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for FakeLlm {
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> std::result::Result<String, LlmError> {
        let n = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(messages);
            calls.len()
        };
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.script.lock().unwrap().pop_front();
        scripted.unwrap_or_else(|| Ok(format!("reply {}", n)))
    }
}

pub fn fake_llm() -> Arc<FakeLlm> {
    Arc::new(FakeLlm::new())
}

/// Text message from user 123 in `chat_id`.
pub fn make_message(chat_id: i64, text: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 123,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: text.to_string(),
        created_at: Utc::now(),
    }
}
