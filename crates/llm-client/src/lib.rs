//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait (one chat-completion round trip), the turn types sent
//! over it, and [`ChatSession`], which keeps a conversation's history and appends one
//! user turn and one model turn per successful exchange.
//!
//! [`OpenAILlmClient`] implements the trait over any OpenAI-compatible endpoint
//! (Gemini's compatibility API by default). Retry or rate limiting can be layered on by
//! wrapping an `Arc<dyn LlmClient>`; nothing here retries.

use async_trait::async_trait;

mod config;
mod error;
mod message;
mod openai_llm;
mod session;

pub use config::{
    EnvLlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
pub use error::LlmError;
pub use message::{ChatMessage, MessageRole};
pub use openai_llm::OpenAILlmClient;
pub use session::{start_chat, ChatSession};

/// One chat-completion round trip: the full message list in, the model's text out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply for `messages` (history followed by the new user turn).
    /// Implementations may prepend a system prompt. An empty string is a valid return;
    /// [`ChatSession`] classifies it as [`LlmError::EmptyResponse`].
    async fn get_llm_response_with_messages(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<String, LlmError>;
}
