//! # OpenAI-compatible chat client
//!
//! Thin wrapper around [async-openai] for non-streamed chat completion against any
//! OpenAI-compatible endpoint. The bot points it at Google's Gemini compatibility API.
//! Provides token masking for safe logging.

use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 chars or fewer are fully masked.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Chat completion client. Cheap to clone; the underlying HTTP client is shared.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    /// Masked once at construction; the raw key never reaches the logs.
    masked_key: String,
}

impl OpenAIClient {
    /// Builds a client for a custom base URL
    /// (e.g. `https://generativelanguage.googleapis.com/v1beta/openai`).
    /// Requests go to `{base_url}/chat/completions`.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let masked_key = mask_token(&api_key);
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url.trim_end_matches('/').to_string());
        Self {
            client: Arc::new(Client::with_config(config)),
            masked_key,
        }
    }

    /// Sends one chat completion request and returns the first choice's text.
    ///
    /// A choice without content yields an empty string; the caller decides whether that is an
    /// error. A response without any choice is an error.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
    ) -> anyhow::Result<String> {
        tracing::info!(
            model = %model,
            message_count = messages.len(),
            api_key = %self.masked_key,
            "chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string(&request) {
            tracing::debug!(request_json = %json, "chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        match response.choices.into_iter().next() {
            Some(choice) => {
                tracing::debug!(finish_reason = ?choice.finish_reason, "chat_completion choice");
                Ok(choice.message.content.unwrap_or_default())
            }
            None => anyhow::bail!("chat_completion response has no choices"),
        }
    }
}
