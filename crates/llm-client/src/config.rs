//! LLM settings loaded from environment variables.

use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

/// Gemini's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub system_prompt: Option<String>,
    /// Upper bound for one model round trip.
    pub timeout: Duration,
    /// Exchanges (user turn + model turn) a session keeps; `None` keeps all.
    pub max_history_turns: Option<usize>,
}

impl EnvLlmConfig {
    /// Loads from env: `GEMINI_API_KEY` required; `GEMINI_BASE_URL`, `GEMINI_MODEL`,
    /// `LLM_SYSTEM_PROMPT`, `LLM_TIMEOUT_SECS`, `LLM_MAX_HISTORY_TURNS` optional.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("GEMINI_API_KEY").context("GEMINI_API_KEY not set")?;
        if api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY is empty");
        }
        let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let timeout_secs = match env::var("LLM_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => bail!("LLM_TIMEOUT_SECS must be a positive integer, got {:?}", raw),
            },
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let max_history_turns = match env::var("LLM_MAX_HISTORY_TURNS") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(turns) if turns > 0 => Some(turns),
                _ => bail!("LLM_MAX_HISTORY_TURNS must be a positive integer, got {:?}", raw),
            },
            Err(_) => None,
        };
        Ok(Self {
            api_key,
            base_url,
            model,
            system_prompt,
            timeout: Duration::from_secs(timeout_secs),
            max_history_turns,
        })
    }
}
