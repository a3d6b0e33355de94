//! Bot configuration, loaded from environment variables (after `.env` via dotenvy).

use crate::conversation::SessionScope;
use crate::core::{BotError, Result};
use llm_client::EnvLlmConfig;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/gemini-bot.log";

pub struct BotConfig {
    pub bot_token: String,
    /// Optional Telegram Bot API base URL (tests point it at a mock server).
    /// Env: `TELEGRAM_API_URL` or `TELOXIDE_API_URL`.
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    pub session_scope: SessionScope,
    pub llm: EnvLlmConfig,
}

impl BotConfig {
    /// Loads from env. `token` (from the CLI) overrides `TELEGRAM_BOT_TOKEN` / `BOT_TOKEN`.
    /// Missing secrets or unparsable values are [`BotError::Config`].
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .filter(|t| !t.trim().is_empty())
            .or_else(|| env::var("TELEGRAM_BOT_TOKEN").ok())
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| BotError::Config("TELEGRAM_BOT_TOKEN not set".to_string()))?;

        let llm = EnvLlmConfig::from_env().map_err(|e| BotError::Config(format!("{:#}", e)))?;

        let session_scope = match env::var("SESSION_SCOPE") {
            Ok(raw) => raw.parse::<SessionScope>().map_err(BotError::Config)?,
            Err(_) => SessionScope::default(),
        };

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            session_scope,
            llm,
        })
    }

    /// Checks that configured URLs parse.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(BotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        if reqwest::Url::parse(&self.llm.base_url).is_err() {
            return Err(BotError::Config(format!(
                "GEMINI_BASE_URL is not a valid URL: {}",
                self.llm.base_url
            )));
        }
        Ok(())
    }
}
