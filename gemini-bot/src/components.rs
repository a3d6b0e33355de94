//! Wiring: Telegram client, model client, conversation manager, and the handler chain.

use crate::chain::HandlerChain;
use crate::config::BotConfig;
use crate::conversation::ConversationManager;
use crate::core::{Bot as CoreBot, BotError, Result};
use crate::handlers::{CommandHandler, ConversationHandler, LoggingHandler};
use crate::telegram::TelegramBotAdapter;
use llm_client::{LlmClient, OpenAILlmClient};
use std::sync::Arc;
use tracing::{info, instrument};

/// Everything the runner needs, shared across message tasks.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    /// Outbound side used to send replies.
    pub bot_adapter: Arc<dyn CoreBot>,
    pub conversations: Arc<ConversationManager>,
    /// Filled by `getMe` when polling starts.
    pub bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
}

/// Builds the teloxide client, pointing it at `TELEGRAM_API_URL` when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|e| {
                BotError::Config(format!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Builds components with the Gemini client described by `config.llm`.
#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let llm_client: Arc<dyn LlmClient> = Arc::new(OpenAILlmClient::from_config(&config.llm));
    info!(
        model = %config.llm.model,
        base_url = %config.llm.base_url,
        session_scope = %config.session_scope,
        timeout_secs = config.llm.timeout.as_secs(),
        max_history_turns = ?config.llm.max_history_turns,
        "LLM client configured"
    );
    build_bot_components_with_client(config, llm_client)
}

/// Builds components around an injected model client (tests use a fake).
pub fn build_bot_components_with_client(
    config: &BotConfig,
    llm_client: Arc<dyn LlmClient>,
) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;
    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let conversations = Arc::new(
        ConversationManager::new(llm_client, config.session_scope, config.llm.timeout)
            .with_max_history_turns(config.llm.max_history_turns),
    );
    Ok(BotComponents {
        teloxide_bot,
        bot_adapter,
        conversations,
        bot_username: Arc::new(tokio::sync::RwLock::new(None)),
    })
}

/// The command router: logging → commands → conversation (catch-all).
pub fn build_handler_chain(
    conversations: Arc<ConversationManager>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(conversations.clone(), bot_username)))
        .add_handler(Arc::new(ConversationHandler::new(conversations)))
}
