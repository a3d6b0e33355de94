//! Tests for startup wiring: component construction and config validation in `run_bot`.

use std::sync::Arc;
use std::time::Duration;

use gemini_bot::config::DEFAULT_LOG_FILE;
use gemini_bot::{
    build_bot_components_with_client, build_handler_chain, process_message, run_bot, BotConfig,
    SessionScope,
};
use llm_client::{EnvLlmConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

mod common;
use common::{fake_llm, make_message, MockBot};

fn config(telegram_api_url: Option<&str>) -> BotConfig {
    BotConfig {
        bot_token: "123456:test_bot_token".to_string(),
        telegram_api_url: telegram_api_url.map(str::to_string),
        log_file: DEFAULT_LOG_FILE.to_string(),
        session_scope: SessionScope::Global,
        llm: EnvLlmConfig {
            api_key: "test_key".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            timeout: Duration::from_secs(3),
            max_history_turns: Some(1),
        },
    }
}

/// **Test: Components honor the configured session scope and start with no sessions.**
#[tokio::test]
async fn test_components_use_configured_scope() {
    let llm = fake_llm();
    let components =
        build_bot_components_with_client(&config(Some("http://127.0.0.1:8081")), llm.clone())
            .unwrap();

    assert_eq!(components.conversations.scope(), SessionScope::Global);
    assert_eq!(components.conversations.session_count().await, 0);
    assert!(components.bot_username.read().await.is_none());

    let chain = build_handler_chain(
        components.conversations.clone(),
        components.bot_username.clone(),
    );
    assert_eq!(chain.len(), 3);

    let bot = MockBot::new();
    process_message(&chain, &bot, &make_message(1, "hi")).await;
    process_message(&chain, &bot, &make_message(2, "hi")).await;
    assert_eq!(components.conversations.session_count().await, 1);
    assert_eq!(llm.calls()[1].len(), 3);

    process_message(&chain, &bot, &make_message(3, "hi")).await;
    assert_eq!(llm.calls()[2].len(), 3);
    assert_eq!(components.conversations.history_len(3).await, 2);
}

/// **Test: An invalid Telegram API URL is rejected when building components.**
#[test]
fn test_invalid_api_url_fails_component_build() {
    let llm = Arc::new(common::FakeLlm::new());
    let result = build_bot_components_with_client(&config(Some("not a url")), llm);
    assert!(result.is_err());
}

/// **Test: run_bot fails fast on invalid configuration, before logging or polling start.**
#[tokio::test]
async fn test_run_bot_rejects_invalid_config() {
    let err = run_bot(config(Some("not a url"))).await.unwrap_err();
    assert!(err.to_string().contains("TELEGRAM_API_URL"));
}
