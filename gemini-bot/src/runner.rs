//! Bot entry point and the per-message boundary.

use crate::chain::HandlerChain;
use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, HandlerResponse, Message};
use crate::queue::ChatQueues;
use crate::replies;
use crate::telegram::run_repl;
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Runs one message through the chain and sends the outcome.
///
/// This is the error boundary: a chain error is logged and answered with
/// [`replies::FAILURE`]; nothing propagates to the polling loop. `Reply` quotes the incoming
/// message, `Answer` and the failure reply do not. Returns the text sent, if any.
#[instrument(skip_all, fields(chat_id = message.chat.id, user_id = message.user.id))]
pub async fn process_message(
    chain: &HandlerChain,
    bot: &dyn Bot,
    message: &Message,
) -> Option<String> {
    let (text, quote) = match chain.handle(message).await {
        Ok(HandlerResponse::Reply(text)) => (text, true),
        Ok(HandlerResponse::Answer(text)) => (text, false),
        Ok(_) => return None,
        Err(e) => {
            error!(error = %e, "Handler chain failed");
            (replies::FAILURE.to_string(), false)
        }
    };

    let sent = if quote {
        bot.reply_to(message, &text).await
    } else {
        bot.send_message(&message.chat, &text).await
    };
    if let Err(e) = sent {
        error!(error = %e, "Failed to send reply");
    }
    Some(text)
}

/// Main entry: validate config, init logging, build components, then long-poll until terminated.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(log_file = %config.log_file, "Initializing bot");

    let components = build_bot_components(&config)?;
    let handler_chain =
        build_handler_chain(components.conversations.clone(), components.bot_username.clone());
    let queues = Arc::new(ChatQueues::new(handler_chain, components.bot_adapter));

    info!("Bot started successfully");

    run_repl(components.teloxide_bot, queues, components.bot_username).await
}
