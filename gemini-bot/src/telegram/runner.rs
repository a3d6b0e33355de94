//! REPL runner: long-polls Telegram, converts each text message to a core [`Message`] and hands
//! it to its chat's queue, so a slow model call never blocks other chats.

use crate::command::COMMANDS;
use crate::core::ToCoreMessage;
use crate::queue::ChatQueues;
use anyhow::Result;
use std::sync::Arc;
use teloxide::{prelude::*, types::BotCommand};
use tracing::{info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Learns the bot username via `getMe` and registers the command menu. Both are best effort.
#[instrument(skip(bot, bot_username))]
pub async fn prepare_bot(bot: &teloxide::Bot, bot_username: &tokio::sync::RwLock<Option<String>>) {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed; commands with @suffix will not match"),
    }

    let commands: Vec<BotCommand> = COMMANDS
        .iter()
        .map(|(_, command, _)| {
            BotCommand::new(command.token().trim_start_matches('/'), command.description())
        })
        .collect();
    if let Err(e) = bot.set_my_commands(commands).await {
        warn!(error = %e, "setMyCommands failed");
    }
}

/// Starts long polling. Text messages are enqueued on `queues` in arrival order; non-text
/// updates are logged and ignored.
#[instrument(skip(bot, queues, bot_username))]
pub async fn run_repl(
    bot: teloxide::Bot,
    queues: Arc<ChatQueues>,
    bot_username: Arc<tokio::sync::RwLock<Option<String>>>,
) -> Result<()> {
    prepare_bot(&bot, &bot_username).await;

    info!("Polling for updates");
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let queues = queues.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message, ignored"
                );
            } else {
                queues.enqueue(core_msg);
            }
            respond(())
        }
    })
    .await;

    Ok(())
}
