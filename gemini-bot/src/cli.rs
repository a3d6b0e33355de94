//! CLI parser and config loading. Running with no arguments starts the bot.

use crate::config::BotConfig;
use crate::core::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gemini-bot")]
#[command(about = "Telegram bot that relays chat messages to Gemini", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Telegram bot token; overrides TELEGRAM_BOT_TOKEN.
    #[arg(short, long)]
    pub token: Option<String>,
}

/// Load BotConfig from environment. If `token` is provided it overrides TELEGRAM_BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
