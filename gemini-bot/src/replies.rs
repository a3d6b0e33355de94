//! Fixed user-facing replies.

pub const GREETING: &str = "Welcome! I'm your Gemini-powered bot 🚀";

pub const HELP: &str = "/start - Start the bot
/clear - Clear the past conversation and reset context
/help - Show this help message";

pub const CLEARED: &str = "✅ Past conversation is cleared.";

/// Sent for any per-message failure (upstream error, timeout, empty model reply).
pub const FAILURE: &str = "Sorry, something went wrong processing your request. Please try again.";
