//! Command table and parsing.
//!
//! A command is the leading whitespace-delimited token of the text, matched exactly
//! (case-sensitive) against [`COMMANDS`]. In group chats Telegram appends `@bot_username`
//! to the token; that suffix is accepted only when it names this bot.

/// The bot's commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Clear,
}

/// Token, command, and menu description. Tokens are disjoint, so order is irrelevant.
pub const COMMANDS: [(&str, Command, &str); 3] = [
    ("/start", Command::Start, "Start the bot"),
    ("/help", Command::Help, "Show this help message"),
    ("/clear", Command::Clear, "Clear the past conversation and reset context"),
];

impl Command {
    /// The token including the leading slash.
    pub fn token(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, c, _)| *c == self)
            .map(|(t, _, _)| *t)
            .unwrap_or_default()
    }

    pub fn description(self) -> &'static str {
        COMMANDS
            .iter()
            .find(|(_, c, _)| *c == self)
            .map(|(_, _, d)| *d)
            .unwrap_or_default()
    }
}

/// Returns the command `text` starts with, if any.
///
/// `bot_username` is this bot's username (without `@`) once known. A `/cmd@name` token matches
/// only if `name` equals it case-insensitively; while the username is unknown, suffixed tokens
/// never match.
pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Command> {
    let token = text.split_whitespace().next()?;
    if !text.starts_with(token) {
        return None;
    }

    let (name, mention) = match token.split_once('@') {
        Some((name, mention)) => (name, Some(mention)),
        None => (token, None),
    };
    if let Some(mention) = mention {
        match bot_username {
            Some(username) if mention.eq_ignore_ascii_case(username) => {}
            _ => return None,
        }
    }

    COMMANDS
        .iter()
        .find(|(t, _, _)| *t == name)
        .map(|(_, c, _)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_tokens() {
        assert_eq!(parse("/start", None), Some(Command::Start));
        assert_eq!(parse("/help", None), Some(Command::Help));
        assert_eq!(parse("/clear", None), Some(Command::Clear));
    }

    #[test]
    fn test_parse_ignores_trailing_arguments() {
        assert_eq!(parse("/clear now please", None), Some(Command::Clear));
        assert_eq!(parse("/help\nmore", None), Some(Command::Help));
    }

    #[test]
    fn test_parse_is_case_sensitive_and_exact() {
        assert_eq!(parse("/Start", None), None);
        assert_eq!(parse("/HELP", None), None);
        assert_eq!(parse("/starter", None), None);
        assert_eq!(parse("/unknown", None), None);
    }

    #[test]
    fn test_parse_command_must_lead() {
        assert_eq!(parse(" /start", None), None);
        assert_eq!(parse("please /clear", None), None);
        assert_eq!(parse("Hello", None), None);
        assert_eq!(parse("", None), None);
        assert_eq!(parse("   ", None), None);
    }

    #[test]
    fn test_parse_bot_mention_suffix() {
        assert_eq!(parse("/start@gemini_bot", Some("gemini_bot")), Some(Command::Start));
        assert_eq!(parse("/clear@Gemini_Bot", Some("gemini_bot")), Some(Command::Clear));
        assert_eq!(parse("/start@other_bot", Some("gemini_bot")), None);
        assert_eq!(parse("/start@gemini_bot", None), None);
    }

    #[test]
    fn test_token_and_description() {
        assert_eq!(Command::Clear.token(), "/clear");
        assert_eq!(Command::Start.description(), "Start the bot");
        for (token, command, _) in COMMANDS {
            assert_eq!(command.token(), token);
        }
    }
}
