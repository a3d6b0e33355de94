//! Mapping from chat to session key.

use std::fmt;
use std::str::FromStr;

/// Whether chats get their own session or share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionScope {
    /// One session per chat id.
    #[default]
    PerChat,
    /// One session shared by every chat.
    Global,
}

/// Key of one session in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Chat(i64),
    Shared,
}

impl SessionScope {
    pub fn key_for(self, chat_id: i64) -> SessionKey {
        match self {
            SessionScope::PerChat => SessionKey::Chat(chat_id),
            SessionScope::Global => SessionKey::Shared,
        }
    }
}

impl FromStr for SessionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per_chat" | "per-chat" | "chat" => Ok(SessionScope::PerChat),
            "global" | "shared" => Ok(SessionScope::Global),
            other => Err(format!(
                "unknown session scope {:?} (expected per_chat or global)",
                other
            )),
        }
    }
}

impl fmt::Display for SessionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionScope::PerChat => f.write_str("per_chat"),
            SessionScope::Global => f.write_str("global"),
        }
    }
}
