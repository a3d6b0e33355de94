//! Incoming message type for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// One inbound text message. Ephemeral: handled once, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport message id (Telegram numeric id as string); used to reply in-thread.
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Message text; empty for updates without text.
    pub content: String,
    pub created_at: DateTime<Utc>,
}
