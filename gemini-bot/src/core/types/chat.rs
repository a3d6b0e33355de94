//! Chat identity type for core messages.

use serde::{Deserialize, Serialize};

/// Chat (private, group, or channel) identity. `id` keys per-chat conversation sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
