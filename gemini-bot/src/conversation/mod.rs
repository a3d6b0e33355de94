//! Conversation sessions: which session a chat talks to, and its lifecycle
//! (lazy create, send, reset).

mod manager;
mod scope;

pub use manager::ConversationManager;
pub use scope::{SessionKey, SessionScope};
