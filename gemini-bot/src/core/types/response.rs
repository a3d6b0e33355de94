//! Handler chain result type.

/// Handler result for the chain. `Reply` and `Answer` both end the chain with text for the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain without replying.
    Stop,
    /// Stop the chain and reply to the incoming message, quoting it.
    Reply(String),
    /// Stop the chain and send this text to the chat without quoting.
    Answer(String),
}

impl HandlerResponse {
    /// Outgoing text, if this response sends any.
    pub fn text(&self) -> Option<&str> {
        match self {
            HandlerResponse::Reply(text) | HandlerResponse::Answer(text) => Some(text),
            HandlerResponse::Continue | HandlerResponse::Stop => None,
        }
    }
}
