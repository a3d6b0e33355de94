//! Errors from a chat exchange with the model.

use std::time::Duration;
use thiserror::Error;

/// Failure of one `send`: the remote call failed, took too long, or produced no text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Network, auth, quota/rate-limit, or malformed-response failure.
    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Upstream timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The call succeeded but the model returned no usable text.
    #[error("Empty response from model")]
    EmptyResponse,
}

impl LlmError {
    /// True for failures of the remote call itself (including timeouts).
    pub fn is_upstream(&self) -> bool {
        matches!(self, LlmError::Upstream(_) | LlmError::Timeout(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            LlmError::Upstream("connection refused".to_string()).to_string(),
            "Upstream error: connection refused"
        );
        assert_eq!(
            LlmError::Timeout(Duration::from_secs(60)).to_string(),
            "Upstream timed out after 60s"
        );
        assert_eq!(LlmError::EmptyResponse.to_string(), "Empty response from model");
    }

    #[test]
    fn test_is_upstream() {
        assert!(LlmError::Upstream("x".to_string()).is_upstream());
        assert!(LlmError::Timeout(Duration::from_secs(1)).is_upstream());
        assert!(!LlmError::EmptyResponse.is_upstream());
    }
}
