//! AI engine for seedbot.
//!
//! Provides the Gemini API client and the conversation session manager:
//! - One remote conversation handle at a time, opened with a fixed
//!   quiz-trainer briefing
//! - Turn exchanges against a stateful history the handle accumulates
//! - Token usage logging

pub mod gemini;
pub mod prompt;
pub mod session;

use async_trait::async_trait;

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::SessionManager;

/// A conversational model endpoint: given prior context plus one input
/// turn, return one output turn, or fail.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Transport-level failures from the remote endpoint.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Session lifecycle failures, as surfaced to the view layer.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Missing or unusable credential at client-creation time.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The opening exchange failed; no session became active.
    #[error("session start failed: {0}")]
    Start(#[source] AiError),
    /// A turn was sent before any session existed. Programming defect:
    /// the view model's state machine must make this unreachable.
    #[error("no active session")]
    NoActiveSession,
    /// A mid-conversation exchange failed; the session remains usable.
    #[error("turn exchange failed: {0}")]
    Exchange(#[source] AiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_message_constructors() {
        let msg = ChatMessage::user("95%");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "95%");

        let msg = ChatMessage::model("정답입니다!");
        assert_eq!(msg.role, Role::Model);

        let msg = ChatMessage::system("briefing");
        assert_eq!(msg.role, Role::System);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), "\"model\"");
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 1,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn session_error_display() {
        let err = SessionError::Configuration("GEMINI_API_KEY not set".into());
        assert_eq!(
            err.to_string(),
            "configuration error: GEMINI_API_KEY not set"
        );

        let err = SessionError::Start(AiError::RateLimited);
        assert_eq!(err.to_string(), "session start failed: Rate limited");

        let err = SessionError::NoActiveSession;
        assert_eq!(err.to_string(), "no active session");

        let err = SessionError::Exchange(AiError::NetworkError("timeout".into()));
        assert_eq!(
            err.to_string(),
            "turn exchange failed: Network error: timeout"
        );
    }
}
