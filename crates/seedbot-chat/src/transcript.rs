//! Append-only message sequence exposed to rendering.

use serde::{Deserialize, Serialize};

use crate::id::MessageId;

/// Author of a chat message. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

/// One utterance in the conversation. The text may contain markdown meant
/// for the renderer; it is never parsed here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    /// Set only on model messages that stand in for a failed exchange.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

/// The ordered message list. Messages are appended in chronological send
/// order and never mutated or removed.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            id: MessageId::new(),
            role: Role::User,
            text: text.into(),
            is_error: false,
        });
    }

    pub fn push_model(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            id: MessageId::new(),
            role: Role::Model,
            text: text.into(),
            is_error: false,
        });
    }

    /// Append the error-flagged model message standing in for a failed
    /// exchange. Permanently part of the transcript.
    pub fn push_error(&mut self, text: impl Into<String>) {
        self.messages.push(Message {
            id: MessageId::new(),
            role: Role::Model,
            text: text.into(),
            is_error: true,
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order_and_roles() {
        let mut transcript = Transcript::new();
        transcript.push_model("환영합니다!");
        transcript.push_user("95%");
        transcript.push_model("정답입니다!");

        let msgs = transcript.messages();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[0].role, Role::Model);
        assert_eq!(msgs[1].role, Role::User);
        assert_eq!(msgs[2].role, Role::Model);
        assert!(msgs.iter().all(|m| !m.is_error));
    }

    #[test]
    fn ids_are_unique_within_transcript() {
        let mut transcript = Transcript::new();
        for _ in 0..10 {
            transcript.push_user("x");
        }
        let mut ids: Vec<_> = transcript.messages().iter().map(|m| &m.id).collect();
        ids.sort_by_key(|id| id.as_str().to_string());
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn error_flag_only_via_push_error() {
        let mut transcript = Transcript::new();
        transcript.push_error("오류가 발생했습니다. 다시 시도해주세요.");

        let msg = transcript.last().unwrap();
        assert_eq!(msg.role, Role::Model);
        assert!(msg.is_error);
    }

    #[test]
    fn message_serializes_without_false_error_flag() {
        let mut transcript = Transcript::new();
        transcript.push_user("95%");
        let json = serde_json::to_value(transcript.last().unwrap()).unwrap();
        assert!(json.get("is_error").is_none());
        assert_eq!(json["role"], "user");

        transcript.push_error("오류");
        let json = serde_json::to_value(transcript.last().unwrap()).unwrap();
        assert_eq!(json["is_error"], true);
    }

    #[test]
    fn clear_empties_transcript() {
        let mut transcript = Transcript::new();
        transcript.push_user("x");
        assert!(!transcript.is_empty());
        transcript.clear();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }
}
