use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique message identifier. UUID-backed so collisions cannot occur
/// within (or across) sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generation counter for the session handle. Every command the view model
/// issues is tagged with the epoch current at issue time; results carrying
/// a stale epoch belong to a discarded session and are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionEpoch(u64);

impl SessionEpoch {
    pub fn first() -> Self {
        Self(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl Default for SessionEpoch {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for SessionEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_is_valid_uuid() {
        let id = MessageId::new();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn message_id_is_unique() {
        let a = MessageId::new();
        let b = MessageId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn message_id_display() {
        let id = MessageId::new();
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn epoch_advances() {
        let first = SessionEpoch::first();
        let second = first.next();
        assert_ne!(first, second);
        assert_eq!(second.next(), first.next().next());
    }

    #[test]
    fn epoch_default_is_first() {
        assert_eq!(SessionEpoch::default(), SessionEpoch::first());
    }
}
