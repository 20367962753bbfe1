//! Conversation view model for seedbot.
//!
//! Owns the ordered message list and the loading/error flags, and maps
//! session outcomes into view-visible state. Remote work is requested
//! through `ChatCommand` values and resolved through `ChatEvent`s, so this
//! crate carries no remote types and tests in isolation.

pub mod conversation;
pub mod id;
pub mod transcript;

pub use conversation::{ChatCommand, ChatEvent, Conversation, Phase};
pub use id::{MessageId, SessionEpoch};
pub use transcript::{Message, Role, Transcript};
