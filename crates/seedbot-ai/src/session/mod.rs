//! Conversation session lifecycle.
//!
//! A `SessionManager` owns at most one remote conversation handle at a
//! time: it opens the session with the fixed briefing and opening trigger,
//! forwards turns, and keeps the handle usable across failed exchanges.

mod manager;

pub use manager::SessionManager;
