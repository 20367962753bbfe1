//! Conversation state machine.
//!
//! `Conversation` is synchronous view state. Operations that need the
//! remote side hand back a `ChatCommand` for the session task to execute;
//! the outcome returns through `apply` as a `ChatEvent` tagged with the
//! epoch the command was issued under. Events from a discarded session
//! carry a stale epoch and are dropped.

use tracing::debug;

use crate::id::SessionEpoch;
use crate::transcript::{Message, Transcript};

/// Transient banner shown when the opening exchange fails. Not part of the
/// transcript; cleared on the next start attempt.
pub const START_FAILED_BANNER: &str = "연결에 실패했습니다. API 키를 확인하거나 다시 시도해주세요.";

/// Fixed text of the error-flagged model message appended when a turn
/// exchange fails. Permanently part of the transcript.
pub const TURN_ERROR_TEXT: &str = "오류가 발생했습니다. 다시 시도해주세요.";

/// Session lifecycle as the view model sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active session; `begin_start` is the only way forward.
    Idle,
    /// Opening exchange succeeded; turns may be sent.
    Active,
}

/// Remote work requested by the view model, executed by the session task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Start { epoch: SessionEpoch },
    SendTurn { epoch: SessionEpoch, text: String },
    /// Drop the remote handle after a restart. Carries no epoch: it is
    /// valid regardless of which session it reaches.
    Discard,
}

/// Outcome of a previously issued command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    Started { epoch: SessionEpoch, text: String },
    StartFailed { epoch: SessionEpoch },
    TurnCompleted { epoch: SessionEpoch, text: String },
    TurnFailed { epoch: SessionEpoch },
}

impl ChatEvent {
    fn epoch(&self) -> SessionEpoch {
        match self {
            ChatEvent::Started { epoch, .. }
            | ChatEvent::StartFailed { epoch }
            | ChatEvent::TurnCompleted { epoch, .. }
            | ChatEvent::TurnFailed { epoch } => *epoch,
        }
    }
}

/// The conversation view model: ordered message list plus loading/error
/// flags. At most one exchange is in flight; while loading, further
/// operations are rejected.
pub struct Conversation {
    transcript: Transcript,
    phase: Phase,
    loading: bool,
    start_error: Option<&'static str>,
    epoch: SessionEpoch,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            phase: Phase::Idle,
            loading: false,
            start_error: None,
            epoch: SessionEpoch::first(),
        }
    }

    /// Request the opening exchange. Rejected while loading or once a
    /// session is active.
    pub fn begin_start(&mut self) -> Option<ChatCommand> {
        if self.loading || self.phase == Phase::Active {
            return None;
        }
        self.start_error = None;
        self.loading = true;
        Some(ChatCommand::Start { epoch: self.epoch })
    }

    /// Request a turn exchange. The user message is appended immediately
    /// (optimistic, never rolled back). Rejected without any state change
    /// when `text` is blank, an exchange is in flight, or no session is
    /// active.
    pub fn begin_send(&mut self, text: &str) -> Option<ChatCommand> {
        if text.trim().is_empty() {
            return None;
        }
        if self.loading || self.phase != Phase::Active {
            return None;
        }
        self.transcript.push_user(text);
        self.loading = true;
        Some(ChatCommand::SendTurn {
            epoch: self.epoch,
            text: text.to_string(),
        })
    }

    /// Apply the outcome of a previously issued command. Events whose
    /// epoch is not current belong to a discarded session and are dropped
    /// without touching any state.
    pub fn apply(&mut self, event: ChatEvent) {
        if event.epoch() != self.epoch {
            debug!(event = ?event, current = %self.epoch, "dropping stale session event");
            return;
        }

        self.loading = false;
        match event {
            ChatEvent::Started { text, .. } => {
                self.phase = Phase::Active;
                self.transcript.push_model(text);
            }
            ChatEvent::StartFailed { .. } => {
                // Surfaced outside the transcript; the session stays
                // inactive and start may be retried.
                self.start_error = Some(START_FAILED_BANNER);
            }
            ChatEvent::TurnCompleted { text, .. } => {
                self.transcript.push_model(text);
            }
            ChatEvent::TurnFailed { .. } => {
                self.transcript.push_error(TURN_ERROR_TEXT);
            }
        }
    }

    /// Discard all state and begin fresh. Bumps the epoch so results from
    /// any in-flight exchange are dropped on arrival.
    #[must_use]
    pub fn restart(&mut self) -> ChatCommand {
        self.transcript.clear();
        self.phase = Phase::Idle;
        self.loading = false;
        self.start_error = None;
        self.epoch = self.epoch.next();
        ChatCommand::Discard
    }

    // -- Getters --

    pub fn messages(&self) -> &[Message] {
        self.transcript.messages()
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.transcript.last()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn start_error(&self) -> Option<&str> {
        self.start_error
    }

    pub fn epoch(&self) -> SessionEpoch {
        self.epoch
    }
}
