//! SessionManager and the stateful turn history it owns.

use tracing::{debug, info};

use crate::prompt::{OPENING_TRIGGER, SYSTEM_INSTRUCTION};
use crate::{ChatClient, ChatMessage, SessionError};

/// The one remote conversation handle. The Gemini API is stateless per
/// request, so the handle accumulates the turn history and resends it on
/// every call; callers see a stateful session.
struct TurnSession {
    system_prompt: String,
    history: Vec<ChatMessage>,
}

impl TurnSession {
    fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            history: Vec::new(),
        }
    }

    /// Full message slice for one API call: briefing first, then history.
    fn build_messages(&self) -> Vec<ChatMessage> {
        let mut msgs = Vec::with_capacity(self.history.len() + 1);
        msgs.push(ChatMessage::system(self.system_prompt.clone()));
        msgs.extend(self.history.iter().cloned());
        msgs
    }
}

/// Owns the session lifecycle: `{NoSession} --start--> {Active}`, with
/// exchange failures never leaving the active state.
pub struct SessionManager {
    client: Box<dyn ChatClient>,
    session: Option<TurnSession>,
}

impl SessionManager {
    pub fn new(client: Box<dyn ChatClient>) -> Self {
        Self {
            client,
            session: None,
        }
    }

    /// Open a new session and run the opening exchange. The trigger is sent
    /// on behalf of the system, not the user, to elicit the first quiz turn.
    ///
    /// On failure no handle is retained; a fresh `start` may be retried.
    /// If a session already exists it is discarded and replaced.
    pub async fn start(&mut self) -> Result<String, SessionError> {
        let mut session = TurnSession::new(SYSTEM_INSTRUCTION);
        session.history.push(ChatMessage::user(OPENING_TRIGGER));

        let response = self
            .client
            .send_message(&session.build_messages())
            .await
            .map_err(SessionError::Start)?;

        session.history.push(ChatMessage::model(&response.content));
        self.session = Some(session);

        info!(
            tokens = response.usage.total_tokens(),
            "session opened with first quiz turn"
        );
        Ok(response.content)
    }

    /// Forward one user turn to the active session and return the reply.
    ///
    /// On failure the pushed user turn is rolled back, leaving the handle
    /// exactly as it was before the call; it stays usable for the next
    /// attempt.
    pub async fn send_turn(&mut self, text: &str) -> Result<String, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoActiveSession)?;

        session.history.push(ChatMessage::user(text));

        let result = self.client.send_message(&session.build_messages()).await;
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                session.history.pop();
                return Err(SessionError::Exchange(e));
            }
        };

        session.history.push(ChatMessage::model(&response.content));

        debug!(
            turns = session.history.len(),
            tokens = response.usage.total_tokens(),
            "turn exchanged"
        );
        Ok(response.content)
    }

    /// Drop the current handle without any remote handshake (user restart).
    pub fn discard(&mut self) {
        if self.session.take().is_some() {
            info!("session discarded");
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The accumulated turn history, or an empty slice with no session.
    pub fn history(&self) -> &[ChatMessage] {
        self.session.as_ref().map(|s| s.history.as_slice()).unwrap_or(&[])
    }
}
