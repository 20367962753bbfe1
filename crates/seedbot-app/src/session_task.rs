//! Background task that owns the session manager.
//!
//! Commands arrive over a channel and are executed strictly sequentially,
//! so at most one remote exchange is ever in flight. Outcomes go back as
//! epoch-tagged events; the view model decides whether they still apply.

use tokio::sync::mpsc;
use tracing::warn;

use seedbot_ai::SessionManager;
use seedbot_chat::{ChatCommand, ChatEvent};

pub async fn session_task(
    mut manager: SessionManager,
    mut cmd_rx: mpsc::Receiver<ChatCommand>,
    event_tx: mpsc::Sender<ChatEvent>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        let event = match cmd {
            ChatCommand::Start { epoch } => match manager.start().await {
                Ok(text) => ChatEvent::Started { epoch, text },
                Err(e) => {
                    warn!(error = %e, "opening exchange failed");
                    ChatEvent::StartFailed { epoch }
                }
            },
            ChatCommand::SendTurn { epoch, text } => match manager.send_turn(&text).await {
                Ok(reply) => ChatEvent::TurnCompleted { epoch, text: reply },
                Err(e) => {
                    warn!(error = %e, "turn exchange failed");
                    ChatEvent::TurnFailed { epoch }
                }
            },
            ChatCommand::Discard => {
                manager.discard();
                continue;
            }
        };

        if event_tx.send(event).await.is_err() {
            break; // front end gone
        }
    }
}
