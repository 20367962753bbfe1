//! Terminal front end: reads answers from stdin, renders the transcript.
//!
//! One `select!` loop over input lines and session events. The view model
//! decides what each line means; this layer only renders state changes.

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use seedbot_ai::{GeminiClient, GeminiConfig, SessionManager};
use seedbot_chat::{ChatCommand, Conversation, Message, Phase, Role};

use crate::session_task::session_task;

const BANNER: &str = "\
종자기능사 훈련 봇 — Enter를 눌러 훈련을 시작하세요.
(/restart 처음부터, /quit 종료)";

pub async fn run(config: GeminiConfig) -> Result<(), seedbot_ai::AiError> {
    let client = GeminiClient::new(config)?;
    let manager = SessionManager::new(Box::new(client));

    let (cmd_tx, cmd_rx) = mpsc::channel::<ChatCommand>(16);
    let (event_tx, mut event_rx) = mpsc::channel(16);
    tokio::spawn(session_task(manager, cmd_rx, event_tx));

    let mut conversation = Conversation::new();
    let mut rendered = 0usize;

    println!("{BANNER}\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(line)) => {
                        if !handle_line(&line, &mut conversation, &cmd_tx).await {
                            break;
                        }
                    }
                    Ok(None) => break, // stdin closed
                    Err(e) => {
                        tracing::error!("stdin read failed: {e}");
                        break;
                    }
                }
            }
            Some(event) = event_rx.recv() => {
                conversation.apply(event);
                render_updates(&conversation, &mut rendered);
            }
        }
    }

    Ok(())
}

/// Interpret one input line. Returns false to quit.
async fn handle_line(
    line: &str,
    conversation: &mut Conversation,
    cmd_tx: &mpsc::Sender<ChatCommand>,
) -> bool {
    match line.trim() {
        "/quit" | "/exit" => return false,
        "/restart" => {
            tracing::info!(epoch = %conversation.epoch(), "restarting conversation");
            let discard = conversation.restart();
            let _ = cmd_tx.send(discard).await;
            if let Some(start) = conversation.begin_start() {
                println!("\n처음부터 다시 시작합니다…\n");
                let _ = cmd_tx.send(start).await;
            }
            return true;
        }
        _ => {}
    }

    match conversation.phase() {
        Phase::Idle => {
            if let Some(cmd) = conversation.begin_start() {
                println!("연결 중…");
                let _ = cmd_tx.send(cmd).await;
            } else if conversation.is_loading() {
                println!("연결을 기다리는 중입니다…");
            }
        }
        Phase::Active => {
            if let Some(cmd) = conversation.begin_send(line) {
                println!("…");
                let _ = cmd_tx.send(cmd).await;
            } else if conversation.is_loading() {
                println!("아직 이전 답을 기다리는 중입니다…");
            }
            // Blank input is ignored without comment.
        }
    }
    true
}

/// Print everything appended to the transcript since the last render, plus
/// the transient start-failure banner.
fn render_updates(conversation: &Conversation, rendered: &mut usize) {
    let messages = conversation.messages();
    if *rendered > messages.len() {
        // A restart cleared the transcript since the last render.
        *rendered = 0;
    }
    for msg in &messages[*rendered..] {
        print_message(msg);
    }
    *rendered = messages.len();

    if let Some(banner) = conversation.start_error() {
        println!("\n[연결 실패] {banner}\n");
    }
}

fn print_message(msg: &Message) {
    match (msg.role, msg.is_error) {
        (Role::User, _) => {} // already on screen as typed input
        (Role::Model, false) => println!("\n{}\n", msg.text),
        (Role::Model, true) => println!("\n[오류] {}\n", msg.text),
    }
}
