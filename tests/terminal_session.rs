//! End-to-end tests for the interview terminal session.
//!
//! These tests drive the public API with a stub generation client, so they
//! exercise the full classify/resolve/generate pipeline without a network.

use std::sync::Mutex;

use dossier::terminal::{NullRenderer, SubmitOutcome, TerminalConfig, TerminalSession};
use dossier::types::Role;
use dossier::{GenerateText, GenerationClient, OFFLINE_FALLBACK};

/// Stub client that records every prompt it is asked to answer.
struct RecordingClient {
    reply: &'static str,
    prompts: Mutex<Vec<String>>,
}

impl RecordingClient {
    fn new(reply: &'static str) -> Self {
        Self {
            reply,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl GenerateText for RecordingClient {
    async fn generate(&self, prompt: &str) -> String {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.to_string()
    }
}

fn new_session(reply: &'static str) -> TerminalSession<RecordingClient> {
    TerminalSession::new(RecordingClient::new(reply), TerminalConfig::default())
}

#[test]
fn session_boots_with_seeded_transcript() {
    let session = new_session("unused");
    let history = session.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].role, Role::System);
    assert_eq!(history[1].role, Role::System);
    assert_eq!(history[2].role, Role::Assistant);
    assert!(history[2].content.contains("Interview Assistant"));
}

#[tokio::test]
async fn resume_keyword_serves_the_download_action() {
    let mut session = new_session("unused");
    let mut renderer = NullRenderer;

    let outcome = session.submit("resume", &mut renderer).await;
    assert_eq!(outcome, SubmitOutcome::Resolved);
    assert_eq!(session.message_count(), 5);

    let reply = session.history().last().unwrap();
    assert_eq!(reply.role, Role::Assistant);
    let link = reply.action_link().expect("resume reply carries a link");
    assert!(link.label.contains("RESUME"));

    // Local resolution never touches the client.
    assert!(session.client().prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn freeform_question_round_trips_through_the_client() {
    let mut session = new_session("Open to market rates.");
    let mut renderer = NullRenderer;

    let outcome = session.submit("What is your expected salary?", &mut renderer).await;
    assert_eq!(outcome, SubmitOutcome::Generated);
    assert_eq!(session.message_count(), 5);
    assert!(!session.pending());

    let history = session.history();
    assert_eq!(history[3].role, Role::User);
    assert_eq!(history[3].content, "What is your expected salary?");
    assert_eq!(history[4].role, Role::Assistant);
    assert_eq!(history[4].content, "Open to market rates.");

    let prompts = session.client().prompts.lock().unwrap();
    assert_eq!(prompts.as_slice(), ["What is your expected salary?"]);
}

#[tokio::test]
async fn clear_resets_the_transcript() {
    let mut session = new_session("reply");
    let mut renderer = NullRenderer;

    session.submit("hire", &mut renderer).await;
    assert_eq!(session.message_count(), 5);

    let outcome = session.submit("clear", &mut renderer).await;
    assert_eq!(outcome, SubmitOutcome::Cleared);
    assert_eq!(session.message_count(), 0);

    // The session keeps working after a reset.
    let outcome = session.submit("help", &mut renderer).await;
    assert_eq!(outcome, SubmitOutcome::Resolved);
    assert_eq!(session.message_count(), 2);
}

#[tokio::test]
async fn whitespace_input_changes_nothing() {
    let mut session = new_session("reply");
    let mut renderer = NullRenderer;

    assert_eq!(session.submit("   ", &mut renderer).await, SubmitOutcome::Ignored);
    assert_eq!(session.message_count(), 3);
    assert!(session.client().prompts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn queued_prompts_generate_in_arrival_order() {
    let mut session = new_session("ack");
    let mut renderer = NullRenderer;

    session.enqueue("first");
    session.enqueue("second");
    session.enqueue("third");
    session.drain(&mut renderer).await;

    let prompts = session.client().prompts.lock().unwrap();
    assert_eq!(prompts.as_slice(), ["first", "second", "third"]);
    drop(prompts);
    assert_eq!(session.queued_len(), 0);
    assert!(!session.pending());
}

#[tokio::test]
async fn offline_client_degrades_to_fallback_reply() {
    let client = GenerationClient::with_api_key(None).unwrap();
    let mut session = TerminalSession::new(client, TerminalConfig::default());
    let mut renderer = NullRenderer;

    let outcome = session.submit("Why should we hire you?", &mut renderer).await;
    assert_eq!(outcome, SubmitOutcome::Generated);
    assert_eq!(session.history().last().unwrap().content, OFFLINE_FALLBACK);
}
