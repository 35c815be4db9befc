//! Core terminal session management.
//!
//! This module provides the `TerminalSession` struct which owns the
//! transcript, classifies submitted drafts, resolves local intents, and
//! coordinates the asynchronous generation calls for freeform input.

use std::collections::VecDeque;

use crate::client::GenerateText;
use crate::observability;
use crate::persona;
use crate::render::Renderer;
use crate::terminal::actions::resolve;
use crate::terminal::commands::{Intent, classify};
use crate::terminal::config::TerminalConfig;
use crate::types::Message;

/// What a submitted draft turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty after trimming; nothing happened.
    Ignored,

    /// The transcript was reset.
    Cleared,

    /// A local intent was resolved synchronously.
    Resolved,

    /// A freeform prompt was queued for generation.
    Queued,

    /// A freeform prompt was queued and the queue was drained.
    Generated,
}

/// A terminal session that owns the transcript and coordinates replies.
///
/// The session is a two-state machine: idle, or awaiting one generation
/// call. `pending` is true exactly while a call is in flight. Freeform
/// prompts that arrive while pending wait in a FIFO queue and drain in
/// order; local intents never suspend and are processed immediately.
///
/// Generation is total (it degrades failures to fallback text), so no
/// submit path can fail: the session never surfaces an error state.
pub struct TerminalSession<G: GenerateText> {
    client: G,
    config: TerminalConfig,
    history: Vec<Message>,
    pending: bool,
    queued: VecDeque<String>,
}

impl<G: GenerateText> TerminalSession<G> {
    /// Creates a new session seeded with the boot lines and welcome message.
    pub fn new(client: G, config: TerminalConfig) -> Self {
        let mut history = Vec::with_capacity(persona::BOOT_LINES.len() + 1);
        for line in persona::BOOT_LINES {
            history.push(Message::system(line));
        }
        history.push(Message::assistant(persona::WELCOME));
        Self {
            client,
            config,
            history,
            pending: false,
            queued: VecDeque::new(),
        }
    }

    /// Submits a draft and settles every reply it triggers.
    ///
    /// This is the entry point a view calls once per input line:
    /// 1. Classify the trimmed draft.
    /// 2. `clear` resets the transcript; local intents append the user
    ///    message and the resolved reply synchronously.
    /// 3. Freeform appends the user message, queues the prompt, and drains
    ///    the queue, toggling the thinking indicator around each awaited
    ///    call.
    ///
    /// Dropping the returned future abandons the in-flight call; its reply
    /// is discarded, never appended later. Prompts still queued are picked
    /// up by the next submit, which also clears a stale pending flag the
    /// abandoned cycle left behind.
    pub async fn submit(&mut self, draft: &str, renderer: &mut dyn Renderer) -> SubmitOutcome {
        let outcome = self.enqueue(draft);
        if outcome == SubmitOutcome::Queued {
            self.drain(renderer).await;
            return SubmitOutcome::Generated;
        }
        outcome
    }

    /// Classifies and routes a draft without awaiting generation.
    ///
    /// Freeform prompts are appended to the transcript as user messages and
    /// pushed on the queue; callers must follow up with [`drain`] (or use
    /// [`submit`], which does both). Local intents are fully processed here,
    /// which is safe even while a generation call is pending because they
    /// never touch the in-flight call.
    ///
    /// [`drain`]: TerminalSession::drain
    /// [`submit`]: TerminalSession::submit
    pub fn enqueue(&mut self, draft: &str) -> SubmitOutcome {
        let input = draft.trim();
        if input.is_empty() {
            return SubmitOutcome::Ignored;
        }
        observability::TERMINAL_SUBMITS.click();

        let intent = classify(input);
        if intent == Intent::Clear {
            observability::TERMINAL_CLEARS.click();
            self.history = Vec::new();
            return SubmitOutcome::Cleared;
        }

        self.history.push(Message::user(input));
        match resolve(intent) {
            Some(reply) => {
                observability::TERMINAL_LOCAL_ACTIONS.click();
                self.history.push(reply);
                SubmitOutcome::Resolved
            }
            None => {
                observability::TERMINAL_QUEUED.click();
                self.queued.push_back(input.to_string());
                SubmitOutcome::Queued
            }
        }
    }

    /// Drains queued freeform prompts in FIFO order.
    ///
    /// Each prompt is one generation round-trip: `pending` is set for the
    /// duration of the await, and the reply is appended as an assistant
    /// message when it settles. The generation contract is total, so the
    /// pending flag always clears.
    pub async fn drain(&mut self, renderer: &mut dyn Renderer) {
        // Entry proves no call is in flight: an abandoned cycle may have
        // left the flag set.
        self.pending = false;
        while let Some(prompt) = self.queued.pop_front() {
            self.pending = true;
            renderer.thinking_started();
            let reply = self.client.generate(&prompt).await;
            renderer.thinking_finished();
            self.history.push(Message::assistant(reply));
            self.pending = false;
        }
    }

    /// Returns the transcript.
    pub fn history(&self) -> &[Message] {
        &self.history
    }

    /// Returns the number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.history.len()
    }

    /// Returns true while a generation call is in flight.
    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Returns the number of freeform prompts waiting for generation.
    pub fn queued_len(&self) -> usize {
        self.queued.len()
    }

    /// Resets the transcript to empty.
    ///
    /// Equivalent to submitting `clear`; works regardless of `pending`.
    pub fn clear(&mut self) {
        self.history = Vec::new();
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    /// Returns the active configuration for mutation.
    pub fn config_mut(&mut self) -> &mut TerminalConfig {
        &mut self.config
    }

    /// Returns the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }
}
