use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::{ActionLink, Role};

/// How a message should be rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text only.
    Plain,
    /// Text followed by a labeled call-to-action link.
    Action(ActionLink),
}

/// One turn in the terminal transcript.
///
/// Messages are immutable once appended to the history: the transcript is
/// only ever appended to or cleared wholesale, never reordered or edited in
/// place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Who authored the message.
    pub role: Role,

    /// The text payload.
    pub content: String,

    /// Plain text or text plus an action link.
    #[serde(flatten)]
    pub kind: MessageKind,
}

impl Message {
    /// Create a plain system message (boot chrome).
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            kind: MessageKind::Plain,
        }
    }

    /// Create a plain user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            kind: MessageKind::Plain,
        }
    }

    /// Create a plain assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            kind: MessageKind::Plain,
        }
    }

    /// Create an assistant message carrying a call-to-action link.
    pub fn action(content: impl Into<String>, label: impl Into<String>, target: Url) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            kind: MessageKind::Action(ActionLink::new(label, target)),
        }
    }

    /// Returns the action link, if this message carries one.
    pub fn action_link(&self) -> Option<&ActionLink> {
        match &self.kind {
            MessageKind::Plain => None,
            MessageKind::Action(link) => Some(link),
        }
    }

    /// Returns true if this is an assistant message.
    pub fn is_assistant(&self) -> bool {
        self.role == Role::Assistant
    }
}
