use serde::{Deserialize, Serialize};

/// The author of a message in the terminal transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Boot lines and other machine-generated chrome.
    System,
    /// Input typed by the visitor.
    User,
    /// Replies produced by the action resolver or the generation client.
    Assistant,
}

impl Role {
    /// Returns the lowercase wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
