use serde::{Deserialize, Serialize};

/// One piece of content text inside a generation request or response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPart {
    /// The text content.
    pub text: String,
}

/// A block of content attributed to one side of the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationContent {
    /// The producer of the content: `user` or `model`.
    /// Omitted for system instructions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Ordered content parts.
    pub parts: Vec<ContentPart>,
}

impl GenerationContent {
    /// Create a single-part content block with the given role.
    pub fn new(role: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            parts: vec![ContentPart { text: text.into() }],
        }
    }

    /// Create a single-part content block without a role (system instructions).
    pub fn unattributed(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![ContentPart { text: text.into() }],
        }
    }
}

/// Parameters for a `generateContent` request.
///
/// The session is single-shot from the generator's point of view: each
/// request carries exactly one user prompt and the fixed persona system
/// instruction, never prior turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The prompt content.
    pub contents: Vec<GenerationContent>,

    /// Persona instruction applied to the whole request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GenerationContent>,
}

impl GenerateContentRequest {
    /// Create a single-shot request from a user prompt and a system instruction.
    pub fn single_shot(prompt: impl Into<String>, system: impl Into<String>) -> Self {
        Self {
            contents: vec![GenerationContent::new("user", prompt)],
            system_instruction: Some(GenerationContent::unattributed(system)),
        }
    }
}
