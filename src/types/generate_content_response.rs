use serde::{Deserialize, Serialize};

use crate::types::GenerationContent;

/// One candidate reply in a generation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content.
    #[serde(default)]
    pub content: Option<GenerationContent>,

    /// Why generation stopped, e.g. `STOP` or `MAX_TOKENS`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// The body of a `generateContent` response.
///
/// Only the fields the terminal consumes are modeled; unknown fields such as
/// usage metadata are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate replies, best first.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Returns the concatenated text of the first candidate, if any.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_candidate_text() {
        let body = r#"{
            "candidates": [
                {
                    "content": {"role": "model", "parts": [{"text": "Open to "}, {"text": "market rates."}]},
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": {"promptTokenCount": 12}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), "Open to market rates.");
    }

    #[test]
    fn empty_candidates_yield_empty_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
    }
}
