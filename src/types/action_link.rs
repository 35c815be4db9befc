use serde::{Deserialize, Serialize};
use url::Url;

/// A labeled call-to-action attached to an assistant reply.
///
/// The target is an opaque URI the view may open in a new browsing context;
/// `mailto:` URIs are valid targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionLink {
    /// Uppercase label rendered inside the action button, e.g. `DOWNLOAD_RESUME`.
    pub label: String,

    /// Where the action leads.
    pub target: Url,
}

impl ActionLink {
    /// Create a new action link.
    pub fn new(label: impl Into<String>, target: Url) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_is_a_valid_target() {
        let target = Url::parse("mailto:someone@example.com").unwrap();
        let link = ActionLink::new("EMAIL: someone@example.com", target);
        assert_eq!(link.target.scheme(), "mailto");
    }

    #[test]
    fn serialization() {
        let link = ActionLink::new(
            "SCHEDULE_INTERVIEW",
            Url::parse("https://calendly.com/example/30min").unwrap(),
        );
        let json = serde_json::to_value(&link).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "label": "SCHEDULE_INTERVIEW",
                "target": "https://calendly.com/example/30min",
            })
        );
    }
}
