//! Canned replies for locally-resolvable intents.
//!
//! Resolution is pure data construction from persona constants: no external
//! calls, no failure mode.

use url::Url;

use crate::persona;
use crate::terminal::commands::{Intent, help_text};
use crate::types::Message;

/// Resolves a locally-handled intent to its canned assistant reply.
///
/// Returns `None` for `Clear` (a history reset, no message) and `Freeform`
/// (routed to the generation client instead).
pub fn resolve(intent: Intent) -> Option<Message> {
    match intent {
        Intent::Clear | Intent::Freeform => None,
        Intent::Schedule => Some(Message::action(
            "Opening Interview Scheduler. Standby...",
            "SCHEDULE_INTERVIEW",
            persona_url(persona::SCHEDULING_URL),
        )),
        Intent::Contact => Some(Message::action(
            "Retrieving contact protocols...",
            format!("EMAIL: {}", persona::CONTACT_EMAIL),
            persona_url(&format!("mailto:{}", persona::CONTACT_EMAIL)),
        )),
        Intent::Resume => Some(Message::action(
            "Accessing personnel file...",
            "DOWNLOAD_RESUME",
            persona_url(persona::RESUME_URL),
        )),
        Intent::Help => Some(Message::assistant(help_text())),
    }
}

fn persona_url(url: &str) -> Url {
    Url::parse(url).expect("persona URL constants should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn schedule_resolves_to_booking_action() {
        let msg = resolve(Intent::Schedule).unwrap();
        assert_eq!(msg.role, Role::Assistant);
        let link = msg.action_link().unwrap();
        assert_eq!(link.label, "SCHEDULE_INTERVIEW");
        assert_eq!(link.target.as_str(), persona::SCHEDULING_URL);
    }

    #[test]
    fn contact_resolves_to_mailto_action() {
        let msg = resolve(Intent::Contact).unwrap();
        let link = msg.action_link().unwrap();
        assert!(link.label.contains(persona::CONTACT_EMAIL));
        assert_eq!(link.target.scheme(), "mailto");
    }

    #[test]
    fn resume_resolves_to_download_action() {
        let msg = resolve(Intent::Resume).unwrap();
        let link = msg.action_link().unwrap();
        assert!(link.label.contains("RESUME"));
        assert!(!link.target.as_str().is_empty());
    }

    #[test]
    fn help_is_plain_text() {
        let msg = resolve(Intent::Help).unwrap();
        assert!(msg.action_link().is_none());
        assert!(msg.content.contains("COMMANDS"));
    }

    #[test]
    fn clear_and_freeform_resolve_to_nothing() {
        assert!(resolve(Intent::Clear).is_none());
        assert!(resolve(Intent::Freeform).is_none());
    }
}
