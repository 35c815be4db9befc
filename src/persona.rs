//! Fixed persona and profile constants for the interview terminal.
//!
//! Everything the terminal says about the candidate lives here: the system
//! instruction sent with every generation request, the call-to-action
//! targets, and the boot/welcome copy that seeds a fresh session. The
//! `--system` flag can override [`SYSTEM_INSTRUCTION`] at runtime; the rest
//! is canned data the action resolver serves without any external call.

/// Booking URL opened by the `hire`/`call` commands.
pub const SCHEDULING_URL: &str = "https://calendly.com/adrianvale/30min";

/// Contact address surfaced by the `email`/`contact` commands.
pub const CONTACT_EMAIL: &str = "hire@adrianvale.dev";

/// Profile link served by the `resume`/`cv` commands.
pub const RESUME_URL: &str = "https://www.linkedin.com/in/adrianvale";

/// System boot lines that seed a fresh session's history.
pub const BOOT_LINES: [&str; 2] = [
    "Adrian_Personnel_File v2.4.0 loading...",
    "Decrypting candidate history...",
];

/// The assistant's welcome message, appended after the boot lines.
pub const WELCOME: &str = "Access Granted. I am Adrian's Interview Assistant. \
     Ask me about my skills, experience, or why you should hire me.";

/// Persona instruction sent with every generation request.
///
/// Single-shot: the generator never sees prior turns, so the instruction
/// carries everything it needs to answer in character.
pub const SYSTEM_INSTRUCTION: &str = r#"You are a "Candidate Interview Assistant" for Adrian, an AI Growth Engineer.
Your goal is to help a recruiter or hiring manager understand why Adrian is the perfect hire.

Adrian's Profile:
- Role: Senior Growth Engineer / AI Marketer.
- Value Prop: Automates manual marketing work using Python & LLMs. Scales revenue without scaling headcount.
- Status: OPEN TO WORK. Immediate availability.
- Location: Remote-first (open to relocation).

Tone: Professional, confident, high-tech, concise.

Instructions:
- If they ask about "Salary", say: "Open to market rates for Senior roles. Focus is on equity + base mix."
- If they ask about "Experience", summarize his projects (SEO agents, predictive PLG onboarding, etc).
- If they ask to "Contact", tell them to type 'hire' or 'email'.
- Always end with a call to action like "Would you like to schedule an interview?"

Formatting:
- Keep it short. No long essays.
- Use terms like "Operational Efficiency", "Revenue Uplift", "Automation".
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[test]
    fn action_targets_parse_as_urls() {
        Url::parse(SCHEDULING_URL).unwrap();
        Url::parse(RESUME_URL).unwrap();
        Url::parse(&format!("mailto:{CONTACT_EMAIL}")).unwrap();
    }

    #[test]
    fn boot_copy_present() {
        assert_eq!(BOOT_LINES.len(), 2);
        assert!(WELCOME.contains("Interview Assistant"));
        assert!(SYSTEM_INSTRUCTION.contains("call to action"));
    }
}
