//! Keyword classification for the interview terminal.
//!
//! Unlike a slash-command REPL, the terminal accepts bare words: a fixed
//! keyword set resolves locally and everything else is forwarded to the
//! generation client as a freeform question.

/// The closed set of command categories an input is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Reset the transcript to empty.
    Clear,

    /// Open the interview scheduler (`call`, `hire`).
    Schedule,

    /// Show contact details (`email`, `contact`).
    Contact,

    /// Serve the resume link (`resume`, `cv`).
    Resume,

    /// List the recognized commands.
    Help,

    /// Anything else: forwarded to the generation client.
    Freeform,
}

impl Intent {
    /// Returns true if the intent is resolved locally without suspending.
    pub fn is_local(&self) -> bool {
        !matches!(self, Intent::Freeform)
    }
}

/// Classifies user input into an [`Intent`].
///
/// The input is trimmed and case-folded, then matched exactly against the
/// keyword set; substrings do not count, so `"please hire me"` is freeform.
/// Total: every string maps to exactly one intent, with `Freeform` as the
/// catch-all. Callers reject empty input before classifying.
///
/// # Examples
///
/// ```
/// # use dossier::terminal::{Intent, classify};
/// assert_eq!(classify(" Hire "), Intent::Schedule);
/// assert_eq!(classify("cv"), Intent::Resume);
/// assert_eq!(classify("what is your salary"), Intent::Freeform);
/// ```
pub fn classify(input: &str) -> Intent {
    match input.trim().to_lowercase().as_str() {
        "clear" => Intent::Clear,
        "call" | "hire" => Intent::Schedule,
        "email" | "contact" => Intent::Contact,
        "resume" | "cv" => Intent::Resume,
        "help" => Intent::Help,
        _ => Intent::Freeform,
    }
}

/// Returns help text describing the recognized commands.
pub fn help_text() -> &'static str {
    r#"COMMANDS: [hire] [resume] [email] [clear].
OR ASK: "What is your expected salary?" or "Describe your last role.""#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_is_case_and_whitespace_insensitive() {
        assert_eq!(classify(" Hire "), Intent::Schedule);
        assert_eq!(classify("HIRE"), Intent::Schedule);
        assert_eq!(classify("hire"), Intent::Schedule);
        assert_eq!(classify("\tCLEAR\n"), Intent::Clear);
    }

    #[test]
    fn classify_keywords() {
        assert_eq!(classify("clear"), Intent::Clear);
        assert_eq!(classify("call"), Intent::Schedule);
        assert_eq!(classify("email"), Intent::Contact);
        assert_eq!(classify("contact"), Intent::Contact);
        assert_eq!(classify("resume"), Intent::Resume);
        assert_eq!(classify("cv"), Intent::Resume);
        assert_eq!(classify("help"), Intent::Help);
    }

    #[test]
    fn non_matching_input_is_freeform() {
        assert_eq!(classify("what is your salary"), Intent::Freeform);
        assert_eq!(classify("please hire me"), Intent::Freeform);
        assert_eq!(classify("resumes"), Intent::Freeform);
        assert_eq!(classify(""), Intent::Freeform);
    }

    #[test]
    fn locality() {
        assert!(Intent::Clear.is_local());
        assert!(Intent::Help.is_local());
        assert!(!Intent::Freeform.is_local());
    }

    #[test]
    fn help_text_lists_commands() {
        let help = help_text();
        assert!(help.contains("hire"));
        assert!(help.contains("resume"));
        assert!(help.contains("email"));
    }
}
