//! Configuration types for the interview terminal.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling terminal behavior.

use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::reveal::DEFAULT_REVEAL_INTERVAL;

/// Default model used for generation requests.
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Command-line arguments for the dossier-terminal tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct TerminalArgs {
    /// Model to use for freeform generation.
    #[arrrg(optional, "Model to use (default: gemini-2.5-flash)", "MODEL")]
    pub model: Option<String>,

    /// Override the built-in persona instruction.
    #[arrrg(optional, "Persona/system instruction override", "PROMPT")]
    pub system: Option<String>,

    /// Milliseconds between revealed characters.
    #[arrrg(optional, "Reveal pacing in milliseconds (default: 15)", "MS")]
    pub reveal_interval_ms: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a terminal session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// The model used for freeform generation.
    pub model: String,

    /// Optional override for the built-in persona instruction.
    pub system_prompt: Option<String>,

    /// Inter-step delay for the streaming reveal.
    pub reveal_interval: Duration,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl TerminalConfig {
    /// Creates a new TerminalConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-2.5-flash
    /// - Reveal pacing: 15ms per character
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            system_prompt: None,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            use_color: true,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the persona instruction override.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the reveal pacing.
    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TerminalArgs> for TerminalConfig {
    fn from(args: TerminalArgs) -> Self {
        TerminalConfig {
            model: args.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            system_prompt: args.system,
            reveal_interval: args
                .reveal_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(DEFAULT_REVEAL_INTERVAL),
            use_color: !args.no_color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TerminalConfig::new();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.system_prompt.is_none());
        assert_eq!(config.reveal_interval, Duration::from_millis(15));
        assert!(config.use_color);
    }

    #[test]
    fn config_from_args_defaults() {
        let args = TerminalArgs::default();
        let config = TerminalConfig::from(args);
        assert_eq!(config, TerminalConfig::new());
    }

    #[test]
    fn config_from_args_custom() {
        let args = TerminalArgs {
            model: Some("gemini-2.0-flash".to_string()),
            system: Some("You are terse.".to_string()),
            reveal_interval_ms: Some(5),
            no_color: true,
        };
        let config = TerminalConfig::from(args);
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.system_prompt, Some("You are terse.".to_string()));
        assert_eq!(config.reveal_interval, Duration::from_millis(5));
        assert!(!config.use_color);
    }

    #[test]
    fn config_builder_pattern() {
        let config = TerminalConfig::new()
            .with_model("gemini-2.0-flash")
            .with_system_prompt("Test prompt")
            .with_reveal_interval(Duration::from_millis(1))
            .without_color();

        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.system_prompt, Some("Test prompt".to_string()));
        assert_eq!(config.reveal_interval, Duration::from_millis(1));
        assert!(!config.use_color);
    }
}
