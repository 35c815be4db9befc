//! Logging trait for generation client diagnostics.
//!
//! The generation client never propagates failures to its caller; this trait
//! is how those swallowed failures stay observable. Install a logger with
//! [`GenerationClient::with_logger`](crate::GenerationClient::with_logger)
//! to capture every round-trip and every error that was mapped to fallback
//! text.

use crate::error::Error;

/// A trait for logging generation client operations.
///
/// Implement this trait to capture prompts, replies, and the errors the
/// client degrades into fallback text.
///
/// # Example
///
/// ```rust,ignore
/// use dossier::{ClientLogger, Error};
/// use std::io::Write;
/// use std::sync::Mutex;
///
/// struct FileLogger {
///     file: Mutex<std::fs::File>,
/// }
///
/// impl ClientLogger for FileLogger {
///     fn log_generation(&self, prompt: &str, reply: &str) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "prompt: {prompt}\nreply: {reply}").unwrap();
///     }
///
///     fn log_fallback(&self, prompt: &str, error: &Error) {
///         let mut file = self.file.lock().unwrap();
///         writeln!(file, "prompt: {prompt}\nerror: {error}").unwrap();
///     }
/// }
/// ```
pub trait ClientLogger: Send + Sync {
    /// Log a completed generation round-trip.
    ///
    /// Called once per successful request with the prompt and the raw
    /// generated text, before any fallback substitution for empty replies.
    fn log_generation(&self, prompt: &str, reply: &str);

    /// Log an error that was degraded to fallback text.
    ///
    /// Called whenever a transport or API failure is about to be replaced
    /// by the connection-interrupted fallback. The caller never sees the
    /// error; this hook is the only place it is reported.
    fn log_fallback(&self, prompt: &str, error: &Error);
}
