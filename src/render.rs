//! Output rendering for the interview terminal.
//!
//! This module provides the renderer trait the session signals through and
//! a plain-text implementation with optional ANSI styling.

use std::io::{self, Stdout, Write};

/// ANSI escape code for green text (the terminal's signature color).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code for dim text (informational chrome).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code for red text (errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Trait for rendering session output.
///
/// The session signals through this trait; the view decides presentation.
/// All methods default to no-ops so tests and headless callers can supply
/// an empty implementation.
pub trait Renderer: Send {
    /// Called when a generation call goes in flight.
    ///
    /// Drives the "thinking" indicator; paired with `thinking_finished`.
    fn thinking_started(&mut self) {}

    /// Called when the in-flight generation call settles.
    fn thinking_finished(&mut self) {}

    /// Clear the screen ahead of replaying a reset transcript.
    fn clear_screen(&mut self) {}

    /// Print an informational message.
    fn print_info(&mut self, info: &str) {
        _ = info;
    }

    /// Print an error message.
    fn print_error(&mut self, error: &str) {
        _ = error;
    }
}

/// Renderer that ignores everything.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}

/// Plain text renderer with optional ANSI styling.
///
/// Writes directly to stdout; the thinking indicator is a single line that
/// is erased once the reply arrives.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
    thinking: bool,
}

impl PlainTextRenderer {
    /// Creates a new PlainTextRenderer with ANSI colors enabled.
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            use_color: true,
            thinking: false,
        }
    }

    /// Creates a new PlainTextRenderer with the specified color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
            thinking: false,
        }
    }

    /// Flushes stdout to ensure immediate display.
    fn flush(&mut self) {
        let _ = self.stdout.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn thinking_started(&mut self) {
        self.thinking = true;
        if self.use_color {
            print!("{ANSI_GREEN}> GENERATING_ANSWER...{ANSI_RESET}");
        } else {
            print!("> GENERATING_ANSWER...");
        }
        self.flush();
    }

    fn thinking_finished(&mut self) {
        if self.thinking {
            // Erase the indicator line.
            print!("\r\x1b[2K");
            self.thinking = false;
            self.flush();
        }
    }

    fn clear_screen(&mut self) {
        // Escape sequences are suppressed along with colors when output is
        // piped.
        if self.use_color {
            print!("\x1b[2J\x1b[H");
            self.flush();
        }
    }

    fn print_info(&mut self, info: &str) {
        if self.use_color {
            println!("{ANSI_DIM}{info}{ANSI_RESET}");
        } else {
            println!("{info}");
        }
    }

    fn print_error(&mut self, error: &str) {
        if self.use_color {
            eprintln!("{ANSI_RED}{error}{ANSI_RESET}");
        } else {
            eprintln!("{error}");
        }
    }
}
