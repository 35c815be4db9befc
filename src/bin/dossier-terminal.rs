//! Interactive interview terminal for the simulated candidate dossier.
//!
//! This binary provides a REPL that answers a visitor's questions in the
//! persona of the candidate, revealing each reply one character at a time.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! dossier-terminal
//!
//! # Specify a model
//! dossier-terminal --model gemini-2.0-flash
//!
//! # Override the persona instruction
//! dossier-terminal --system "You are a terse interview assistant"
//!
//! # Disable colors (useful for piping output)
//! dossier-terminal --no-color
//! ```
//!
//! # Commands
//!
//! Bare keywords resolve locally; anything else goes to the generation
//! service:
//! - `hire` / `call` - Open the interview scheduler
//! - `email` / `contact` - Show contact details
//! - `resume` / `cv` - Serve the resume link
//! - `help` - List the recognized commands
//! - `clear` - Reset the transcript

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arrrg::CommandLine;
use futures::StreamExt;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use dossier::terminal::{
    PlainTextRenderer, Renderer, SubmitOutcome, TerminalArgs, TerminalConfig, TerminalSession,
};
use dossier::types::Message;
use dossier::{GenerateText, GenerationClient, RevealStream};

/// Main entry point for the dossier-terminal application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = TerminalArgs::from_command_line_relaxed("dossier-terminal [OPTIONS]");
    let config = TerminalConfig::from(args);
    let use_color = config.use_color;
    let reveal_interval = config.reveal_interval;

    let mut client = GenerationClient::new(None)?.with_model(&config.model);
    if let Some(prompt) = &config.system_prompt {
        client = client.with_system_instruction(prompt);
    }
    let offline = !client.is_available();

    let mut session = TerminalSession::new(client, config);
    let mut renderer = PlainTextRenderer::with_color(use_color);
    let mut rl = DefaultEditor::new()?;

    // Flag for fast-forwarding the reveal
    let interrupted = Arc::new(AtomicBool::new(false));

    // Set up Ctrl+C handler
    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })?;

    // Play the seeded transcript: boot lines, then the welcome reveal.
    let mut printed = 0;
    for message in session.history() {
        println!("{}", message.content);
        printed += 1;
    }
    println!();
    if offline {
        renderer.print_info("(no DOSSIER_API_KEY set; freeform questions answer offline)");
    }

    loop {
        // Reset the fast-forward flag before each input
        interrupted.store(false, Ordering::Relaxed);

        let readline = rl.readline("> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                let outcome = session.submit(line, &mut renderer).await;
                if outcome == SubmitOutcome::Cleared {
                    renderer.clear_screen();
                    printed = 0;
                    continue;
                }

                // The user's own line is already on screen; skip past it.
                if printed < session.message_count() {
                    printed += 1;
                }
                while printed < session.message_count() {
                    let last = printed + 1 == session.message_count();
                    let message = &session.history()[printed];
                    if last {
                        reveal_message(message, reveal_interval, &interrupted).await;
                    } else {
                        print_message(message);
                    }
                    printed += 1;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at the prompt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nConnection closed.");
                break;
            }
            Err(err) => {
                renderer.print_error(&format!("Input error: {}", err));
                break;
            }
        }
    }

    Ok(())
}

/// Print a settled message without pacing.
fn print_message(message: &Message) {
    println!("{}", message.content);
    if let Some(link) = message.action_link() {
        println!("[{}] -> {}", link.label, link.target);
    }
}

/// Reveal the newest reply one character at a time.
///
/// Ctrl+C fast-forwards: the remainder prints immediately and the pacing
/// timer is dropped.
async fn reveal_message(
    message: &Message,
    interval: std::time::Duration,
    interrupted: &AtomicBool,
) {
    use std::io::Write;

    let (mut stream, _done) = RevealStream::new(&message.content, interval);
    let mut shown = 0;
    while let Some(prefix) = stream.next().await {
        let step: String = prefix.chars().skip(shown).collect();
        shown = prefix.chars().count();
        print!("{}", step);
        let _ = std::io::stdout().flush();
        if interrupted.load(Ordering::Relaxed) {
            let rest: String = stream.text().chars().skip(shown).collect();
            print!("{}", rest);
            break;
        }
    }
    println!();
    if let Some(link) = message.action_link() {
        println!("[{}] -> {}", link.label, link.target);
    }
}
