//! Interview terminal module for the simulated candidate dossier.
//!
//! This module provides the interactive terminal built on top of the dossier
//! client library. It supports:
//!
//! - Keyword commands resolved locally without touching the network
//! - Freeform questions answered by the generation client
//! - A character-by-character reveal of the newest assistant reply
//! - Configurable model, persona instruction, and reveal pacing
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core session management and transcript ownership
//! - [`commands`]: Keyword classification
//! - [`actions`]: Canned replies for locally-resolved intents

mod actions;
mod commands;
mod config;
mod session;

pub use crate::render::{NullRenderer, PlainTextRenderer, Renderer};
pub use actions::resolve;
pub use commands::{Intent, classify, help_text};
pub use config::{TerminalArgs, TerminalConfig};
pub use session::{SubmitOutcome, TerminalSession};
