// Public modules
pub mod client;
pub mod client_logger;
pub mod error;
pub mod observability;
pub mod persona;
pub mod render;
pub mod reveal;
pub mod terminal;
pub mod types;

// Re-exports
pub use client::{
    EMPTY_FALLBACK, GenerateText, GenerationClient, INTERRUPTED_FALLBACK, OFFLINE_FALLBACK,
};
pub use client_logger::ClientLogger;
pub use error::{Error, Result};
pub use reveal::RevealStream;
pub use types::*;
