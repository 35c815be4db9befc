// Public modules
pub mod action_link;
pub mod generate_content_request;
pub mod generate_content_response;
pub mod message;
pub mod role;

// Re-exports
pub use action_link::ActionLink;
pub use generate_content_request::{ContentPart, GenerateContentRequest, GenerationContent};
pub use generate_content_response::{Candidate, GenerateContentResponse};
pub use message::{Message, MessageKind};
pub use role::Role;
