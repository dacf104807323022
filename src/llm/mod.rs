//! LLM module for smart-notes
//!
//! Builds the notes prompt and talks to the chat-completion endpoint.

mod client;
mod groq;
mod prompts;

pub use client::{build_client, CompletionClient};
pub use groq::GroqClient;
pub use prompts::build_notes_prompt;
