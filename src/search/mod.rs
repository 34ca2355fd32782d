//! Web search relayed through an OpenAI completion endpoint.

mod client;
mod tool;

pub use client::{CompletionProvider, OpenAIClient, OPENAI_BASE_URL, SEARCH_MODEL};
pub use tool::{register, WEB_SEARCH_TOOL};
