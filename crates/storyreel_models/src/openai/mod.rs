//! OpenAI chat completions client.

mod client;
mod types;

pub use client::OpenAiClient;
pub use types::{ChatChoice, ChatMessage, ChatRequest, ChatResponse};
