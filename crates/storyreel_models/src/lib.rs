//! Generative AI provider clients for Storyreel.
//!
//! This crate provides the two outbound service clients the pipeline
//! depends on, each behind its own feature flag:
//!
//! - **OpenAI** chat completions (story polishing, prompt enhancement) -
//!   enable with the `openai` feature
//! - **Veo** (Google) long-running video generation - enable with the `veo`
//!   feature
//!
//! Both clients are explicitly constructed with their key and model, or from
//! the environment, and injected through the `storyreel_interface` traits so
//! the pipeline never touches a global handle.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "openai")]
//! # {
//! use storyreel_models::OpenAiClient;
//! use storyreel_interface::TextGenerator;
//! use storyreel_core::TextRequest;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::from_env()?;
//! let request = TextRequest {
//!     system: "You are a story editor.".to_string(),
//!     content: "Polish this story.".to_string(),
//!     temperature: Some(0.7),
//!     max_tokens: Some(1000),
//! };
//! let polished = client.generate(&request).await?;
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "veo")]
mod veo;

#[cfg(feature = "openai")]
pub use openai::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, OpenAiClient};

#[cfg(feature = "veo")]
pub use veo::{
    GeneratedSample, GenerateVideoResponse, Operation, OperationError, OperationResult,
    PredictInstance, PredictRequest, VeoClient, VideoFile,
};
