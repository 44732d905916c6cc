//! Request types for text generation.

use serde::{Deserialize, Serialize};

/// A text generation request.
///
/// Carries the fixed system instruction, the user content, and sampling
/// parameters for a single call to the text-generation service.
///
/// # Examples
///
/// ```
/// use storyreel_core::TextRequest;
///
/// let request = TextRequest {
///     system: "You are a professional story editor.".to_string(),
///     content: "Once upon a time...".to_string(),
///     temperature: Some(0.7),
///     max_tokens: Some(1000),
/// };
///
/// assert_eq!(request.temperature, Some(0.7));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TextRequest {
    /// Fixed system instruction describing the task
    pub system: String,
    /// The user content to operate on
    pub content: String,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
}
