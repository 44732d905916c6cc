//! Trait definitions for the external generation services.

use async_trait::async_trait;
use storyreel_core::{TextRequest, VideoJobHandle, VideoResult};
use storyreel_error::StoryreelResult;

/// Core trait for text-generation backends.
///
/// Used twice in the service: direct story polishing and cinematic prompt
/// enhancement. Implementations return an error for transport failures and
/// for empty replies; recovery policy belongs to the caller.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request.
    async fn generate(&self, request: &TextRequest) -> StoryreelResult<String>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o-mini").
    fn model_name(&self) -> &str;
}

/// Trait for the asynchronous video-generation service.
///
/// The service only exposes poll-based completion: `submit` returns an opaque
/// job handle, `poll` re-asks for its state, and `download` materializes a
/// finished artifact. The job runner drives these from a background task.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Submit a generation request, returning an opaque job handle.
    async fn submit(&self, prompt: &str) -> StoryreelResult<VideoJobHandle>;

    /// Query the current state of a job, returning a refreshed handle.
    async fn poll(&self, handle: &VideoJobHandle) -> StoryreelResult<VideoJobHandle>;

    /// Download the raw bytes of a generated artifact.
    async fn download(&self, result: &VideoResult) -> StoryreelResult<Vec<u8>>;

    /// Model identifier (e.g., "veo-3.1-generate-preview").
    fn model_name(&self) -> &str;
}
