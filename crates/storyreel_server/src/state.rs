//! Shared application state.

use std::sync::Arc;
use storyreel_interface::{StoryRepository, TextGenerator};
use storyreel_pipeline::VideoPipeline;
use storyreel_storage::VideoStore;

/// State shared across request handlers.
///
/// All services are injected; nothing in here reaches for a global handle.
/// The text generator is optional so the service degrades gracefully when no
/// polish/enhancement backend is configured.
#[derive(Clone)]
pub struct AppState {
    /// The story content store
    pub repo: Arc<dyn StoryRepository>,
    /// Text-generation backend for story polishing, if configured
    pub text: Option<Arc<dyn TextGenerator>>,
    /// The background video generation pipeline
    pub pipeline: Arc<VideoPipeline>,
    /// Video artifact store backing the `/videos` prefix
    pub store: VideoStore,
}

impl AppState {
    /// Assemble state from its injected parts.
    pub fn new(
        repo: Arc<dyn StoryRepository>,
        text: Option<Arc<dyn TextGenerator>>,
        pipeline: Arc<VideoPipeline>,
        store: VideoStore,
    ) -> Self {
        Self {
            repo,
            text,
            pipeline,
            store,
        }
    }
}
