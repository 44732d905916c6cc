//! Terminal status projection.

use std::sync::Arc;
use storyreel_core::JobOutcome;
use storyreel_error::StoryreelResult;
use storyreel_interface::StoryRepository;

/// Maps job outcomes back onto the story row's video fields.
#[derive(Clone)]
pub struct StatusProjector {
    repo: Arc<dyn StoryRepository>,
}

impl StatusProjector {
    /// Create a projector writing through `repo`.
    pub fn new(repo: Arc<dyn StoryRepository>) -> Self {
        Self { repo }
    }

    /// Write the terminal status (and artifact url) in one update.
    ///
    /// `Completed` projects to `completed`; `Failed` and `TimedOut` both
    /// project to `failed` with the placeholder url — the distinction
    /// between them lives in logs, not in the row.
    #[tracing::instrument(skip(self, outcome))]
    pub async fn project(&self, story_id: i32, outcome: &JobOutcome) -> StoryreelResult<()> {
        match outcome {
            JobOutcome::Completed { url } => self.repo.complete_video(story_id, url).await,
            JobOutcome::Failed { url } | JobOutcome::TimedOut { url } => {
                self.repo.fail_video(story_id, url).await
            }
        }
    }
}
