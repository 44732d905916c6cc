//! The background video generation pipeline.

use crate::{aggregate, PromptComposer, StatusProjector, VideoJobRunner};
use std::sync::Arc;
use storyreel_error::StoryreelResult;
use storyreel_interface::StoryRepository;
use storyreel_storage::VideoStore;
use tracing::{error, info};

/// Owns the full background leg of a video generation request:
/// aggregate -> compose -> run -> project.
///
/// The triggering request returns as soon as the claim flips the row to
/// `generating`; [`VideoPipeline::generate`] then runs on a spawned task and
/// absorbs every error. Whatever happens inside — aggregation failure,
/// composer fallback, job timeout, even a projection error — the row ends in
/// `completed` or `failed`, never stuck at `generating`.
#[derive(Clone)]
pub struct VideoPipeline {
    repo: Arc<dyn StoryRepository>,
    composer: PromptComposer,
    runner: VideoJobRunner,
    projector: StatusProjector,
    store: VideoStore,
}

impl VideoPipeline {
    /// Assemble a pipeline from its injected parts.
    pub fn new(
        repo: Arc<dyn StoryRepository>,
        composer: PromptComposer,
        runner: VideoJobRunner,
        store: VideoStore,
    ) -> Self {
        let projector = StatusProjector::new(repo.clone());
        Self {
            repo,
            composer,
            runner,
            projector,
            store,
        }
    }

    /// Run video generation for a claimed story to its terminal status.
    ///
    /// Background entry point; never returns an error. Callers spawn this
    /// after `claim_video_generation` succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn generate(&self, story_id: i32) {
        if let Err(e) = self.run_generation(story_id).await {
            error!(story_id, error = %e, "Video generation failed, marking story failed");
            let placeholder = self.store.placeholder_url();
            if let Err(e) = self.repo.fail_video(story_id, &placeholder).await {
                error!(story_id, error = %e, "Failed to record failed video status");
            }
        }
    }

    async fn run_generation(&self, story_id: i32) -> StoryreelResult<()> {
        let thread = aggregate(self.repo.as_ref(), story_id).await?;
        info!(
            story_id,
            contributions = thread.contributions.len(),
            "Starting video generation over aggregated thread"
        );

        let prompt = self.composer.compose(&thread.full_content).await;
        let outcome = self.runner.run(story_id, &prompt).await;
        self.projector.project(story_id, &outcome).await
    }
}
