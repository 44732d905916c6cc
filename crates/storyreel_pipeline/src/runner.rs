//! The video job runner state machine.

use std::sync::Arc;
use std::time::Duration;
use storyreel_core::JobOutcome;
use storyreel_error::{StoryreelError, StoryreelErrorKind, StoryreelResult, VideoError, VideoErrorKind};
use storyreel_interface::{PollTimer, VideoGenerator};
use storyreel_storage::VideoStore;
use tracing::{debug, error, info, warn};

/// Fixed interval between job polls.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Poll attempt ceiling; with [`POLL_INTERVAL`] this caps the total wait at
/// ten minutes.
pub const MAX_POLL_ATTEMPTS: u32 = 60;

/// Drives one video generation job to a terminal state.
///
/// States: `Submitted -> Polling -> {Completed, Failed, TimedOut}`. The
/// external service only exposes poll-based completion, so the runner
/// re-asks at a fixed interval until the job finishes or the attempt ceiling
/// is exhausted. Waits come from the injected [`PollTimer`], which lets
/// tests drive the loop without wall-clock delays.
///
/// The runner never fails from its caller's point of view: every
/// non-completed branch — error payload, empty result, timeout, download or
/// storage failure — degrades to the pre-provisioned placeholder artifact,
/// with the true outcome preserved in the returned [`JobOutcome`] and logs.
#[derive(Clone)]
pub struct VideoJobRunner {
    driver: Arc<dyn VideoGenerator>,
    store: VideoStore,
    timer: Arc<dyn PollTimer>,
    poll_interval: Duration,
    max_attempts: u32,
}

impl VideoJobRunner {
    /// Create a runner with the default poll interval and attempt ceiling.
    pub fn new(
        driver: Arc<dyn VideoGenerator>,
        store: VideoStore,
        timer: Arc<dyn PollTimer>,
    ) -> Self {
        Self {
            driver,
            store,
            timer,
            poll_interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
        }
    }

    /// Override the poll interval and attempt ceiling.
    pub fn with_limits(mut self, poll_interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = poll_interval;
        self.max_attempts = max_attempts;
        self
    }

    /// Run a job to its terminal state, returning the artifact reference.
    #[tracing::instrument(skip(self, prompt), fields(model = %self.driver.model_name()))]
    pub async fn run(&self, story_id: i32, prompt: &str) -> JobOutcome {
        match self.try_run(story_id, prompt).await {
            Ok(url) => {
                info!(story_id, url = %url, "Video job completed");
                JobOutcome::Completed { url }
            }
            Err(e) => {
                let url = self.store.placeholder_url();
                if is_timeout(&e) {
                    warn!(story_id, error = %e, "Video job timed out, using placeholder");
                    JobOutcome::TimedOut { url }
                } else {
                    error!(story_id, error = %e, "Video job failed, using placeholder");
                    JobOutcome::Failed { url }
                }
            }
        }
    }

    /// Submit, poll to completion, download, and store the artifact.
    async fn try_run(&self, story_id: i32, prompt: &str) -> StoryreelResult<String> {
        let mut handle = self.driver.submit(prompt).await?;
        debug!(job = %handle.id, "Video job submitted");

        let mut attempts: u32 = 0;
        while !handle.done {
            if attempts >= self.max_attempts {
                return Err(VideoError::new(VideoErrorKind::TimedOut {
                    attempts,
                    waited_secs: u64::from(attempts) * self.poll_interval.as_secs(),
                })
                .into());
            }

            self.timer.wait(self.poll_interval).await;
            handle = self.driver.poll(&handle).await?;
            attempts += 1;
            debug!(job = %handle.id, attempts, done = handle.done, "Polled video job");
        }

        if let Some(message) = handle.error {
            return Err(VideoError::new(VideoErrorKind::JobError(message)).into());
        }

        let result = handle
            .results
            .first()
            .ok_or_else(|| VideoError::new(VideoErrorKind::EmptyResult))?;

        let bytes = self.driver.download(result).await?;
        self.store.store(story_id, &bytes).await
    }
}

/// Whether an error is the runner's own poll-ceiling timeout.
fn is_timeout(error: &StoryreelError) -> bool {
    matches!(
        error.kind(),
        StoryreelErrorKind::Video(VideoError {
            kind: VideoErrorKind::TimedOut { .. },
            ..
        })
    )
}
