//! Tests for the video job runner state machine.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use storyreel_core::{JobOutcome, VideoJobHandle, VideoResult};
use storyreel_error::{ModelsError, ModelsErrorKind, StoryreelResult};
use storyreel_interface::{PollTimer, VideoGenerator};
use storyreel_pipeline::{VideoJobRunner, MAX_POLL_ATTEMPTS};
use storyreel_storage::VideoStore;

/// How a fake job behaves once polled.
#[derive(Clone)]
enum Behavior {
    /// Report done with a downloadable result after this many polls
    DoneAfter(u32),
    /// Never report done
    NeverDone,
    /// Report done with an error payload
    ErrorPayload,
    /// Report done with an empty result list
    EmptyResults,
    /// Report done with a result whose download fails
    DownloadFails,
}

struct FakeVideoGenerator {
    behavior: Behavior,
    polls: AtomicU32,
}

impl FakeVideoGenerator {
    fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            polls: AtomicU32::new(0),
        })
    }

    fn done_handle(&self) -> VideoJobHandle {
        match self.behavior {
            Behavior::ErrorPayload => VideoJobHandle {
                id: "op".to_string(),
                done: true,
                error: Some("quota exhausted".to_string()),
                results: Vec::new(),
            },
            Behavior::EmptyResults => VideoJobHandle {
                id: "op".to_string(),
                done: true,
                error: None,
                results: Vec::new(),
            },
            _ => VideoJobHandle {
                id: "op".to_string(),
                done: true,
                error: None,
                results: vec![VideoResult {
                    uri: "https://example.com/video.mp4".to_string(),
                }],
            },
        }
    }
}

#[async_trait]
impl VideoGenerator for FakeVideoGenerator {
    async fn submit(&self, _prompt: &str) -> StoryreelResult<VideoJobHandle> {
        Ok(VideoJobHandle::pending("op"))
    }

    async fn poll(&self, _handle: &VideoJobHandle) -> StoryreelResult<VideoJobHandle> {
        let polls = self.polls.fetch_add(1, Ordering::SeqCst) + 1;
        match self.behavior {
            Behavior::NeverDone => Ok(VideoJobHandle::pending("op")),
            Behavior::DoneAfter(n) if polls < n => Ok(VideoJobHandle::pending("op")),
            _ => Ok(self.done_handle()),
        }
    }

    async fn download(&self, _result: &VideoResult) -> StoryreelResult<Vec<u8>> {
        match self.behavior {
            Behavior::DownloadFails => {
                Err(ModelsError::new(ModelsErrorKind::Http("connection reset".into())).into())
            }
            _ => Ok(b"generated mp4 bytes".to_vec()),
        }
    }

    fn model_name(&self) -> &str {
        "fake-veo"
    }
}

/// Poll timer that counts waits instead of sleeping.
#[derive(Default)]
struct CountingTimer {
    waits: AtomicU32,
}

#[async_trait]
impl PollTimer for CountingTimer {
    async fn wait(&self, _interval: Duration) {
        self.waits.fetch_add(1, Ordering::SeqCst);
    }
}

fn runner_with(
    driver: Arc<FakeVideoGenerator>,
    timer: Arc<CountingTimer>,
) -> (VideoJobRunner, VideoStore, tempfile::TempDir) {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = VideoStore::new(temp_dir.path()).unwrap();
    let runner = VideoJobRunner::new(driver, store.clone(), timer);
    (runner, store, temp_dir)
}

#[tokio::test]
async fn job_completes_and_stores_artifact() {
    let driver = FakeVideoGenerator::new(Behavior::DoneAfter(3));
    let timer = Arc::new(CountingTimer::default());
    let (runner, _store, temp_dir) = runner_with(driver.clone(), timer.clone());

    let outcome = runner.run(9, "a prompt").await;

    let JobOutcome::Completed { url } = &outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert!(url.starts_with("/videos/story_9_"), "unexpected url {url}");

    let filename = url.strip_prefix("/videos/").unwrap();
    let bytes = std::fs::read(temp_dir.path().join(filename)).unwrap();
    assert_eq!(bytes, b"generated mp4 bytes");

    // One wait per poll, and polling stopped as soon as the job was done.
    assert_eq!(timer.waits.load(Ordering::SeqCst), 3);
    assert_eq!(driver.polls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn never_done_job_times_out_at_the_attempt_ceiling() {
    let driver = FakeVideoGenerator::new(Behavior::NeverDone);
    let timer = Arc::new(CountingTimer::default());
    let (runner, store, _temp_dir) = runner_with(driver.clone(), timer.clone());

    let outcome = runner.run(1, "a prompt").await;

    let JobOutcome::TimedOut { url } = &outcome else {
        panic!("expected timeout, got {outcome:?}");
    };
    assert_eq!(url, &store.placeholder_url());
    assert_eq!(driver.polls.load(Ordering::SeqCst), MAX_POLL_ATTEMPTS);
}

#[tokio::test]
async fn error_payload_degrades_to_placeholder() {
    let driver = FakeVideoGenerator::new(Behavior::ErrorPayload);
    let timer = Arc::new(CountingTimer::default());
    let (runner, store, _temp_dir) = runner_with(driver, timer);

    let outcome = runner.run(1, "a prompt").await;

    let JobOutcome::Failed { url } = &outcome else {
        panic!("expected failure, got {outcome:?}");
    };
    assert_eq!(url, &store.placeholder_url());
}

#[tokio::test]
async fn empty_result_list_degrades_to_placeholder() {
    let driver = FakeVideoGenerator::new(Behavior::EmptyResults);
    let timer = Arc::new(CountingTimer::default());
    let (runner, store, _temp_dir) = runner_with(driver, timer);

    let outcome = runner.run(1, "a prompt").await;
    assert_eq!(
        outcome,
        JobOutcome::Failed {
            url: store.placeholder_url()
        }
    );
}

#[tokio::test]
async fn download_failure_degrades_to_placeholder() {
    let driver = FakeVideoGenerator::new(Behavior::DownloadFails);
    let timer = Arc::new(CountingTimer::default());
    let (runner, store, _temp_dir) = runner_with(driver, timer);

    let outcome = runner.run(1, "a prompt").await;
    assert_eq!(
        outcome,
        JobOutcome::Failed {
            url: store.placeholder_url()
        }
    );
}

#[tokio::test]
async fn lowered_ceiling_is_respected() {
    let driver = FakeVideoGenerator::new(Behavior::NeverDone);
    let timer = Arc::new(CountingTimer::default());
    let temp_dir = tempfile::tempdir().unwrap();
    let store = VideoStore::new(temp_dir.path()).unwrap();
    let runner = VideoJobRunner::new(driver.clone(), store, timer)
        .with_limits(Duration::from_secs(1), 5);

    let outcome = runner.run(1, "a prompt").await;
    assert!(matches!(outcome, JobOutcome::TimedOut { .. }));
    assert_eq!(driver.polls.load(Ordering::SeqCst), 5);
}
