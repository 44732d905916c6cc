//! Injectable wait source for the polling loop.

use async_trait::async_trait;
use std::time::Duration;

/// Wait source driving the video job poll loop.
///
/// The production implementation sleeps on tokio time; tests substitute a
/// counting no-op so the loop runs deterministically without wall-clock
/// delays.
#[async_trait]
pub trait PollTimer: Send + Sync {
    /// Wait out one poll interval.
    async fn wait(&self, interval: Duration);
}
