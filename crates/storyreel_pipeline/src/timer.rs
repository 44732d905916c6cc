//! Production poll timer.

use async_trait::async_trait;
use std::time::Duration;
use storyreel_interface::PollTimer;

/// Poll timer backed by tokio time.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntervalTimer;

#[async_trait]
impl PollTimer for IntervalTimer {
    async fn wait(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}
