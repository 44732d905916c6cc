//! Video job handle and outcome types.

use serde::{Deserialize, Serialize};

/// Opaque reference to an in-progress video generation job.
///
/// Returned by the video service on submission and refreshed on every poll.
/// The `id` is the service's operation name; the remaining fields reflect the
/// last observed state.
///
/// # Examples
///
/// ```
/// use storyreel_core::VideoJobHandle;
///
/// let handle = VideoJobHandle::pending("operations/abc123");
/// assert!(!handle.done);
/// assert!(handle.results.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoJobHandle {
    /// Service-assigned operation name
    pub id: String,
    /// Whether the service reports the job finished
    pub done: bool,
    /// Error payload reported by the service, if any
    pub error: Option<String>,
    /// Generated artifacts, present only on successful completion
    pub results: Vec<VideoResult>,
}

impl VideoJobHandle {
    /// A freshly submitted, not-yet-done handle.
    pub fn pending(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            done: false,
            error: None,
            results: Vec::new(),
        }
    }
}

/// A single generated video artifact reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoResult {
    /// Service uri from which the artifact bytes can be downloaded
    pub uri: String,
}

/// Terminal outcome of a video generation job.
///
/// Every variant carries the artifact url handed back to the caller: the
/// generated video on completion, the placeholder otherwise. The job never
/// surfaces an error to its caller; the true outcome is observable through
/// this variant, the persisted status field, and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobOutcome {
    /// The job produced an artifact, stored at `url`
    Completed {
        /// Public url of the stored artifact
        url: String,
    },
    /// The job reported an error or yielded no usable result
    Failed {
        /// Public url of the placeholder artifact
        url: String,
    },
    /// The poll ceiling was exhausted before the job finished
    TimedOut {
        /// Public url of the placeholder artifact
        url: String,
    },
}

impl JobOutcome {
    /// The artifact url carried by this outcome.
    pub fn url(&self) -> &str {
        match self {
            JobOutcome::Completed { url } | JobOutcome::Failed { url } | JobOutcome::TimedOut { url } => url,
        }
    }

    /// Whether the outcome projects to `VideoStatus::Completed`.
    pub fn is_completed(&self) -> bool {
        matches!(self, JobOutcome::Completed { .. })
    }
}
