//! Video job error types.

/// Error conditions for the video generation job lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum VideoErrorKind {
    /// Submitting the generation request failed
    #[display("Failed to submit video job: {}", _0)]
    Submit(String),
    /// A poll request failed
    #[display("Failed to poll video job: {}", _0)]
    Poll(String),
    /// The service reported an error payload for the job
    #[display("Video job reported an error: {}", _0)]
    JobError(String),
    /// The job completed with no usable result
    #[display("Video job completed with no generated videos")]
    EmptyResult,
    /// The poll attempt ceiling was exhausted
    #[display("Video job timed out after {} polls ({} seconds)", attempts, waited_secs)]
    TimedOut {
        /// Number of polls issued before giving up
        attempts: u32,
        /// Total seconds spent waiting
        waited_secs: u64,
    },
    /// Downloading the result artifact failed
    #[display("Failed to download video artifact: {}", _0)]
    Download(String),
}

/// Error type for video job operations.
///
/// # Examples
///
/// ```
/// use storyreel_error::{VideoError, VideoErrorKind};
///
/// let err = VideoError::new(VideoErrorKind::EmptyResult);
/// assert!(format!("{}", err).contains("no generated videos"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Video Error: {} at line {} in {}", kind, line, file)]
pub struct VideoError {
    /// The specific error condition
    pub kind: VideoErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl VideoError {
    /// Create a new VideoError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: VideoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
