//! Video lifecycle states.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a story's video.
///
/// Transitions only `None -> Generating -> {Completed, Failed}`, plus
/// `{Completed, Failed} -> Generating` for regeneration. A second request
/// while already `Generating` is rejected as a duplicate.
///
/// # Examples
///
/// ```
/// use storyreel_core::VideoStatus;
/// use std::str::FromStr;
///
/// assert_eq!(VideoStatus::Generating.as_str(), "generating");
/// assert_eq!(VideoStatus::from_str("completed").unwrap(), VideoStatus::Completed);
/// assert!(VideoStatus::None.can_start_generation());
/// assert!(!VideoStatus::Generating.can_start_generation());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VideoStatus {
    /// No video has been requested
    #[default]
    None,
    /// A generation job is in flight
    Generating,
    /// A video was generated and its url recorded
    Completed,
    /// The last generation attempt failed or timed out
    Failed,
}

impl VideoStatus {
    /// The lowercase column value stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoStatus::None => "none",
            VideoStatus::Generating => "generating",
            VideoStatus::Completed => "completed",
            VideoStatus::Failed => "failed",
        }
    }

    /// Whether a new generation job may be claimed from this state.
    ///
    /// Every state except `Generating` may start a job; `Completed` and
    /// `Failed` re-enter `Generating` on regeneration.
    pub fn can_start_generation(&self) -> bool {
        !matches!(self, VideoStatus::Generating)
    }

    /// Whether this is a terminal job outcome state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, VideoStatus::Completed | VideoStatus::Failed)
    }
}
