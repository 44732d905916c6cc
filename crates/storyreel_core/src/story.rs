//! Story record types.

use crate::VideoStatus;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted story row.
///
/// Roots (`parent_id` null) anchor a lineage tree of contributions; forked
/// roots additionally record their origin in `forked_from`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    /// Monotonically assigned identity
    pub id: i32,
    /// Story title
    pub title: String,
    /// Author nickname
    pub author: String,
    /// Free-text body
    pub content: String,
    /// Non-null: this row is a contribution appended to the referenced root
    pub parent_id: Option<i32>,
    /// Non-null: this root was created by forking the referenced root
    pub forked_from: Option<i32>,
    /// Contributor cap, 1-5
    pub max_contributors: i32,
    /// Contributions accepted so far
    pub fork_count: i32,
    /// True iff `parent_id` is null
    pub is_original: bool,
    /// Video lifecycle state
    pub video_status: VideoStatus,
    /// Artifact url, populated once a job reaches a terminal state
    pub video_url: Option<String>,
    /// Insertion timestamp; sort key for contributions
    pub created_at: NaiveDateTime,
}

/// Payload for creating a story (original submission or contribution).
///
/// # Examples
///
/// ```
/// use storyreel_core::NewStory;
///
/// let new = NewStory {
///     title: "The Lighthouse".to_string(),
///     author: "ada".to_string(),
///     content: "The lamp went dark at midnight.".to_string(),
///     parent_id: None,
///     max_contributors: 3,
/// };
/// assert!(new.parent_id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStory {
    /// Story title
    pub title: String,
    /// Author nickname
    pub author: String,
    /// Free-text body
    pub content: String,
    /// Set when this submission continues an existing root story
    pub parent_id: Option<i32>,
    /// Contributor cap for the new story
    pub max_contributors: i32,
}

/// A root story aggregated with its ordered contributions.
///
/// `full_content` is the root content followed by each contribution's
/// content, joined with blank lines, in creation order (ties by id). The
/// aggregation is deterministic: the same tree always yields byte-identical
/// output, so prompt composition is reproducible across retries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryThread {
    /// The root story
    pub story: Story,
    /// Contributions ordered by creation time ascending, ties by id
    pub contributions: Vec<Story>,
    /// Root content plus contributions joined with blank-line separators
    pub full_content: String,
}

impl StoryThread {
    /// Assemble a thread from a root and its ordered contributions.
    pub fn assemble(story: Story, contributions: Vec<Story>) -> Self {
        let mut full_content = story.content.clone();
        for contribution in &contributions {
            full_content.push_str("\n\n");
            full_content.push_str(&contribution.content);
        }
        Self {
            story,
            contributions,
            full_content,
        }
    }
}
