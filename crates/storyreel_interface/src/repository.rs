//! Repository trait for the story content store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use storyreel_core::{NewStory, Story};
use storyreel_error::StoryreelResult;

/// Which root stories a listing returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StoryFilter {
    /// True originals only (excludes forked copies)
    #[default]
    All,
    /// Roots authored by this user (their originals plus their forks)
    Mine(
        /// Author nickname
        String,
    ),
    /// Roots with a completed video
    WithVideo,
}

/// Sort key for story listings; always descending.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StorySort {
    /// Newest first
    #[default]
    CreatedAt,
    /// Most contributed-to first
    ForkCount,
}

/// The story content store.
///
/// The single shared mutable resource in the system. Implementations must
/// run the two row-mutating validation paths — contribution
/// check-and-increment and the video generation claim — as single
/// transactions, so concurrent requests against the same story cannot
/// oversubscribe contributor slots or double-start a job.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Create a story.
    ///
    /// Validates title/author/content non-empty and the contributor cap in
    /// 1-5. When `parent_id` is set, atomically checks the parent's
    /// remaining contributor slots and increments its `fork_count` before
    /// inserting the child.
    async fn create(&self, new_story: NewStory) -> StoryreelResult<Story>;

    /// Copy a root story into a new, independently owned root.
    ///
    /// Rejects self-fork and duplicate fork by the same author with distinct
    /// error kinds.
    async fn fork(&self, story_id: i32, author: &str) -> StoryreelResult<Story>;

    /// Fetch a single story by id.
    async fn get(&self, id: i32) -> StoryreelResult<Story>;

    /// List root stories matching `filter`, sorted descending by `sort`.
    async fn list(
        &self,
        filter: &StoryFilter,
        sort: StorySort,
        limit: i64,
    ) -> StoryreelResult<Vec<Story>>;

    /// Contributions of a root story, ordered by creation time ascending,
    /// ties by id ascending.
    async fn contributions(&self, root_id: i32) -> StoryreelResult<Vec<Story>>;

    /// Claim the right to start a video generation job.
    ///
    /// In one transaction: verify the story exists, is a root, is owned by
    /// `author`, and is not already generating; then set `video_status` to
    /// `generating`. Returns the claimed story.
    async fn claim_video_generation(&self, id: i32, author: &str) -> StoryreelResult<Story>;

    /// Claim a regeneration run. Same gate as [`Self::claim_video_generation`]
    /// minus the authorship check.
    async fn claim_video_regeneration(&self, id: i32) -> StoryreelResult<Story>;

    /// Project a successful job outcome: status `completed` plus the url, in
    /// one update.
    async fn complete_video(&self, id: i32, url: &str) -> StoryreelResult<()>;

    /// Project a failed or timed-out outcome: status `failed` plus the
    /// placeholder url, in one update.
    async fn fail_video(&self, id: i32, url: &str) -> StoryreelResult<()>;
}
