//! In-memory implementation of StoryRepository.
//!
//! A HashMap-backed store with the same invariant semantics as the database
//! repository. Useful for tests and for running the service without a
//! database. All data is lost when the repository is dropped.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use storyreel_core::{NewStory, Story, VideoStatus};
use storyreel_error::{StoryError, StoryErrorKind, StoryreelResult};
use storyreel_interface::{StoryFilter, StoryRepository, StorySort};
use tokio::sync::RwLock;

/// In-memory story repository.
///
/// All operations take the single write lock for their full duration, which
/// serializes the check-and-increment and claim paths the same way the
/// database implementation's row locks do.
///
/// # Example
/// ```
/// use storyreel_pipeline::InMemoryStoryRepository;
/// use storyreel_interface::StoryRepository;
/// use storyreel_core::NewStory;
///
/// # #[tokio::main]
/// # async fn main() {
/// let repo = InMemoryStoryRepository::new();
/// let story = repo
///     .create(NewStory {
///         title: "The Lighthouse".into(),
///         author: "ada".into(),
///         content: "The lamp went dark.".into(),
///         parent_id: None,
///         max_contributors: 3,
///     })
///     .await
///     .unwrap();
/// assert_eq!(story.id, 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStoryRepository {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    stories: HashMap<i32, Story>,
    next_id: i32,
}

impl Inner {
    fn assign_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

impl InMemoryStoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored stories (for testing).
    pub async fn len(&self) -> usize {
        self.inner.read().await.stories.len()
    }

    /// Whether the repository is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.stories.is_empty()
    }
}

fn validate(new_story: &NewStory) -> Result<(), StoryError> {
    if new_story.title.trim().is_empty() {
        return Err(StoryError::new(StoryErrorKind::EmptyTitle));
    }
    if new_story.author.trim().is_empty() {
        return Err(StoryError::new(StoryErrorKind::EmptyAuthor));
    }
    if new_story.content.trim().is_empty() {
        return Err(StoryError::new(StoryErrorKind::EmptyContent));
    }
    if !(1..=5).contains(&new_story.max_contributors) {
        return Err(StoryError::new(StoryErrorKind::ContributorCapOutOfRange));
    }
    Ok(())
}

#[async_trait]
impl StoryRepository for InMemoryStoryRepository {
    async fn create(&self, new_story: NewStory) -> StoryreelResult<Story> {
        validate(&new_story)?;

        let mut inner = self.inner.write().await;
        let is_original = new_story.parent_id.is_none();

        if let Some(parent_id) = new_story.parent_id {
            let parent = inner
                .stories
                .get(&parent_id)
                .filter(|p| p.parent_id.is_none())
                .ok_or_else(|| StoryError::new(StoryErrorKind::ParentNotFound))?;

            if parent.fork_count >= parent.max_contributors {
                return Err(StoryError::new(StoryErrorKind::ContributorCapReached(
                    parent.max_contributors,
                ))
                .into());
            }

            inner
                .stories
                .get_mut(&parent_id)
                .expect("parent checked above")
                .fork_count += 1;
        }

        let id = inner.assign_id();
        let story = Story {
            id,
            title: new_story.title,
            author: new_story.author,
            content: new_story.content,
            parent_id: new_story.parent_id,
            forked_from: None,
            max_contributors: new_story.max_contributors,
            fork_count: 0,
            is_original,
            video_status: VideoStatus::None,
            video_url: None,
            created_at: Utc::now().naive_utc(),
        };
        inner.stories.insert(id, story.clone());
        Ok(story)
    }

    async fn fork(&self, story_id: i32, author: &str) -> StoryreelResult<Story> {
        let mut inner = self.inner.write().await;

        let original = inner
            .stories
            .get(&story_id)
            .filter(|s| s.parent_id.is_none())
            .cloned()
            .ok_or_else(|| StoryError::new(StoryErrorKind::StoryNotFound(story_id)))?;

        if original.author == author {
            return Err(StoryError::new(StoryErrorKind::SelfFork).into());
        }

        let already_forked = inner.stories.values().any(|s| {
            s.forked_from == Some(story_id) && s.author == author && s.parent_id.is_none()
        });
        if already_forked {
            return Err(StoryError::new(StoryErrorKind::AlreadyForked).into());
        }

        let id = inner.assign_id();
        let story = Story {
            id,
            title: original.title,
            author: author.to_string(),
            content: original.content,
            parent_id: None,
            forked_from: Some(story_id),
            max_contributors: 5,
            fork_count: 0,
            is_original: true,
            video_status: VideoStatus::None,
            video_url: None,
            created_at: Utc::now().naive_utc(),
        };
        inner.stories.insert(id, story.clone());
        Ok(story)
    }

    async fn get(&self, id: i32) -> StoryreelResult<Story> {
        self.inner
            .read()
            .await
            .stories
            .get(&id)
            .cloned()
            .ok_or_else(|| StoryError::new(StoryErrorKind::StoryNotFound(id)).into())
    }

    async fn list(
        &self,
        filter: &StoryFilter,
        sort: StorySort,
        limit: i64,
    ) -> StoryreelResult<Vec<Story>> {
        let inner = self.inner.read().await;

        let mut stories: Vec<Story> = inner
            .stories
            .values()
            .filter(|s| s.parent_id.is_none())
            .filter(|s| match filter {
                StoryFilter::All => s.forked_from.is_none(),
                StoryFilter::Mine(author) => &s.author == author,
                StoryFilter::WithVideo => s.video_status == VideoStatus::Completed,
            })
            .cloned()
            .collect();

        match sort {
            StorySort::CreatedAt => {
                stories.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            }
            StorySort::ForkCount => {
                stories.sort_by(|a, b| b.fork_count.cmp(&a.fork_count).then(b.id.cmp(&a.id)));
            }
        }

        stories.truncate(limit.max(0) as usize);
        Ok(stories)
    }

    async fn contributions(&self, root_id: i32) -> StoryreelResult<Vec<Story>> {
        let inner = self.inner.read().await;

        let mut contributions: Vec<Story> = inner
            .stories
            .values()
            .filter(|s| s.parent_id == Some(root_id))
            .cloned()
            .collect();

        contributions.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(contributions)
    }

    async fn claim_video_generation(&self, id: i32, author: &str) -> StoryreelResult<Story> {
        let mut inner = self.inner.write().await;

        let story = inner
            .stories
            .get(&id)
            .ok_or_else(|| StoryError::new(StoryErrorKind::StoryNotFound(id)))?;

        if story.parent_id.is_some() {
            return Err(StoryError::new(StoryErrorKind::NotAnOriginal).into());
        }
        if story.author != author {
            return Err(StoryError::new(StoryErrorKind::NotTheAuthor).into());
        }
        if story.video_status == VideoStatus::Generating {
            return Err(StoryError::new(StoryErrorKind::AlreadyGenerating).into());
        }

        let story = inner.stories.get_mut(&id).expect("story checked above");
        story.video_status = VideoStatus::Generating;
        Ok(story.clone())
    }

    async fn claim_video_regeneration(&self, id: i32) -> StoryreelResult<Story> {
        let mut inner = self.inner.write().await;

        let story = inner
            .stories
            .get(&id)
            .ok_or_else(|| StoryError::new(StoryErrorKind::StoryNotFound(id)))?;

        if story.parent_id.is_some() {
            return Err(StoryError::new(StoryErrorKind::NotAnOriginal).into());
        }
        if story.video_status == VideoStatus::Generating {
            return Err(StoryError::new(StoryErrorKind::AlreadyGenerating).into());
        }

        let story = inner.stories.get_mut(&id).expect("story checked above");
        story.video_status = VideoStatus::Generating;
        Ok(story.clone())
    }

    async fn complete_video(&self, id: i32, url: &str) -> StoryreelResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(story) = inner.stories.get_mut(&id) {
            story.video_status = VideoStatus::Completed;
            story.video_url = Some(url.to_string());
        }
        Ok(())
    }

    async fn fail_video(&self, id: i32, url: &str) -> StoryreelResult<()> {
        let mut inner = self.inner.write().await;
        if let Some(story) = inner.stories.get_mut(&id) {
            story.video_status = VideoStatus::Failed;
            story.video_url = Some(url.to_string());
        }
        Ok(())
    }
}
