//! StoryRepository trait implementation.
//!
//! Provides the database-backed implementation of the StoryRepository trait.
//! Diesel runs on blocking connections, so every operation clones the pool
//! and hops onto the blocking thread pool.

use crate::schema::stories;
use crate::{NewStoryRow, PgPool, StoryRow};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind as DieselDatabaseErrorKind;
use diesel::result::Error as DieselError;
use storyreel_core::{NewStory, Story, VideoStatus};
use storyreel_error::{
    DatabaseError, DatabaseErrorKind, StoryError, StoryErrorKind, StoryreelError, StoryreelResult,
};
use storyreel_interface::{StoryFilter, StoryRepository, StorySort};

/// Database-backed story repository.
#[derive(Clone)]
pub struct DatabaseStoryRepository {
    pool: PgPool,
}

impl DatabaseStoryRepository {
    /// Create a new story repository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a closure against a pooled connection on the blocking thread pool.
    async fn run<T, F>(&self, f: F) -> StoryreelResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> StoryreelResult<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DatabaseError::new(DatabaseErrorKind::Pool(e.to_string())))?;
            f(&mut conn)
        })
        .await
        .map_err(|e| {
            StoryreelError::from(DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))
        })?
    }
}

/// Validate the user-supplied fields of a story submission.
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

/// Load a root story row with a `FOR UPDATE` lock inside a transaction.
fn lock_root_row(conn: &mut PgConnection, id: i32) -> StoryreelResult<StoryRow> {
    let row: Option<StoryRow> = stories::table
        .find(id)
        .for_update()
        .first(conn)
        .optional()
        .map_err(DatabaseError::from)?;

    match row {
        Some(row) if row.parent_id.is_none() => Ok(row),
        _ => Err(StoryError::new(StoryErrorKind::StoryNotFound(id)).into()),
    }
}

#[async_trait]
impl StoryRepository for DatabaseStoryRepository {
    #[tracing::instrument(skip(self, new_story), fields(author = %new_story.author, parent_id = ?new_story.parent_id))]
    async fn create(&self, new_story: NewStory) -> StoryreelResult<Story> {
        validate(&new_story)?;

        self.run(move |conn| {
            conn.transaction::<Story, StoryreelError, _>(|conn| {
                let is_original = new_story.parent_id.is_none();

                if let Some(parent_id) = new_story.parent_id {
                    // Lock the parent so the cap check and increment are a
                    // single atomic step under concurrent submissions.
                    let parent: Option<StoryRow> = stories::table
                        .find(parent_id)
                        .filter(stories::parent_id.is_null())
                        .for_update()
                        .first(conn)
                        .optional()?;

                    let parent = parent
                        .ok_or_else(|| StoryError::new(StoryErrorKind::ParentNotFound))?;

                    if parent.fork_count >= parent.max_contributors {
                        return Err(StoryError::new(StoryErrorKind::ContributorCapReached(
                            parent.max_contributors,
                        ))
                        .into());
                    }

                    diesel::update(stories::table.find(parent_id))
                        .set(stories::fork_count.eq(stories::fork_count + 1))
                        .execute(conn)?;
                }

                let row: StoryRow = diesel::insert_into(stories::table)
                    .values(NewStoryRow {
                        title: new_story.title.clone(),
                        author: new_story.author.clone(),
                        content: new_story.content.clone(),
                        parent_id: new_story.parent_id,
                        forked_from: None,
                        max_contributors: new_story.max_contributors,
                        is_original,
                        video_status: VideoStatus::None.as_str().to_string(),
                    })
                    .get_result(conn)?;

                tracing::info!(id = row.id, is_original, "Story created");
                Ok(Story::try_from(row)?)
            })
        })
        .await
    }

    #[tracing::instrument(skip(self, author), fields(author = %author))]
    async fn fork(&self, story_id: i32, author: &str) -> StoryreelResult<Story> {
        let author = author.to_string();
        self.run(move |conn| {
            conn.transaction::<Story, StoryreelError, _>(|conn| {
                let original = lock_root_row(conn, story_id)?;

                if original.author == author {
                    return Err(StoryError::new(StoryErrorKind::SelfFork).into());
                }

                let existing: Option<i32> = stories::table
                    .select(stories::id)
                    .filter(stories::forked_from.eq(story_id))
                    .filter(stories::author.eq(&author))
                    .filter(stories::parent_id.is_null())
                    .first(conn)
                    .optional()?;

                if existing.is_some() {
                    return Err(StoryError::new(StoryErrorKind::AlreadyForked).into());
                }

                let inserted = diesel::insert_into(stories::table)
                    .values(NewStoryRow {
                        title: original.title.clone(),
                        author: author.clone(),
                        content: original.content.clone(),
                        parent_id: None,
                        forked_from: Some(story_id),
                        max_contributors: 5,
                        is_original: true,
                        video_status: VideoStatus::None.as_str().to_string(),
                    })
                    .get_result::<StoryRow>(conn);

                // The partial unique index backs up the check above against
                // a concurrent fork racing past it.
                let row = match inserted {
                    Err(DieselError::DatabaseError(
                        DieselDatabaseErrorKind::UniqueViolation,
                        _,
                    )) => {
                        return Err(StoryError::new(StoryErrorKind::AlreadyForked).into());
                    }
                    other => other?,
                };

                tracing::info!(id = row.id, origin = story_id, "Story forked");
                Ok(Story::try_from(row)?)
            })
        })
        .await
    }

    async fn get(&self, id: i32) -> StoryreelResult<Story> {
        self.run(move |conn| {
            let row: Option<StoryRow> = stories::table
                .find(id)
                .first(conn)
                .optional()
                .map_err(DatabaseError::from)?;

            let row = row.ok_or_else(|| StoryError::new(StoryErrorKind::StoryNotFound(id)))?;
            Ok(Story::try_from(row)?)
        })
        .await
    }

    async fn list(
        &self,
        filter: &StoryFilter,
        sort: StorySort,
        limit: i64,
    ) -> StoryreelResult<Vec<Story>> {
        let filter = filter.clone();
        self.run(move |conn| {
            let mut query = stories::table
                .filter(stories::parent_id.is_null())
                .into_boxed();

            query = match &filter {
                StoryFilter::All => query.filter(stories::forked_from.is_null()),
                StoryFilter::Mine(author) => query.filter(stories::author.eq(author.clone())),
                StoryFilter::WithVideo => query.filter(
                    stories::video_status.eq(VideoStatus::Completed.as_str().to_string()),
                ),
            };

            query = match sort {
                StorySort::CreatedAt => query.order(stories::created_at.desc()),
                StorySort::ForkCount => query.order(stories::fork_count.desc()),
            };

            let rows: Vec<StoryRow> = query.limit(limit).load(conn).map_err(DatabaseError::from)?;
            rows.into_iter()
                .map(|row| Story::try_from(row).map_err(StoryreelError::from))
                .collect()
        })
        .await
    }

    async fn contributions(&self, root_id: i32) -> StoryreelResult<Vec<Story>> {
        self.run(move |conn| {
            let rows: Vec<StoryRow> = stories::table
                .filter(stories::parent_id.eq(root_id))
                .order((stories::created_at.asc(), stories::id.asc()))
                .load(conn)
                .map_err(DatabaseError::from)?;

            rows.into_iter()
                .map(|row| Story::try_from(row).map_err(StoryreelError::from))
                .collect()
        })
        .await
    }

    #[tracing::instrument(skip(self, author), fields(story_id = id, author = %author))]
    async fn claim_video_generation(&self, id: i32, author: &str) -> StoryreelResult<Story> {
        let author = author.to_string();
        self.run(move |conn| {
            conn.transaction::<Story, StoryreelError, _>(|conn| {
                let row = lock_root_row_for_claim(conn, id)?;

                if row.author != author {
                    return Err(StoryError::new(StoryErrorKind::NotTheAuthor).into());
                }

                claim_row(conn, row)
            })
        })
        .await
    }

    #[tracing::instrument(skip(self), fields(story_id = id))]
    async fn claim_video_regeneration(&self, id: i32) -> StoryreelResult<Story> {
        self.run(move |conn| {
            conn.transaction::<Story, StoryreelError, _>(|conn| {
                let row = lock_root_row_for_claim(conn, id)?;
                claim_row(conn, row)
            })
        })
        .await
    }

    async fn complete_video(&self, id: i32, url: &str) -> StoryreelResult<()> {
        let url = url.to_string();
        self.run(move |conn| {
            diesel::update(stories::table.find(id))
                .set((
                    stories::video_status.eq(VideoStatus::Completed.as_str()),
                    stories::video_url.eq(url),
                ))
                .execute(conn)
                .map_err(DatabaseError::from)?;
            Ok(())
        })
        .await
    }

    async fn fail_video(&self, id: i32, url: &str) -> StoryreelResult<()> {
        let url = url.to_string();
        self.run(move |conn| {
            diesel::update(stories::table.find(id))
                .set((
                    stories::video_status.eq(VideoStatus::Failed.as_str()),
                    stories::video_url.eq(url),
                ))
                .execute(conn)
                .map_err(DatabaseError::from)?;
            Ok(())
        })
        .await
    }
}

/// Load the story row for a video claim, distinguishing missing rows from
/// contribution rows.
fn lock_root_row_for_claim(conn: &mut PgConnection, id: i32) -> StoryreelResult<StoryRow> {
    let row: Option<StoryRow> = stories::table
        .find(id)
        .for_update()
        .first(conn)
        .optional()
        .map_err(DatabaseError::from)?;

    let row = row.ok_or_else(|| StoryError::new(StoryErrorKind::StoryNotFound(id)))?;

    if row.parent_id.is_some() {
        return Err(StoryError::new(StoryErrorKind::NotAnOriginal).into());
    }

    Ok(row)
}

/// Flip a locked row to `generating`, rejecting in-flight duplicates.
fn claim_row(conn: &mut PgConnection, row: StoryRow) -> StoryreelResult<Story> {
    if row.video_status == VideoStatus::Generating.as_str() {
        return Err(StoryError::new(StoryErrorKind::AlreadyGenerating).into());
    }

    let updated: StoryRow = diesel::update(stories::table.find(row.id))
        .set(stories::video_status.eq(VideoStatus::Generating.as_str()))
        .get_result(conn)
        .map_err(DatabaseError::from)?;

    tracing::info!(id = updated.id, "Video generation claimed");
    Ok(Story::try_from(updated)?)
}
