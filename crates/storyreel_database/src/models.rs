//! Diesel row types for the `stories` table.

use crate::schema::stories;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use std::str::FromStr;
use storyreel_core::{Story, VideoStatus};
use storyreel_error::{DatabaseError, DatabaseErrorKind};

/// A row loaded from the `stories` table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = stories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StoryRow {
    /// Primary key
    pub id: i32,
    /// Story title
    pub title: String,
    /// Author nickname
    pub author: String,
    /// Free-text body
    pub content: String,
    /// Parent root story for contributions
    pub parent_id: Option<i32>,
    /// Origin root story for forked copies
    pub forked_from: Option<i32>,
    /// Contributor cap
    pub max_contributors: i32,
    /// Contributions accepted so far
    pub fork_count: i32,
    /// True iff `parent_id` is null
    pub is_original: bool,
    /// Video lifecycle state, lowercase
    pub video_status: String,
    /// Artifact url once terminal
    pub video_url: Option<String>,
    /// Insertion timestamp
    pub created_at: NaiveDateTime,
}

/// An insertable `stories` row. `fork_count` and `created_at` take their
/// database defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = stories)]
pub struct NewStoryRow {
    /// Story title
    pub title: String,
    /// Author nickname
    pub author: String,
    /// Free-text body
    pub content: String,
    /// Parent root story for contributions
    pub parent_id: Option<i32>,
    /// Origin root story for forked copies
    pub forked_from: Option<i32>,
    /// Contributor cap
    pub max_contributors: i32,
    /// True iff `parent_id` is null
    pub is_original: bool,
    /// Video lifecycle state, lowercase
    pub video_status: String,
}

impl TryFrom<StoryRow> for Story {
    type Error = DatabaseError;

    fn try_from(row: StoryRow) -> Result<Self, Self::Error> {
        let video_status = VideoStatus::from_str(&row.video_status).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "unknown video_status '{}' on story {}",
                row.video_status, row.id
            )))
        })?;

        Ok(Story {
            id: row.id,
            title: row.title,
            author: row.author,
            content: row.content,
            parent_id: row.parent_id,
            forked_from: row.forked_from,
            max_contributors: row.max_contributors,
            fork_count: row.fork_count,
            is_original: row.is_original,
            video_status,
            video_url: row.video_url,
            created_at: row.created_at,
        })
    }
}
