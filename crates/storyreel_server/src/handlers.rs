//! Request handlers.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use storyreel_core::{NewStory, Story, VideoStatus};
use storyreel_interface::{StoryFilter, StorySort};
use storyreel_pipeline::{aggregate, polish_text};

const DEFAULT_LIST_LIMIT: i64 = 50;

/// Service banner.
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Storyreel API is running!",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Body for story creation.
#[derive(Debug, Deserialize)]
pub struct CreateStoryRequest {
    /// Story title
    pub title: String,
    /// Author nickname
    pub author: String,
    /// Free-text body
    pub content: String,
    /// Set when continuing an existing root story
    #[serde(default)]
    pub parent_id: Option<i32>,
    /// Contributor cap, 1-5
    #[serde(default = "default_max_contributors")]
    pub max_contributors: i32,
}

fn default_max_contributors() -> i32 {
    5
}

/// `POST /api/stories`
pub async fn create_story(
    State(state): State<AppState>,
    Json(body): Json<CreateStoryRequest>,
) -> Result<Json<Story>, ApiError> {
    let story = state
        .repo
        .create(NewStory {
            title: body.title,
            author: body.author,
            content: body.content,
            parent_id: body.parent_id,
            max_contributors: body.max_contributors,
        })
        .await?;
    Ok(Json(story))
}

/// Query parameters for story listing.
#[derive(Debug, Deserialize, Default)]
pub struct ListStoriesParams {
    /// "all", "my", or "with_video"
    #[serde(default)]
    pub filter_by: Option<String>,
    /// Author nickname, required for "my"
    #[serde(default)]
    pub author: Option<String>,
    /// "created_at" or "fork_count"
    #[serde(default)]
    pub sort_by: Option<String>,
    /// Maximum rows returned
    #[serde(default)]
    pub limit: Option<i64>,
}

/// `GET /api/stories`
pub async fn list_stories(
    State(state): State<AppState>,
    Query(params): Query<ListStoriesParams>,
) -> Result<Json<Vec<Story>>, ApiError> {
    let filter = match (params.filter_by.as_deref(), params.author) {
        (Some("my"), Some(author)) => StoryFilter::Mine(author),
        (Some("with_video"), _) => StoryFilter::WithVideo,
        _ => StoryFilter::All,
    };

    // Unknown sort keys fall back to newest-first rather than erroring.
    let sort = params
        .sort_by
        .as_deref()
        .and_then(|s| StorySort::from_str(s).ok())
        .unwrap_or_default();

    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let stories = state.repo.list(&filter, sort, limit).await?;
    Ok(Json(stories))
}

/// `GET /api/stories/{id}`
pub async fn get_story(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Story>, ApiError> {
    Ok(Json(state.repo.get(id).await?))
}

/// Response for the can-fork check.
#[derive(Debug, Serialize)]
pub struct CanForkResponse {
    /// Whether contributor slots remain
    pub can_fork: bool,
    /// The contributor cap
    pub max_contributors: i32,
    /// Contributions accepted so far
    pub current_forks: i32,
    /// Remaining contributor slots
    pub remaining: i32,
    /// Story title
    pub title: String,
    /// Story author
    pub author: String,
}

/// `GET /api/stories/{id}/can-fork`
pub async fn can_fork(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CanForkResponse>, ApiError> {
    let story = state.repo.get(id).await?;
    Ok(Json(CanForkResponse {
        can_fork: story.fork_count < story.max_contributors,
        max_contributors: story.max_contributors,
        current_forks: story.fork_count,
        remaining: story.max_contributors - story.fork_count,
        title: story.title,
        author: story.author,
    }))
}

/// Response for the aggregated thread view.
#[derive(Debug, Serialize)]
pub struct FullContentResponse {
    /// Root story id
    pub story_id: i32,
    /// Root title
    pub title: String,
    /// Root author
    pub original_author: String,
    /// Root content alone
    pub original_content: String,
    /// Ordered contributions
    pub contributions: Vec<Story>,
    /// Root plus contributions, blank-line separated
    pub full_content: String,
    /// Number of contributions
    pub contribution_count: usize,
    /// The contributor cap
    pub max_contributors: i32,
    /// Video url, if terminal
    pub video_url: Option<String>,
    /// Video lifecycle state
    pub video_status: VideoStatus,
}

/// `GET /api/stories/{id}/full-content`
pub async fn full_content(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<FullContentResponse>, ApiError> {
    let thread = aggregate(state.repo.as_ref(), id).await?;
    Ok(Json(FullContentResponse {
        story_id: thread.story.id,
        title: thread.story.title.clone(),
        original_author: thread.story.author.clone(),
        original_content: thread.story.content.clone(),
        contribution_count: thread.contributions.len(),
        max_contributors: thread.story.max_contributors,
        video_url: thread.story.video_url.clone(),
        video_status: thread.story.video_status,
        contributions: thread.contributions,
        full_content: thread.full_content,
    }))
}

/// Body for forking a story.
#[derive(Debug, Deserialize)]
pub struct ForkRequest {
    /// The forking user's nickname
    pub author: String,
}

/// `POST /api/stories/{id}/fork`
pub async fn fork_story(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ForkRequest>,
) -> Result<Json<Story>, ApiError> {
    Ok(Json(state.repo.fork(id, &body.author).await?))
}

/// Provenance of a forked story.
#[derive(Debug, Serialize)]
pub struct OriginResponse {
    /// The queried story id
    pub story_id: i32,
    /// Whether this story was created by forking
    pub is_forked: bool,
    /// Origin story summary, when available
    pub origin: Option<OriginSummary>,
}

/// Summary of the story a fork was copied from.
#[derive(Debug, Serialize)]
pub struct OriginSummary {
    /// Origin story id
    pub id: i32,
    /// Origin title
    pub title: String,
    /// Origin author
    pub author: String,
}

/// `GET /api/stories/{id}/origin`
pub async fn origin(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<OriginResponse>, ApiError> {
    let story = state.repo.get(id).await?;

    let origin = match story.forked_from {
        Some(origin_id) => state.repo.get(origin_id).await.ok().map(|o| OriginSummary {
            id: o.id,
            title: o.title,
            author: o.author,
        }),
        None => None,
    };

    Ok(Json(OriginResponse {
        story_id: id,
        is_forked: story.forked_from.is_some(),
        origin,
    }))
}

/// Body for text polishing.
#[derive(Debug, Deserialize)]
pub struct PolishRequest {
    /// The text to polish
    pub content: String,
}

/// Response carrying the polished text.
#[derive(Debug, Serialize)]
pub struct PolishResponse {
    /// Polished text, or the original if no backend is configured
    pub polished_content: String,
}

/// `POST /api/polish`
pub async fn polish(
    State(state): State<AppState>,
    Json(body): Json<PolishRequest>,
) -> Json<PolishResponse> {
    let polished_content = match &state.text {
        Some(driver) => polish_text(driver.as_ref(), &body.content).await,
        None => {
            tracing::debug!("No text backend configured, returning content unchanged");
            body.content
        }
    };
    Json(PolishResponse { polished_content })
}

/// Body for triggering video generation.
#[derive(Debug, Deserialize)]
pub struct GenerateVideoRequest {
    /// The requesting user; must be the story's author
    pub author: String,
}

/// Acknowledgment returned once a generation job is claimed.
#[derive(Debug, Serialize)]
pub struct GenerateVideoResponse {
    /// Human-readable acknowledgment
    pub message: String,
    /// The claimed story
    pub story_id: i32,
    /// Always "generating" at this point
    pub status: VideoStatus,
    /// Contributions included in the generated video
    pub total_contributions: usize,
}

/// `POST /api/stories/{id}/generate-video`
///
/// Validates preconditions and flips the row to `generating` synchronously,
/// then hands the rest of the pipeline to a background task and returns.
pub async fn generate_video(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<GenerateVideoRequest>,
) -> Result<Json<GenerateVideoResponse>, ApiError> {
    let story = state.repo.claim_video_generation(id, &body.author).await?;

    // Once the claim has flipped the row to `generating`, the task must be
    // spawned; nothing below is allowed to fail the request.
    let pipeline = state.pipeline.clone();
    tokio::spawn(async move {
        pipeline.generate(id).await;
    });

    let total_contributions = contribution_count(&state, id).await;

    tracing::info!(
        story_id = id,
        author = %body.author,
        contributions = total_contributions,
        "Video generation task started"
    );

    Ok(Json(GenerateVideoResponse {
        message: format!(
            "Video generation started for \"{}\" ({} contributions included)",
            story.title, total_contributions
        ),
        story_id: id,
        status: VideoStatus::Generating,
        total_contributions,
    }))
}

/// Informational contribution count for acknowledgments.
async fn contribution_count(state: &AppState, id: i32) -> usize {
    state
        .repo
        .contributions(id)
        .await
        .map(|c| c.len())
        .unwrap_or(0)
}

/// `POST /api/stories/{id}/regenerate`
pub async fn regenerate_video(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<GenerateVideoResponse>, ApiError> {
    let story = state.repo.claim_video_regeneration(id).await?;

    let pipeline = state.pipeline.clone();
    tokio::spawn(async move {
        pipeline.generate(id).await;
    });

    let total_contributions = contribution_count(&state, id).await;

    tracing::info!(story_id = id, "Video regeneration task started");

    Ok(Json(GenerateVideoResponse {
        message: format!("Regenerating video for \"{}\"", story.title),
        story_id: id,
        status: VideoStatus::Generating,
        total_contributions,
    }))
}
