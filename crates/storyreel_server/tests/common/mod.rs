//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use storyreel_core::{VideoJobHandle, VideoResult};
use storyreel_error::StoryreelResult;
use storyreel_interface::{PollTimer, StoryRepository, VideoGenerator};
use storyreel_pipeline::{
    InMemoryStoryRepository, PromptComposer, VideoJobRunner, VideoPipeline,
};
use storyreel_server::{router, AppState};
use storyreel_storage::VideoStore;
use tower::ServiceExt;

/// Video service that completes on the first poll.
pub struct InstantVideoGenerator;

#[async_trait]
impl VideoGenerator for InstantVideoGenerator {
    async fn submit(&self, _prompt: &str) -> StoryreelResult<VideoJobHandle> {
        Ok(VideoJobHandle::pending("op"))
    }

    async fn poll(&self, _handle: &VideoJobHandle) -> StoryreelResult<VideoJobHandle> {
        Ok(VideoJobHandle {
            id: "op".to_string(),
            done: true,
            error: None,
            results: vec![VideoResult {
                uri: "https://example.com/video.mp4".to_string(),
            }],
        })
    }

    async fn download(&self, _result: &VideoResult) -> StoryreelResult<Vec<u8>> {
        Ok(b"mp4".to_vec())
    }

    fn model_name(&self) -> &str {
        "fake-veo"
    }
}

/// No-op timer so background jobs finish without wall-clock delays.
pub struct NoopTimer;

#[async_trait]
impl PollTimer for NoopTimer {
    async fn wait(&self, _interval: Duration) {}
}

/// Build the full app router over an in-memory repository and an instantly
/// completing fake video service. Uses the same route structure as `serve`.
///
/// Returns the repository handle for direct state assertions and the temp
/// dir guard keeping the media root alive.
pub fn build_test_app() -> (Router, Arc<InMemoryStoryRepository>, tempfile::TempDir) {
    let repo = Arc::new(InMemoryStoryRepository::new());
    let temp_dir = tempfile::tempdir().unwrap();
    let store = VideoStore::new(temp_dir.path()).unwrap();

    let runner = VideoJobRunner::new(
        Arc::new(InstantVideoGenerator),
        store.clone(),
        Arc::new(NoopTimer),
    );
    let pipeline = Arc::new(VideoPipeline::new(
        repo.clone() as Arc<dyn StoryRepository>,
        PromptComposer::template_only(),
        runner,
        store.clone(),
    ));

    let state = AppState::new(
        repo.clone() as Arc<dyn StoryRepository>,
        None,
        pipeline,
        store,
    );

    (router(state), repo, temp_dir)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: &Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Create a root story and return its id.
pub async fn create_story(app: &Router, title: &str, author: &str, max_contributors: i32) -> i32 {
    let (status, json) = post_json(
        app,
        "/api/stories",
        &serde_json::json!({
            "title": title,
            "author": author,
            "content": format!("{title} content"),
            "max_contributors": max_contributors,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {json}");
    json["id"].as_i64().unwrap() as i32
}
