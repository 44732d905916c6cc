//! Integration tests for the story CRUD and fork endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn root_returns_banner() {
    let (app, _repo, _media) = common::build_test_app();

    let (status, body) = common::get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("Storyreel"));
}

#[tokio::test]
async fn create_and_fetch_story() {
    let (app, _repo, _media) = common::build_test_app();

    let (status, created) = common::post_json(
        &app,
        "/api/stories",
        &json!({
            "title": "The Lighthouse",
            "author": "ada",
            "content": "The lamp went dark.",
            "max_contributors": 3,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["is_original"], json!(true));
    assert_eq!(created["video_status"], json!("none"));
    assert_eq!(created["fork_count"], json!(0));

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = common::get_json(&app, &format!("/api/stories/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], json!("The Lighthouse"));
}

#[tokio::test]
async fn validation_errors_surface_as_400_with_a_message() {
    let (app, _repo, _media) = common::build_test_app();

    let (status, body) = common::post_json(
        &app,
        "/api/stories",
        &json!({
            "title": "  ",
            "author": "ada",
            "content": "text",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Title"));

    let (status, body) = common::post_json(
        &app,
        "/api/stories",
        &json!({
            "title": "Title",
            "author": "ada",
            "content": "text",
            "max_contributors": 9,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("between 1 and 5"));
}

#[tokio::test]
async fn missing_story_returns_404() {
    let (app, _repo, _media) = common::build_test_app();

    let (status, _body) = common::get_json(&app, "/api/stories/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contribution_cap_is_enforced_through_the_api() {
    let (app, _repo, _media) = common::build_test_app();
    let root_id = common::create_story(&app, "Root", "ada", 2).await;

    for author in ["bob", "cleo"] {
        let (status, _body) = common::post_json(
            &app,
            "/api/stories",
            &json!({
                "title": "Continuation",
                "author": author,
                "content": "more story",
                "parent_id": root_id,
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = common::post_json(
        &app,
        "/api/stories",
        &json!({
            "title": "Continuation",
            "author": "dan",
            "content": "too late",
            "parent_id": root_id,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("contributor limit"));

    let (status, can_fork) =
        common::get_json(&app, &format!("/api/stories/{root_id}/can-fork")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(can_fork["can_fork"], json!(false));
    assert_eq!(can_fork["current_forks"], json!(2));
    assert_eq!(can_fork["remaining"], json!(0));
}

#[tokio::test]
async fn full_content_aggregates_in_order() {
    let (app, _repo, _media) = common::build_test_app();
    let root_id = common::create_story(&app, "Root", "ada", 5).await;

    for (author, content) in [("bob", "second part"), ("cleo", "third part")] {
        common::post_json(
            &app,
            "/api/stories",
            &json!({
                "title": "Continuation",
                "author": author,
                "content": content,
                "parent_id": root_id,
            }),
        )
        .await;
    }

    let (status, body) =
        common::get_json(&app, &format!("/api/stories/{root_id}/full-content")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contribution_count"], json!(2));
    assert_eq!(
        body["full_content"],
        json!("Root content\n\nsecond part\n\nthird part")
    );
}

#[tokio::test]
async fn fork_rules_are_enforced_through_the_api() {
    let (app, _repo, _media) = common::build_test_app();
    let root_id = common::create_story(&app, "Root", "ada", 5).await;

    // Self-fork rejected.
    let (status, body) = common::post_json(
        &app,
        &format!("/api/stories/{root_id}/fork"),
        &json!({"author": "ada"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("your own story"));

    // First fork by another author succeeds.
    let (status, fork) = common::post_json(
        &app,
        &format!("/api/stories/{root_id}/fork"),
        &json!({"author": "bob"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fork["forked_from"], json!(root_id));

    // Duplicate fork rejected.
    let (status, body) = common::post_json(
        &app,
        &format!("/api/stories/{root_id}/fork"),
        &json!({"author": "bob"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already forked"));

    // Provenance is visible on the fork.
    let fork_id = fork["id"].as_i64().unwrap();
    let (status, origin) = common::get_json(&app, &format!("/api/stories/{fork_id}/origin")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(origin["is_forked"], json!(true));
    assert_eq!(origin["origin"]["author"], json!("ada"));
}

#[tokio::test]
async fn listing_excludes_contributions_and_forks_from_all() {
    let (app, _repo, _media) = common::build_test_app();
    let root_id = common::create_story(&app, "Root", "ada", 5).await;
    common::post_json(
        &app,
        "/api/stories",
        &json!({
            "title": "Continuation",
            "author": "bob",
            "content": "more",
            "parent_id": root_id,
        }),
    )
    .await;
    common::post_json(
        &app,
        &format!("/api/stories/{root_id}/fork"),
        &json!({"author": "bob"}),
    )
    .await;

    let (status, all) = common::get_json(&app, "/api/stories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, mine) = common::get_json(&app, "/api/stories?filter_by=my&author=bob").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine.as_array().unwrap().len(), 1, "bob's fork is his story");
}

#[tokio::test]
async fn polish_without_a_backend_returns_content_unchanged() {
    let (app, _repo, _media) = common::build_test_app();

    let (status, body) = common::post_json(
        &app,
        "/api/polish",
        &json!({"content": "a rough draft"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["polished_content"], json!("a rough draft"));
}
