mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use common::{build_test_app, create_video, register_creator, register_viewer};

#[tokio::test]
async fn comments_append_and_list_in_insertion_order() {
    let (server, _state) = build_test_app();
    let (creator_token, _) = register_creator(&server, "Taco Cart", "taco@example.com").await;
    let (viewer_token, viewer_id) =
        register_viewer(&server, "Ana", "ana@example.com").await;
    let video_id = create_video(&server, &creator_token, "al pastor").await;
    let other_id = create_video(&server, &creator_token, "carnitas").await;

    for text in ["looks amazing", "recipe please"] {
        let response = server
            .post(&format!("/api/v1/videos/{video_id}/comments"))
            .authorization_bearer(&viewer_token)
            .json(&json!({ "comment": text }))
            .await;
        response.assert_status(StatusCode::CREATED);
    }
    server
        .post(&format!("/api/v1/videos/{other_id}/comments"))
        .authorization_bearer(&viewer_token)
        .json(&json!({ "comment": "unrelated" }))
        .await
        .assert_status(StatusCode::CREATED);

    // The list endpoint returns everything; the caller filters by video.
    let all: Value = server
        .get("/api/v1/comments")
        .authorization_bearer(&viewer_token)
        .await
        .json();
    let comments = all["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 3);

    let on_video: Vec<&str> = comments
        .iter()
        .filter(|c| c["video_id"].as_str().unwrap() == video_id)
        .map(|c| c["comment"].as_str().unwrap())
        .collect();
    assert_eq!(on_video, vec!["looks amazing", "recipe please"]);
    assert_eq!(comments[0]["viewer_id"].as_str().unwrap(), viewer_id);
}

#[tokio::test]
async fn comment_on_unknown_video_is_404_and_appends_nothing() {
    let (server, state) = build_test_app();
    let (viewer_token, _) = register_viewer(&server, "Ana", "ana@example.com").await;

    server
        .post(&format!("/api/v1/videos/{}/comments", Uuid::new_v4()))
        .authorization_bearer(&viewer_token)
        .json(&json!({ "comment": "into the void" }))
        .await
        .assert_status(StatusCode::NOT_FOUND);

    assert!(state.comments.all().is_empty());
}

#[tokio::test]
async fn empty_comment_rejected() {
    let (server, _state) = build_test_app();
    let (creator_token, _) = register_creator(&server, "Taco Cart", "taco@example.com").await;
    let (viewer_token, _) = register_viewer(&server, "Ana", "ana@example.com").await;
    let video_id = create_video(&server, &creator_token, "al pastor").await;

    server
        .post(&format!("/api/v1/videos/{video_id}/comments"))
        .authorization_bearer(&viewer_token)
        .json(&json!({ "comment": "   " }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
