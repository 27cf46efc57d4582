mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use uuid::Uuid;

use common::{build_test_app, create_video, register_creator, register_viewer};

#[tokio::test]
async fn feed_lists_videos_in_upload_order() {
    let (server, _state) = build_test_app();
    let (creator_token, creator_id) =
        register_creator(&server, "Taco Cart", "taco@example.com").await;
    let (viewer_token, _) = register_viewer(&server, "Ana", "ana@example.com").await;

    let first = create_video(&server, &creator_token, "al pastor").await;
    let second = create_video(&server, &creator_token, "carnitas").await;

    let feed: Value = server
        .get("/api/v1/feed")
        .authorization_bearer(&viewer_token)
        .await
        .json();
    let items = feed["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"].as_str().unwrap(), first);
    assert_eq!(items[1]["id"].as_str().unwrap(), second);
    assert_eq!(items[0]["creator_id"].as_str().unwrap(), creator_id);
    assert_eq!(items[0]["like_count"], json!(0));
    assert!(items[0]["liker_ids"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn feed_requires_session() {
    let (server, _state) = build_test_app();
    server.get("/api/v1/feed").await.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn upload_round_trips_media_bytes() {
    let (server, _state) = build_test_app();
    let (creator_token, _) = register_creator(&server, "Taco Cart", "taco@example.com").await;

    let response = server
        .post("/api/v1/videos")
        .authorization_bearer(&creator_token)
        .json(&json!({
            "name": "birria",
            "media": [7, 7, 7],
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    let media_uri = body["data"]["item"]["media_uri"].as_str().unwrap();

    // The minted URI points back at the media passthrough route.
    let key = media_uri.rsplit('/').next().unwrap();
    let media = server.get(&format!("/api/v1/media/{key}")).await;
    media.assert_status_ok();
    assert_eq!(media.as_bytes().as_ref(), &[7u8, 7, 7]);
}

#[tokio::test]
async fn viewer_cannot_upload() {
    let (server, _state) = build_test_app();
    let (viewer_token, _) = register_viewer(&server, "Ana", "ana@example.com").await;

    let response = server
        .post("/api/v1/videos")
        .authorization_bearer(&viewer_token)
        .json(&json!({ "name": "sneaky", "media": [1] }))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn my_videos_only_lists_own_uploads() {
    let (server, _state) = build_test_app();
    let (first_token, _) = register_creator(&server, "Taco Cart", "taco@example.com").await;
    let (second_token, _) = register_creator(&server, "Wok Stories", "wok@example.com").await;

    create_video(&server, &first_token, "al pastor").await;
    let own = create_video(&server, &second_token, "dan dan noodles").await;

    let mine: Value = server
        .get("/api/v1/videos/mine")
        .authorization_bearer(&second_token)
        .await
        .json();
    let items = mine["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"].as_str().unwrap(), own);
}

#[tokio::test]
async fn unknown_creator_profile_is_404() {
    let (server, _state) = build_test_app();
    let (viewer_token, _) = register_viewer(&server, "Ana", "ana@example.com").await;

    server
        .get(&format!("/api/v1/creators/{}", Uuid::new_v4()))
        .authorization_bearer(&viewer_token)
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_registration_email_rejected() {
    let (server, _state) = build_test_app();
    register_viewer(&server, "Ana", "ana@example.com").await;

    let response = server
        .post("/api/v1/auth/viewer/register")
        .json(&json!({
            "full_name": "Imposter",
            "email": "ana@example.com",
            "password": "pw",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let (server, _state) = build_test_app();
    let (viewer_token, _) = register_viewer(&server, "Ana", "ana@example.com").await;

    server
        .post("/api/v1/auth/logout")
        .authorization_bearer(&viewer_token)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get("/api/v1/feed")
        .authorization_bearer(&viewer_token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}
