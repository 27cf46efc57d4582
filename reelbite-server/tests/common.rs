use axum_test::TestServer;
use serde_json::{Value, json};
use url::Url;

use reelbite_server::{AppState, Config, routes::create_api_router};

// Code is used by test modules, but not in this scope
#[allow(unused)]
pub fn build_test_app() -> (TestServer, AppState) {
    let config = Config {
        server_host: "127.0.0.1".into(),
        server_port: 0,
        public_base_url: Url::parse("http://localhost:3000/").unwrap(),
        cors_allowed_origins: vec![],
    };
    let state = AppState::new(config);
    let router = create_api_router(state.clone()).with_state(state.clone());
    let server = TestServer::new(router).expect("failed to build test server");
    (server, state)
}

#[allow(unused)]
pub async fn register_viewer(server: &TestServer, name: &str, email: &str) -> (String, String) {
    let response = server
        .post("/api/v1/auth/viewer/register")
        .json(&json!({
            "full_name": name,
            "email": email,
            "password": "hunter2",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let data = &body["data"];
    (
        data["token"].as_str().unwrap().to_string(),
        data["id"].as_str().unwrap().to_string(),
    )
}

#[allow(unused)]
pub async fn register_creator(server: &TestServer, name: &str, email: &str) -> (String, String) {
    let response = server
        .post("/api/v1/auth/creator/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": "hunter2",
            "address": "12 Noodle Lane",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    let data = &body["data"];
    (
        data["token"].as_str().unwrap().to_string(),
        data["id"].as_str().unwrap().to_string(),
    )
}

#[allow(unused)]
pub async fn create_video(server: &TestServer, creator_token: &str, name: &str) -> String {
    let response = server
        .post("/api/v1/videos")
        .authorization_bearer(creator_token)
        .json(&json!({
            "name": name,
            "description": "fresh from the wok",
            "media": [1, 2, 3, 4],
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["data"]["item"]["id"].as_str().unwrap().to_string()
}
