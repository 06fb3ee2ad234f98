//! Profile API Tests

use axum::http::StatusCode;

use crate::common::{assert_status, json_body, TestApp};

#[tokio::test]
async fn test_profile_by_username() {
    let app = TestApp::new();

    let response = app.get("/api/v1/profiles/alice").await;

    assert_status(&response, StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["id"], "user_1");
    assert_eq!(json["username"], "alice");
    assert_eq!(json["profileImageUrl"], "https://img.example/alice.png");
}

#[tokio::test]
async fn test_profile_accepts_at_handle() {
    let app = TestApp::new();

    let response = app.get("/api/v1/profiles/@bob").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(json_body(response).await["id"], "user_2");
}

#[tokio::test]
async fn test_unknown_profile_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/profiles/nobody").await;

    assert_status(&response, StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["code"], 10001);
}
