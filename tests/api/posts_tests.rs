//! Post API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::{assert_status, json_body, signed_token, TestApp, TEST_SECRET};

#[tokio::test]
async fn test_create_post_returns_created_post() {
    let app = TestApp::new();

    let response = app.create_post("user_1", "🎉🔥").await;

    assert_status(&response, StatusCode::CREATED);
    let json = json_body(response).await;
    assert_eq!(json["authorId"], "user_1");
    assert_eq!(json["content"], "🎉🔥");
    assert!(json["id"].as_str().unwrap().parse::<i64>().is_ok());
    assert!(json["createdAt"].is_string());
    assert_eq!(app.posts.len(), 1);
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/posts", r#"{"content":"🎉"}"#)
        .await;

    assert_status(&response, StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["code"], 10003);
    assert!(app.posts.is_empty());
}

#[tokio::test]
async fn test_create_post_rejects_bad_tokens() {
    let app = TestApp::new();
    let body = r#"{"content":"🎉"}"#;

    let forged = signed_token("user_1", 3600, "some-other-secret-some-other-secret");
    let expired = signed_token("user_1", -3600, TEST_SECRET);

    for token in [forged.as_str(), expired.as_str(), "not-a-jwt"] {
        let response = app.post_json_auth("/api/v1/posts", body, token).await;
        assert_status(&response, StatusCode::UNAUTHORIZED);
    }
    assert!(app.posts.is_empty());
}

#[tokio::test]
async fn test_create_post_rejects_non_emoji() {
    let app = TestApp::new();

    let response = app.create_post("user_1", "hello 👋").await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["code"], 10007);
    assert_eq!(json["errors"][0]["field"], "content");
    assert_eq!(json["errors"][0]["message"], "Only emojis are allowed");
    assert!(app.posts.is_empty());
}

#[tokio::test]
async fn test_create_post_rejects_empty_and_oversized() {
    let app = TestApp::new();

    let empty = app.create_post("user_1", "").await;
    assert_status(&empty, StatusCode::BAD_REQUEST);

    // 141 astral emoji are 282 UTF-16 units.
    let oversized = app.create_post("user_1", &"😀".repeat(141)).await;
    assert_status(&oversized, StatusCode::BAD_REQUEST);

    let at_limit = app.create_post("user_1", &"😀".repeat(140)).await;
    assert_status(&at_limit, StatusCode::CREATED);

    assert_eq!(app.posts.len(), 1);
}

#[tokio::test]
async fn test_fourth_post_in_a_minute_is_rate_limited() {
    let app = TestApp::new();

    for emoji in ["😀", "😂", "🎉"] {
        let response = app.create_post("user_1", emoji).await;
        assert_status(&response, StatusCode::CREATED);
    }

    let response = app.create_post("user_1", "🙂").await;
    assert_status(&response, StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key("retry-after"));
    assert_eq!(json_body(response).await["code"], 10006);
    assert_eq!(app.posts.len(), 3);

    // Limits are per user
    let other = app.create_post("user_2", "🙂").await;
    assert_status(&other, StatusCode::CREATED);

    let feed = json_body(app.get("/api/v1/users/user_1/posts").await).await;
    let contents: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["post"]["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, vec!["🎉", "😂", "😀"]);
}

#[tokio::test]
async fn test_global_feed_is_enriched_and_newest_first() {
    let app = TestApp::new();
    app.create_post("user_1", "🌅").await;
    app.create_post("user_2", "🌙").await;

    let response = app.get("/api/v1/posts").await;

    assert_status(&response, StatusCode::OK);
    let feed = json_body(response).await;
    let items = feed.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["post"]["content"], "🌙");
    assert_eq!(items[0]["author"]["username"], "bob");
    assert_eq!(items[1]["author"]["username"], "alice");
    assert_eq!(app.directory.batch_calls(), 1);
}

#[tokio::test]
async fn test_empty_feed() {
    let app = TestApp::new();

    let response = app.get("/api/v1/posts").await;

    assert_status(&response, StatusCode::OK);
    assert_eq!(json_body(response).await, Value::Array(vec![]));
    assert_eq!(app.directory.batch_calls(), 0);
}

#[tokio::test]
async fn test_get_post_by_id() {
    let app = TestApp::new();
    let created = json_body(app.create_post("user_2", "🍕").await).await;
    let id = created["id"].as_str().unwrap();

    let response = app.get(&format!("/api/v1/posts/{id}")).await;

    assert_status(&response, StatusCode::OK);
    let json = json_body(response).await;
    assert_eq!(json["post"], created);
    assert_eq!(json["author"]["id"], "user_2");
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let app = TestApp::new();

    assert_status(&app.get("/api/v1/posts/12345").await, StatusCode::NOT_FOUND);
    assert_status(&app.get("/api/v1/posts/abc").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_by_unknown_author_fails_the_feed() {
    let app = TestApp::new();

    let response = app.create_post("user_9", "👻").await;
    assert_status(&response, StatusCode::CREATED);

    let response = app.get("/api/v1/posts").await;

    assert_status(&response, StatusCode::INTERNAL_SERVER_ERROR);
    let json = json_body(response).await;
    assert_eq!(json["code"], 10000);
    assert_eq!(json["message"], "Internal server error");
}

#[tokio::test]
async fn test_user_feed_only_has_that_user() {
    let app = TestApp::new();
    app.create_post("user_1", "🐱").await;
    app.create_post("user_2", "🐶").await;

    let feed = json_body(app.get("/api/v1/users/user_2/posts").await).await;

    let items = feed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["post"]["authorId"], "user_2");
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = TestApp::new();
    let token = crate::common::token_for("user_1");

    let response = app
        .post_json_auth("/api/v1/posts", r#"{"text":"🎉"}"#, &token)
        .await;

    assert_status(&response, StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["code"], 10002);
    assert!(app.posts.is_empty());
}
