//! Shared helpers for the HTTP handler tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::{Database, SqliteDatabase};

/// Router backed by a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    routes::create_router(AppState::new(db))
}

/// Send one request and return the status with the parsed JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Send a raw, possibly malformed, JSON body.
pub async fn send_raw(app: &Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

pub fn id_of(value: &Value) -> String {
    value["id"].as_str().expect("id").to_string()
}

pub async fn create_board(app: &Router, title: &str) -> String {
    let (status, body) = send(app, "POST", "/boards", Some(serde_json::json!({ "title": title }))).await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

pub async fn create_list(app: &Router, board_id: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(serde_json::json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}

pub async fn create_card(app: &Router, list_id: &str, title: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        &format!("/lists/{}/cards", list_id),
        Some(serde_json::json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id_of(&body)
}
