//! Integration tests for list endpoints.

use axum::http::StatusCode;
use serde_json::{Value, json};

use super::test_support::{create_board, create_card, create_list, send, test_app};

const MISSING_ID: &str = "000000000000000000000000";

fn positions(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|l| l["position"].as_i64().unwrap())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn create_lists_append_in_order() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;

    let (status, a) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "A" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(a["position"], 0);
    assert_eq!(a["boardId"], board_id.as_str());

    let (_, b) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "B" })),
    )
    .await;
    assert_eq!(b["position"], 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_with_explicit_position() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "Pinned", "position": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["position"], 7);

    let (_, next) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "After" })),
    )
    .await;
    assert_eq!(next["position"], 8);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_on_missing_board_returns_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", MISSING_ID),
        Some(json!({ "title": "Orphan" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("Board with ID {} not found", MISSING_ID));
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_rejects_negative_position() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "Bad", "position": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_rejects_fractional_position() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "Bad", "position": 1.5 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_lists_sorted_by_position() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;
    for (title, position) in [("C", 5), ("A", 1), ("B", 3)] {
        send(
            &app,
            "POST",
            &format!("/boards/{}/lists", board_id),
            Some(json!({ "title": title, "position": position })),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", &format!("/boards/{}/lists", board_id), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(positions(&body), vec![1, 3, 5]);
    assert_eq!(body[0]["title"], "A");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_lists_of_unknown_board_is_empty() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", &format!("/boards/{}/lists", MISSING_ID), None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_list_position_preserves_title() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;
    let list_id = create_list(&app, &board_id, "Keep").await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/lists/{}", list_id),
        Some(json!({ "position": 4 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Keep");
    assert_eq!(body["position"], 4);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_list_with_null_title_keeps_title() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;
    let list_id = create_list(&app, &board_id, "Keep").await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/lists/{}", list_id),
        Some(json!({ "title": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Keep");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_list_returns_not_found() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/lists/{}", MISSING_ID),
        Some(json!({ "title": "Nope" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("List with ID {} not found", MISSING_ID));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_list_removes_its_cards() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;
    let list_id = create_list(&app, &board_id, "Doomed").await;
    let card_id = create_card(&app, &list_id, "Card").await;

    let (status, _) = send(&app, "DELETE", &format!("/lists/{}", list_id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, cards) = send(&app, "GET", &format!("/lists/{}/cards", list_id), None).await;
    assert!(cards.as_array().unwrap().is_empty());

    let (status, _) = send(&app, "DELETE", &format!("/cards/{}", card_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &format!("/boards/{}", board_id), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_list_returns_not_found() {
    let app = test_app().await;

    let (status, _) = send(&app, "DELETE", &format!("/lists/{}", MISSING_ID), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_list_after_max_position_is_rejected() {
    let app = test_app().await;
    let board_id = create_board(&app, "Board").await;

    let (status, far) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "Far", "position": i64::MAX })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(far["position"], i64::MAX);

    let (status, body) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "Next" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // An explicit position still works, and nothing negative was stored
    let (status, _) = send(
        &app,
        "POST",
        &format!("/boards/{}/lists", board_id),
        Some(json!({ "title": "Placed", "position": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, lists) = send(&app, "GET", &format!("/boards/{}/lists", board_id), None).await;
    assert_eq!(positions(&lists), vec![2, i64::MAX]);
}
