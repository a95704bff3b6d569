use crate::cli::api_client::ApiClient;
use crate::cli::commands::board::*;
use crate::cli::error::CliError;
use crate::cli::models::{BoardInput, CardInput, ListInput};
use crate::cli::test_server::spawn_test_server;

async fn board_id_for(client: &ApiClient, title: &str) -> String {
    client
        .list_boards()
        .await
        .unwrap()
        .into_iter()
        .find(|b| b.title == title)
        .map(|b| b.id)
        .expect("board exists")
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_boards_empty() {
    let (client, _server) = spawn_test_server().await;

    let output = list_boards(&client, "table").await.unwrap();

    assert_eq!(output, "No boards found.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_then_list_boards() {
    let (client, _server) = spawn_test_server().await;

    let created = create_board(&client, "Roadmap", Some("2025 plan")).await.unwrap();
    assert!(created.starts_with("✓ Created board: Roadmap"));

    let table = list_boards(&client, "table").await.unwrap();
    assert!(table.contains("Roadmap"));
    assert!(table.contains("2025 plan"));

    let json = list_boards(&client, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["title"], "Roadmap");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_board_renders_lists_in_order() {
    let (client, _server) = spawn_test_server().await;
    create_board(&client, "Show", None).await.unwrap();
    let board_id = board_id_for(&client, "Show").await;

    let later = client
        .create_list(
            &board_id,
            &ListInput {
                title: Some("Later".to_string()),
                position: Some(5),
            },
        )
        .await
        .unwrap();
    let now = client
        .create_list(
            &board_id,
            &ListInput {
                title: Some("Now".to_string()),
                position: Some(1),
            },
        )
        .await
        .unwrap();
    client
        .create_card(
            &now.id,
            &CardInput {
                title: Some("Urgent thing".to_string()),
                labels: Some(vec!["p0".to_string()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let output = show_board(&client, &board_id, "table").await.unwrap();

    let now_at = output.find(&now.id).unwrap();
    let later_at = output.find(&later.id).unwrap();
    assert!(now_at < later_at);
    assert!(output.contains("Urgent thing"));
    assert!(output.contains("p0"));

    let json = show_board(&client, &board_id, "json").await.unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["lists"][0]["list"]["title"], "Now");
    assert_eq!(parsed["lists"][0]["cards"][0]["title"], "Urgent thing");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_missing_board_is_api_error() {
    let (client, _server) = spawn_test_server().await;

    let err = show_board(&client, "000000000000000000000000", "table")
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::ApiError { status: 404, .. }));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_board() {
    let (client, _server) = spawn_test_server().await;
    let board = client
        .create_board(&BoardInput {
            title: Some("Old".to_string()),
            description: Some("kept".to_string()),
        })
        .await
        .unwrap();

    let output = update_board(&client, &board.id, Some("New"), None)
        .await
        .unwrap();

    assert!(output.contains("New"));
    let fetched = client.get_board(&board.id).await.unwrap();
    assert_eq!(fetched.title, "New");
    assert_eq!(fetched.description.as_deref(), Some("kept"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_board_requires_force() {
    let (client, _server) = spawn_test_server().await;
    create_board(&client, "Keep", None).await.unwrap();
    let board_id = board_id_for(&client, "Keep").await;

    let err = delete_board(&client, &board_id, false).await.unwrap_err();
    assert!(matches!(err, CliError::InvalidInput { .. }));
    assert!(client.get_board(&board_id).await.is_ok());

    delete_board(&client, &board_id, true).await.unwrap();
    assert!(client.get_board(&board_id).await.is_err());
}
