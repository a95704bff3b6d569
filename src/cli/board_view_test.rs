use crate::cli::api_client::ApiClient;
use crate::cli::board_view::{BoardView, DragOutcome};
use crate::cli::models::{BoardInput, CardInput, ListInput};
use crate::cli::test_server::spawn_test_server;

/// Board with lists "A", "B", "C"; "A" holds cards a0..a2, "B" holds b0.
async fn seeded_view(client: &ApiClient) -> BoardView {
    let board = client
        .create_board(&BoardInput {
            title: Some("Drag board".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

    let mut list_ids = Vec::new();
    for title in ["A", "B", "C"] {
        let list = client
            .create_list(
                &board.id,
                &ListInput {
                    title: Some(title.to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        list_ids.push(list.id);
    }

    for (list_id, titles) in [(&list_ids[0], vec!["a0", "a1", "a2"]), (&list_ids[1], vec!["b0"])] {
        for title in titles {
            client
                .create_card(
                    list_id,
                    &CardInput {
                        title: Some(title.to_string()),
                        ..Default::default()
                    },
                )
                .await
                .unwrap();
        }
    }

    BoardView::load(client, &board.id).await.unwrap()
}

fn list_titles(view: &BoardView) -> Vec<&str> {
    view.lists.iter().map(|l| l.title.as_str()).collect()
}

fn card_titles<'a>(view: &'a BoardView, list_id: &str) -> Vec<&'a str> {
    view.cards_of(list_id)
        .iter()
        .map(|c| c.title.as_str())
        .collect()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_load_orders_lists_and_cards() {
    let (client, _server) = spawn_test_server().await;
    let view = seeded_view(&client).await;

    assert_eq!(list_titles(&view), vec!["A", "B", "C"]);
    assert_eq!(card_titles(&view, &view.lists[0].id), vec!["a0", "a1", "a2"]);
    assert_eq!(card_titles(&view, &view.lists[2].id), Vec::<&str>::new());
}

// =============================================================================
// List drag
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_list_renumbers_locally_and_persists_moved_list() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let dragged = view.lists[2].id.clone();

    let outcome = view.drag_list(&client, 2, 0).await.unwrap();

    assert_eq!(outcome, DragOutcome::Saved);
    assert_eq!(list_titles(&view), vec!["C", "A", "B"]);
    let positions: Vec<i64> = view.lists.iter().map(|l| l.position).collect();
    assert_eq!(positions, vec![0, 1, 2]);

    // Only the dragged list was sent
    let server_lists = client.list_lists(&view.board.id).await.unwrap();
    let server_dragged = server_lists.iter().find(|l| l.id == dragged).unwrap();
    assert_eq!(server_dragged.position, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_list_same_index_is_ignored() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;

    assert_eq!(
        view.drag_list(&client, 1, 1).await.unwrap(),
        DragOutcome::Ignored
    );
    assert_eq!(
        view.drag_list(&client, 0, 3).await.unwrap(),
        DragOutcome::Ignored
    );
    assert_eq!(list_titles(&view), vec!["A", "B", "C"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_list_failure_reverts() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let before = view.lists.clone();

    // Deleted behind the view's back, so the update answers 404
    client.delete_list(&view.lists[0].id).await.unwrap();

    let result = view.drag_list(&client, 0, 2).await;

    assert!(result.is_err());
    assert_eq!(view.lists, before);
}

// =============================================================================
// Card drag within a list
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_card_within_list() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let list_id = view.lists[0].id.clone();

    let outcome = view
        .drag_card(&client, &list_id, 0, &list_id, 2)
        .await
        .unwrap();

    assert_eq!(outcome, DragOutcome::Saved);
    assert_eq!(card_titles(&view, &list_id), vec!["a1", "a2", "a0"]);
    assert_eq!(view.cards_of(&list_id)[2].position, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_card_within_list_failure_keeps_local_order() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let list_id = view.lists[0].id.clone();
    let first = view.cards_of(&list_id)[0].id.clone();

    client.delete_card(&first).await.unwrap();

    let result = view.drag_card(&client, &list_id, 0, &list_id, 1).await;

    assert!(result.is_err());
    assert_eq!(card_titles(&view, &list_id), vec!["a1", "a0", "a2"]);
}

// =============================================================================
// Card drag across lists
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_card_across_lists() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let source = view.lists[0].id.clone();
    let dest = view.lists[1].id.clone();

    let outcome = view.drag_card(&client, &source, 1, &dest, 0).await.unwrap();

    assert_eq!(outcome, DragOutcome::Saved);
    assert_eq!(card_titles(&view, &source), vec!["a0", "a2"]);
    assert_eq!(card_titles(&view, &dest), vec!["a1", "b0"]);

    let server_dest = client.list_cards(&dest).await.unwrap();
    let moved = server_dest.iter().find(|c| c.title == "a1").unwrap();
    assert_eq!(moved.list_id, dest);
    assert_eq!(moved.board_id, view.board.id);
    assert_eq!(moved.position, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_card_to_end_of_empty_list() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let source = view.lists[0].id.clone();
    let empty = view.lists[2].id.clone();

    let outcome = view.drag_card(&client, &source, 2, &empty, 0).await.unwrap();

    assert_eq!(outcome, DragOutcome::Saved);
    assert_eq!(card_titles(&view, &empty), vec!["a2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_card_out_of_range_is_ignored() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let source = view.lists[0].id.clone();
    let dest = view.lists[1].id.clone();

    assert_eq!(
        view.drag_card(&client, &source, 5, &dest, 0).await.unwrap(),
        DragOutcome::Ignored
    );
    assert_eq!(
        view.drag_card(&client, &source, 0, &dest, 2).await.unwrap(),
        DragOutcome::Ignored
    );
    assert_eq!(card_titles(&view, &source), vec!["a0", "a1", "a2"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_card_across_lists_failure_reloads_board() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let source = view.lists[0].id.clone();
    let dest = view.lists[1].id.clone();

    // Destination vanishes server-side; the move answers 404
    client.delete_list(&dest).await.unwrap();

    let result = view.drag_card(&client, &source, 0, &dest, 0).await;

    assert!(result.is_err());
    assert_eq!(list_titles(&view), vec!["A", "C"]);
    assert_eq!(card_titles(&view, &source), vec!["a0", "a1", "a2"]);
    assert!(view.cards_of(&dest).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_drag_card_unknown_list_is_rejected() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let source = view.lists[0].id.clone();

    let result = view
        .drag_card(&client, &source, 0, "000000000000000000000000", 0)
        .await;

    assert!(result.is_err());
    assert_eq!(card_titles(&view, &source), vec!["a0", "a1", "a2"]);
}

// =============================================================================
// Creating from the view
// =============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_add_list_sends_count_plus_one() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;

    let created = view.add_list(&client, "D").await.unwrap().clone();

    assert_eq!(created.position, 4);
    assert_eq!(list_titles(&view), vec!["A", "B", "C", "D"]);
    assert!(view.cards_of(&created.id).is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_card_sends_count_plus_one() {
    let (client, _server) = spawn_test_server().await;
    let mut view = seeded_view(&client).await;
    let list_id = view.lists[1].id.clone();

    let created = view.add_card(&client, &list_id, "b1").await.unwrap().clone();

    assert_eq!(created.position, 2);
    assert_eq!(created.board_id, view.board.id);
    assert_eq!(card_titles(&view, &list_id), vec!["b0", "b1"]);
}
