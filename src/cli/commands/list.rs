use crate::cli::api_client::ApiClient;
use crate::cli::board_view::{BoardView, DragOutcome};
use crate::cli::error::CliResult;
use crate::cli::models::ListInput;
use crate::cli::utils::require_force;

/// Create a list on a board; without a position it goes after the last list
pub async fn create_list(
    api_client: &ApiClient,
    board_id: &str,
    title: &str,
    position: Option<i64>,
) -> CliResult<String> {
    let input = ListInput {
        title: Some(title.to_string()),
        position,
    };

    let list = api_client.create_list(board_id, &input).await?;
    Ok(format!(
        "✓ Created list: {} ({}) at position {}",
        list.title, list.id, list.position
    ))
}

/// Update a list's title or position
pub async fn update_list(
    api_client: &ApiClient,
    id: &str,
    title: Option<&str>,
    position: Option<i64>,
) -> CliResult<String> {
    let input = ListInput {
        title: title.map(|s| s.to_string()),
        position,
    };

    let list = api_client.update_list(id, &input).await?;
    Ok(format!(
        "✓ Updated list: {} ({}) at position {}",
        list.title, list.id, list.position
    ))
}

/// Delete a list with all its cards (requires --force flag)
pub async fn delete_list(api_client: &ApiClient, id: &str, force: bool) -> CliResult<String> {
    require_force(force)?;

    api_client.delete_list(id).await?;
    Ok(format!("✓ Deleted list: {}", id))
}

/// Drag the list at index `from` to index `to` on a board
pub async fn drag_list(
    api_client: &ApiClient,
    board_id: &str,
    from: usize,
    to: usize,
) -> CliResult<String> {
    let mut view = BoardView::load(api_client, board_id).await?;

    match view.drag_list(api_client, from, to).await? {
        DragOutcome::Ignored => Ok("Nothing to do.".to_string()),
        DragOutcome::Saved => {
            let order: Vec<&str> = view.lists.iter().map(|l| l.title.as_str()).collect();
            Ok(format!("✓ Lists reordered: {}", order.join(" | ")))
        }
    }
}
