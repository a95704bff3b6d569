use tabled::builder::Builder;
use tabled::{Table, Tabled};

use crate::cli::api_client::ApiClient;
use crate::cli::board_view::BoardView;
use crate::cli::error::CliResult;
use crate::cli::models::{Board, BoardInput};
use crate::cli::utils::{apply_table_style, format_labels, require_force, truncate_with_ellipsis};

#[derive(Tabled)]
pub(crate) struct BoardDisplay {
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Description")]
    pub(crate) description: String,
    #[tabled(rename = "Updated")]
    pub(crate) updated_at: String,
}

impl From<&Board> for BoardDisplay {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.clone(),
            title: truncate_with_ellipsis(&board.title, 40),
            description: board
                .description
                .as_deref()
                .map(|d| truncate_with_ellipsis(d, 50))
                .unwrap_or_else(|| "-".to_string()),
            updated_at: board.updated_at.clone(),
        }
    }
}

/// List all boards
pub async fn list_boards(api_client: &ApiClient, format: &str) -> CliResult<String> {
    let boards = api_client.list_boards().await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&boards)?),
        _ => Ok(format_table(&boards)),
    }
}

pub(crate) fn format_table(boards: &[Board]) -> String {
    if boards.is_empty() {
        return "No boards found.".to_string();
    }

    let display: Vec<BoardDisplay> = boards.iter().map(|b| b.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// Show a board with its lists and cards in position order
pub async fn show_board(api_client: &ApiClient, id: &str, format: &str) -> CliResult<String> {
    let view = BoardView::load(api_client, id).await?;

    match format {
        "json" => {
            let lists: Vec<serde_json::Value> = view
                .lists
                .iter()
                .map(|list| {
                    serde_json::json!({
                        "list": list,
                        "cards": view.cards_of(&list.id),
                    })
                })
                .collect();
            Ok(serde_json::to_string_pretty(&serde_json::json!({
                "board": view.board,
                "lists": lists,
            }))?)
        }
        _ => Ok(format_board(&view)),
    }
}

pub(crate) fn format_board(view: &BoardView) -> String {
    let mut out = format!("{} ({})\n", view.board.title, view.board.id);
    if let Some(description) = &view.board.description {
        out.push_str(description);
        out.push('\n');
    }

    if view.lists.is_empty() {
        out.push_str("\nNo lists yet.");
        return out;
    }

    for list in &view.lists {
        let mut builder = Builder::default();
        builder.push_record(["#", "ID", "Title", "Due", "Labels"]);
        for card in view.cards_of(&list.id) {
            builder.push_record([
                card.position.to_string(),
                card.id.clone(),
                truncate_with_ellipsis(&card.title, 40),
                card.due_date.clone().unwrap_or_else(|| "-".to_string()),
                format_labels(&card.labels),
            ]);
        }

        out.push_str(&format!(
            "\n[{}] {} ({})\n",
            list.position, list.title, list.id
        ));
        let mut table = builder.build();
        apply_table_style(&mut table);
        out.push_str(&table.to_string());
        out.push('\n');
    }

    out
}

/// Create a new board
pub async fn create_board(
    api_client: &ApiClient,
    title: &str,
    description: Option<&str>,
) -> CliResult<String> {
    let input = BoardInput {
        title: Some(title.to_string()),
        description: description.map(|s| s.to_string()),
    };

    let board = api_client.create_board(&input).await?;
    Ok(format!("✓ Created board: {} ({})", board.title, board.id))
}

/// Update a board
pub async fn update_board(
    api_client: &ApiClient,
    id: &str,
    title: Option<&str>,
    description: Option<&str>,
) -> CliResult<String> {
    let input = BoardInput {
        title: title.map(|s| s.to_string()),
        description: description.map(|s| s.to_string()),
    };

    let board = api_client.update_board(id, &input).await?;
    Ok(format!("✓ Updated board: {} ({})", board.title, board.id))
}

/// Delete a board with all its lists and cards (requires --force flag)
pub async fn delete_board(api_client: &ApiClient, id: &str, force: bool) -> CliResult<String> {
    require_force(force)?;

    api_client.delete_board(id).await?;
    Ok(format!("✓ Deleted board: {}", id))
}
