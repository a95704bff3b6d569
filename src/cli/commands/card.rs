use tabled::{Table, Tabled};

use crate::cli::api_client::ApiClient;
use crate::cli::board_view::{BoardView, DragOutcome};
use crate::cli::error::CliResult;
use crate::cli::models::{Card, CardInput, MoveInput};
use crate::cli::utils::{
    apply_table_style, format_labels, parse_labels, require_force, truncate_with_ellipsis,
};

#[derive(Tabled)]
pub(crate) struct CardDisplay {
    #[tabled(rename = "#")]
    pub(crate) position: i64,
    #[tabled(rename = "ID")]
    pub(crate) id: String,
    #[tabled(rename = "Title")]
    pub(crate) title: String,
    #[tabled(rename = "Due")]
    pub(crate) due_date: String,
    #[tabled(rename = "Labels")]
    pub(crate) labels: String,
}

impl From<&Card> for CardDisplay {
    fn from(card: &Card) -> Self {
        Self {
            position: card.position,
            id: card.id.clone(),
            title: truncate_with_ellipsis(&card.title, 50),
            due_date: card.due_date.clone().unwrap_or_else(|| "-".to_string()),
            labels: format_labels(&card.labels),
        }
    }
}

/// List the cards of a list in position order
pub async fn list_cards(api_client: &ApiClient, list_id: &str, format: &str) -> CliResult<String> {
    let cards = api_client.list_cards(list_id).await?;

    match format {
        "json" => Ok(serde_json::to_string_pretty(&cards)?),
        _ => Ok(format_table(&cards)),
    }
}

pub(crate) fn format_table(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "No cards found.".to_string();
    }

    let display: Vec<CardDisplay> = cards.iter().map(|c| c.into()).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    table.to_string()
}

/// Card fields accepted by create and update
#[derive(Debug, Default)]
pub struct CardParams<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub due_date: Option<&'a str>,
    pub labels: Option<&'a str>,
    pub position: Option<i64>,
}

impl CardParams<'_> {
    fn into_input(self) -> CardInput {
        CardInput {
            title: self.title.map(|s| s.to_string()),
            description: self.description.map(|s| s.to_string()),
            due_date: self.due_date.map(|s| s.to_string()),
            labels: parse_labels(self.labels),
            position: self.position,
        }
    }
}

/// Create a card in a list
pub async fn create_card(
    api_client: &ApiClient,
    list_id: &str,
    params: CardParams<'_>,
) -> CliResult<String> {
    let card = api_client.create_card(list_id, &params.into_input()).await?;
    Ok(format!(
        "✓ Created card: {} ({}) at position {}",
        card.title, card.id, card.position
    ))
}

/// Update a card
pub async fn update_card(
    api_client: &ApiClient,
    id: &str,
    params: CardParams<'_>,
) -> CliResult<String> {
    let card = api_client.update_card(id, &params.into_input()).await?;
    Ok(format!("✓ Updated card: {} ({})", card.title, card.id))
}

/// Move a card to another list
pub async fn move_card(
    api_client: &ApiClient,
    id: &str,
    list_id: &str,
    board_id: &str,
    position: Option<i64>,
) -> CliResult<String> {
    let input = MoveInput {
        list_id: list_id.to_string(),
        board_id: board_id.to_string(),
        position,
    };

    let card = api_client.move_card(id, &input).await?;
    Ok(format!(
        "✓ Moved card: {} ({}) to list {} at position {}",
        card.title, card.id, card.list_id, card.position
    ))
}

/// Delete a card (requires --force flag)
pub async fn delete_card(api_client: &ApiClient, id: &str, force: bool) -> CliResult<String> {
    require_force(force)?;

    api_client.delete_card(id).await?;
    Ok(format!("✓ Deleted card: {}", id))
}

/// Drag a card by index, within one list or across lists of a board
pub async fn drag_card(
    api_client: &ApiClient,
    board_id: &str,
    source_list: &str,
    from: usize,
    dest_list: &str,
    to: usize,
) -> CliResult<String> {
    let mut view = BoardView::load(api_client, board_id).await?;

    match view
        .drag_card(api_client, source_list, from, dest_list, to)
        .await?
    {
        DragOutcome::Ignored => Ok("Nothing to do.".to_string()),
        DragOutcome::Saved => {
            let order: Vec<&str> = view
                .cards_of(dest_list)
                .iter()
                .map(|c| c.title.as_str())
                .collect();
            Ok(format!("✓ Card dropped: {}", order.join(" | ")))
        }
    }
}
