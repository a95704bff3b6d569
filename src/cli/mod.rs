pub mod api_client;
pub mod board_view;
mod commands;
pub mod error;
pub mod models;
mod utils;

#[cfg(test)]
mod board_view_test;
#[cfg(test)]
mod test_server;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::commands::card::CardParams;

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(author, version, about = "Taskboard command line client", long_about = None)]
pub struct Cli {
    /// Override the API URL (default: TASKBOARD_API_URL env or http://localhost:3000)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Board management commands
    Board {
        #[command(subcommand)]
        command: BoardCommands,
    },
    /// List management commands
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Card management commands
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
}

#[derive(Subcommand)]
enum BoardCommands {
    /// List all boards
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Show a board with its lists and cards
    Show {
        id: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a board
    Create {
        title: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a board
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a board with all its lists and cards
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ListCommands {
    /// Create a list on a board
    Create {
        board_id: String,
        title: String,
        /// Explicit position (default: after the last list)
        #[arg(long)]
        position: Option<i64>,
    },
    /// Update a list
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        position: Option<i64>,
    },
    /// Delete a list with all its cards
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
    /// Drag a list from one index to another
    Drag {
        board_id: String,
        from: usize,
        to: usize,
    },
}

#[derive(Subcommand)]
enum CardCommands {
    /// List the cards of a list
    List {
        list_id: String,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a card in a list
    Create {
        list_id: String,
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// RFC 3339 datetime, e.g. 2025-06-01T09:00:00Z
        #[arg(long)]
        due_date: Option<String>,
        /// Comma-separated labels
        #[arg(long)]
        labels: Option<String>,
        /// Explicit position (default: after the last card)
        #[arg(long)]
        position: Option<i64>,
    },
    /// Update a card
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due_date: Option<String>,
        /// Comma-separated labels (replaces the current set)
        #[arg(long)]
        labels: Option<String>,
        #[arg(long)]
        position: Option<i64>,
    },
    /// Move a card to another list
    Move {
        id: String,
        list_id: String,
        board_id: String,
        /// Explicit position (default: after the target list's last card)
        #[arg(long)]
        position: Option<i64>,
    },
    /// Delete a card
    Delete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        force: bool,
    },
    /// Drag a card by index, within a list or across lists
    Drag {
        board_id: String,
        source_list: String,
        from: usize,
        dest_list: String,
        to: usize,
    },
}

/// Warnings from failed optimistic updates go to stderr; `RUST_LOG`
/// overrides the level.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .try_init()
        .is_ok()
}

pub async fn run() -> miette::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let api_client = api_client::ApiClient::new(cli.api_url);

    let output = match cli.command {
        Some(Commands::Board { command }) => match command {
            BoardCommands::List { format } => {
                commands::board::list_boards(&api_client, &format).await?
            }
            BoardCommands::Show { id, format } => {
                commands::board::show_board(&api_client, &id, &format).await?
            }
            BoardCommands::Create { title, description } => {
                commands::board::create_board(&api_client, &title, description.as_deref()).await?
            }
            BoardCommands::Update {
                id,
                title,
                description,
            } => {
                commands::board::update_board(
                    &api_client,
                    &id,
                    title.as_deref(),
                    description.as_deref(),
                )
                .await?
            }
            BoardCommands::Delete { id, force } => {
                commands::board::delete_board(&api_client, &id, force).await?
            }
        },
        Some(Commands::List { command }) => match command {
            ListCommands::Create {
                board_id,
                title,
                position,
            } => commands::list::create_list(&api_client, &board_id, &title, position).await?,
            ListCommands::Update {
                id,
                title,
                position,
            } => commands::list::update_list(&api_client, &id, title.as_deref(), position).await?,
            ListCommands::Delete { id, force } => {
                commands::list::delete_list(&api_client, &id, force).await?
            }
            ListCommands::Drag { board_id, from, to } => {
                commands::list::drag_list(&api_client, &board_id, from, to).await?
            }
        },
        Some(Commands::Card { command }) => match command {
            CardCommands::List { list_id, format } => {
                commands::card::list_cards(&api_client, &list_id, &format).await?
            }
            CardCommands::Create {
                list_id,
                title,
                description,
                due_date,
                labels,
                position,
            } => {
                let params = CardParams {
                    title: Some(&title),
                    description: description.as_deref(),
                    due_date: due_date.as_deref(),
                    labels: labels.as_deref(),
                    position,
                };
                commands::card::create_card(&api_client, &list_id, params).await?
            }
            CardCommands::Update {
                id,
                title,
                description,
                due_date,
                labels,
                position,
            } => {
                let params = CardParams {
                    title: title.as_deref(),
                    description: description.as_deref(),
                    due_date: due_date.as_deref(),
                    labels: labels.as_deref(),
                    position,
                };
                commands::card::update_card(&api_client, &id, params).await?
            }
            CardCommands::Move {
                id,
                list_id,
                board_id,
                position,
            } => {
                commands::card::move_card(&api_client, &id, &list_id, &board_id, position).await?
            }
            CardCommands::Delete { id, force } => {
                commands::card::delete_card(&api_client, &id, force).await?
            }
            CardCommands::Drag {
                board_id,
                source_list,
                from,
                dest_list,
                to,
            } => {
                commands::card::drag_card(&api_client, &board_id, &source_list, from, &dest_list, to)
                    .await?
            }
        },
        None => {
            // Show help when no command provided
            let _ = Cli::parse_from(["taskboard", "--help"]);
            return Ok(());
        }
    };

    println!("{}", output);
    Ok(())
}
