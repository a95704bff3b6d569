//! Domain models for the board database.
//!
//! These models are storage-agnostic and represent the board → list → card
//! hierarchy used throughout the application.

use serde::{Deserialize, Serialize};

/// 24-character hex ID type used for all entities.
pub type Id = String;

/// Top-level container owning lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: Id,
    pub title: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// An ordered column within a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    pub id: Id,
    pub board_id: Id,
    pub title: String,
    /// Sort key among the lists of the same board. Not unique.
    pub position: i64,
    pub created_at: String,
    pub updated_at: String,
}

/// A task item within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: Id,
    pub list_id: Id,
    /// Denormalized board of the owning list. Copied from the list on create
    /// and from the caller on move; never re-derived.
    pub board_id: Id,
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339 datetime.
    pub due_date: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Sort key among the cards of the same list. Not unique.
    pub position: i64,
    pub created_at: String,
    pub updated_at: String,
}

// =============================================================================
// Creation inputs
// =============================================================================

/// Fields required to create a board.
#[derive(Debug, Clone, Default)]
pub struct NewBoard {
    pub title: String,
    pub description: Option<String>,
}

/// Fields required to create a list. `position: None` appends after the
/// board's current last list.
#[derive(Debug, Clone, Default)]
pub struct NewList {
    pub board_id: Id,
    pub title: String,
    pub position: Option<i64>,
}

/// Fields required to create a card. The board id is taken from the list.
#[derive(Debug, Clone, Default)]
pub struct NewCard {
    pub list_id: Id,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub labels: Vec<String>,
    pub position: Option<i64>,
}

/// Target of a card move. `board_id` is trusted as given.
#[derive(Debug, Clone, Default)]
pub struct CardMove {
    pub list_id: Id,
    pub board_id: Id,
    pub position: Option<i64>,
}
