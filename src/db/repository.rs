//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer. Methods
//! return `Send` futures so generic axum handlers can await them.

use crate::db::{
    DbResult,
    models::{Board, Card, CardMove, List, NewBoard, NewCard, NewList},
};

/// Repository for Board operations.
pub trait BoardRepository {
    /// Create a new board with a generated id and fresh timestamps.
    fn create(&self, board: &NewBoard) -> impl Future<Output = DbResult<Board>> + Send;

    /// Get a board by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Board>> + Send;

    /// Get all boards.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Board>>> + Send;

    /// Persist title and description, returning the stored state.
    fn update(&self, board: &Board) -> impl Future<Output = DbResult<Board>> + Send;

    /// Delete a board with all of its lists and cards.
    ///
    /// Cards go first, then lists, then the board, as separate statements.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for List operations.
pub trait ListRepository {
    /// Create a list under an existing board.
    ///
    /// Fails with NotFound when the board does not exist. Without an explicit
    /// position the list is appended after the board's highest position.
    fn create(&self, list: &NewList) -> impl Future<Output = DbResult<List>> + Send;

    /// Get a list by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<List>> + Send;

    /// Get all lists of a board, ascending by position.
    fn list_by_board(&self, board_id: &str) -> impl Future<Output = DbResult<Vec<List>>> + Send;

    /// Highest position among the lists of a board, if any.
    fn max_position(&self, board_id: &str) -> impl Future<Output = DbResult<Option<i64>>> + Send;

    /// Persist title and position, returning the stored state.
    fn update(&self, list: &List) -> impl Future<Output = DbResult<List>> + Send;

    /// Delete a list with all of its cards.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Card operations.
pub trait CardRepository {
    /// Create a card under an existing list, copying the list's board id.
    ///
    /// Fails with NotFound when the list does not exist. Without an explicit
    /// position the card is appended after the list's highest position.
    fn create(&self, card: &NewCard) -> impl Future<Output = DbResult<Card>> + Send;

    /// Get a card by ID.
    fn get(&self, id: &str) -> impl Future<Output = DbResult<Card>> + Send;

    /// Get all cards of a list, ascending by position.
    fn list_by_list(&self, list_id: &str) -> impl Future<Output = DbResult<Vec<Card>>> + Send;

    /// Highest position among the cards of a list, if any.
    fn max_position(&self, list_id: &str) -> impl Future<Output = DbResult<Option<i64>>> + Send;

    /// Persist editable fields, returning the stored state.
    fn update(&self, card: &Card) -> impl Future<Output = DbResult<Card>> + Send;

    /// Relocate a card to a (possibly different) list.
    ///
    /// Fails with NotFound when either the card or the target list is
    /// missing; the card is left untouched in that case. Siblings are never
    /// renumbered.
    fn move_card(&self, id: &str, target: &CardMove)
    -> impl Future<Output = DbResult<Card>> + Send;

    /// Delete a card by ID.
    fn delete(&self, id: &str) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Boards: BoardRepository + Send + Sync;
    type Lists: ListRepository + Send + Sync;
    type Cards: CardRepository + Send + Sync;

    /// Run pending migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the board repository.
    fn boards(&self) -> Self::Boards;

    /// Get the list repository.
    fn lists(&self) -> Self::Lists;

    /// Get the card repository.
    fn cards(&self) -> Self::Cards;
}
