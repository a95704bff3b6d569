//! Client-side view of one board with optimistic drag-and-drop.
//!
//! Local state changes first, then one request is sent. What happens on
//! failure depends on the drag:
//!
//! - list reorder: the lists are restored from the pre-drag snapshot
//! - card reorder within a list: the local order is kept
//! - card move across lists: the whole board is reloaded from the server

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::cli::api_client::ApiClient;
use crate::cli::error::{CliError, CliResult};
use crate::cli::models::{Board, Card, CardInput, List, ListInput, MoveInput};

/// Result of a drag that passed the no-op checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Same slot or out-of-range index; nothing was sent.
    Ignored,
    /// The server accepted the change.
    Saved,
}

#[derive(Debug, Clone)]
pub struct BoardView {
    pub board: Board,
    /// Ordered by position as returned by the server.
    pub lists: Vec<List>,
    /// Cards per list id, ordered by position.
    pub cards: HashMap<String, Vec<Card>>,
}

impl BoardView {
    /// Fetch the board, its lists and every list's cards.
    pub async fn load(client: &ApiClient, board_id: &str) -> CliResult<Self> {
        let board = client.get_board(board_id).await?;
        let lists = client.list_lists(board_id).await?;

        let mut cards = HashMap::with_capacity(lists.len());
        for list in &lists {
            cards.insert(list.id.clone(), client.list_cards(&list.id).await?);
        }

        Ok(Self {
            board,
            lists,
            cards,
        })
    }

    pub fn cards_of(&self, list_id: &str) -> &[Card] {
        self.cards.get(list_id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn find_list(&self, list_id: &str) -> CliResult<&List> {
        self.lists
            .iter()
            .find(|l| l.id == list_id)
            .ok_or_else(|| CliError::InvalidInput {
                message: format!("List {} is not on board {}", list_id, self.board.id),
            })
    }

    /// Replace the local state with a fresh copy from the server.
    pub async fn reload(&mut self, client: &ApiClient) -> CliResult<()> {
        *self = Self::load(client, &self.board.id).await?;
        Ok(())
    }

    /// Move the list at index `from` to index `to`.
    ///
    /// Local positions are renumbered to their indices; only the dragged
    /// list is sent. Reverts to the previous order if the update fails.
    pub async fn drag_list(
        &mut self,
        client: &ApiClient,
        from: usize,
        to: usize,
    ) -> CliResult<DragOutcome> {
        if from == to || from >= self.lists.len() || to >= self.lists.len() {
            return Ok(DragOutcome::Ignored);
        }

        let snapshot = self.lists.clone();

        let moved = self.lists.remove(from);
        self.lists.insert(to, moved);
        for (index, list) in self.lists.iter_mut().enumerate() {
            list.position = index as i64;
        }

        let list_id = self.lists[to].id.clone();
        let input = ListInput {
            position: Some(to as i64),
            ..Default::default()
        };

        match client.update_list(&list_id, &input).await {
            Ok(updated) => {
                debug!(list_id = %list_id, position = updated.position, "list reordered");
                self.lists[to] = updated;
                Ok(DragOutcome::Saved)
            }
            Err(e) => {
                warn!(list_id = %list_id, error = %e, "list reorder failed, reverting");
                self.lists = snapshot;
                Err(e)
            }
        }
    }

    /// Move the card at `from` in `source_list` to `to` in `dest_list`.
    pub async fn drag_card(
        &mut self,
        client: &ApiClient,
        source_list: &str,
        from: usize,
        dest_list: &str,
        to: usize,
    ) -> CliResult<DragOutcome> {
        self.find_list(source_list)?;
        self.find_list(dest_list)?;

        if source_list == dest_list {
            self.reorder_card(client, source_list, from, to).await
        } else {
            self.move_card_across(client, source_list, from, dest_list, to)
                .await
        }
    }

    async fn reorder_card(
        &mut self,
        client: &ApiClient,
        list_id: &str,
        from: usize,
        to: usize,
    ) -> CliResult<DragOutcome> {
        let cards = self.cards.entry(list_id.to_string()).or_default();
        if from == to || from >= cards.len() || to >= cards.len() {
            return Ok(DragOutcome::Ignored);
        }

        let mut moved = cards.remove(from);
        moved.position = to as i64;
        let card_id = moved.id.clone();
        cards.insert(to, moved);

        let input = CardInput {
            position: Some(to as i64),
            ..Default::default()
        };

        match client.update_card(&card_id, &input).await {
            Ok(updated) => {
                debug!(card_id = %card_id, position = updated.position, "card reordered");
                if let Some(slot) = self
                    .cards
                    .get_mut(list_id)
                    .and_then(|cards| cards.get_mut(to))
                {
                    *slot = updated;
                }
                Ok(DragOutcome::Saved)
            }
            Err(e) => {
                // Local order stays as dropped
                warn!(card_id = %card_id, error = %e, "card reorder failed");
                Err(e)
            }
        }
    }

    async fn move_card_across(
        &mut self,
        client: &ApiClient,
        source_list: &str,
        from: usize,
        dest_list: &str,
        to: usize,
    ) -> CliResult<DragOutcome> {
        let source_len = self.cards_of(source_list).len();
        let dest_len = self.cards_of(dest_list).len();
        // Dropping after the last card of the destination is allowed
        if from >= source_len || to > dest_len {
            return Ok(DragOutcome::Ignored);
        }

        let mut moved = self
            .cards
            .entry(source_list.to_string())
            .or_default()
            .remove(from);
        moved.list_id = dest_list.to_string();
        moved.board_id = self.board.id.clone();
        moved.position = to as i64;
        let card_id = moved.id.clone();
        self.cards
            .entry(dest_list.to_string())
            .or_default()
            .insert(to, moved);

        let input = MoveInput {
            list_id: dest_list.to_string(),
            board_id: self.board.id.clone(),
            position: Some(to as i64),
        };

        match client.move_card(&card_id, &input).await {
            Ok(updated) => {
                debug!(card_id = %card_id, list_id = %dest_list, position = updated.position, "card moved");
                if let Some(slot) = self
                    .cards
                    .get_mut(dest_list)
                    .and_then(|cards| cards.get_mut(to))
                {
                    *slot = updated;
                }
                Ok(DragOutcome::Saved)
            }
            Err(e) => {
                warn!(card_id = %card_id, error = %e, "card move failed, reloading board");
                if let Err(reload_err) = self.reload(client).await {
                    warn!(error = %reload_err, "board reload failed");
                }
                Err(e)
            }
        }
    }

    /// Create a list at the end of the board.
    ///
    /// The position sent is the current list count plus one.
    pub async fn add_list(&mut self, client: &ApiClient, title: &str) -> CliResult<&List> {
        let input = ListInput {
            title: Some(title.to_string()),
            position: Some(self.lists.len() as i64 + 1),
        };
        let created = client.create_list(&self.board.id, &input).await?;
        self.cards.insert(created.id.clone(), Vec::new());
        self.lists.push(created);
        let index = self.lists.len() - 1;
        Ok(&self.lists[index])
    }

    /// Create a card at the end of `list_id`.
    ///
    /// The position sent is the list's current card count plus one.
    pub async fn add_card(
        &mut self,
        client: &ApiClient,
        list_id: &str,
        title: &str,
    ) -> CliResult<&Card> {
        self.find_list(list_id)?;
        let input = CardInput {
            title: Some(title.to_string()),
            position: Some(self.cards_of(list_id).len() as i64 + 1),
            ..Default::default()
        };
        let created = client.create_card(list_id, &input).await?;
        let cards = self.cards.entry(list_id.to_string()).or_default();
        cards.push(created);
        let index = cards.len() - 1;
        Ok(&cards[index])
    }
}
