//! SQLite CardRepository implementation.

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::helpers::{labels_from_json, labels_to_json, list_board_id, map_db_err};
use crate::db::position::{next_position, resolve_position};
use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{Card, CardMove, CardRepository, DbError, DbResult, NewCard};

const CARD_COLUMNS: &str = "id, list_id, board_id, title, description, due_date, labels, position, created_at, updated_at";

/// SQLx-backed card repository.
pub struct SqliteCardRepository {
    pub(crate) pool: SqlitePool,
}

impl CardRepository for SqliteCardRepository {
    async fn create(&self, card: &NewCard) -> DbResult<Card> {
        let board_id = list_board_id(&self.pool, &card.list_id)
            .await?
            .ok_or_else(|| DbError::not_found("List", &card.list_id))?;

        let max = self.max_position(&card.list_id).await?;
        let position = resolve_position(card.position, max)?;
        debug!(list_id = %card.list_id, position, "assigned card position");

        let id = generate_entity_id();
        let now = current_timestamp();
        let labels_json = labels_to_json(&card.labels)?;

        sqlx::query(
            "INSERT INTO card (id, list_id, board_id, title, description, due_date, labels, position, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&card.list_id)
        .bind(&board_id)
        .bind(&card.title)
        .bind(&card.description)
        .bind(&card.due_date)
        .bind(&labels_json)
        .bind(position)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(Card {
            id,
            list_id: card.list_id.clone(),
            board_id,
            title: card.title.clone(),
            description: card.description.clone(),
            due_date: card.due_date.clone(),
            labels: card.labels.clone(),
            position,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn get(&self, id: &str) -> DbResult<Card> {
        let row = sqlx::query(&format!("SELECT {} FROM card WHERE id = ?", CARD_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_err)?;

        row.map(|r| row_to_card(&r))
            .ok_or_else(|| DbError::not_found("Card", id))
    }

    async fn list_by_list(&self, list_id: &str) -> DbResult<Vec<Card>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM card WHERE list_id = ? ORDER BY position ASC, rowid ASC",
            CARD_COLUMNS
        ))
        .bind(list_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(rows.iter().map(row_to_card).collect())
    }

    async fn max_position(&self, list_id: &str) -> DbResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT MAX(position) FROM card WHERE list_id = ?")
            .bind(list_id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_err)
    }

    async fn update(&self, card: &Card) -> DbResult<Card> {
        let now = current_timestamp();
        let labels_json = labels_to_json(&card.labels)?;

        let result = sqlx::query(
            "UPDATE card
             SET title = ?, description = ?, due_date = ?, labels = ?, position = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&card.title)
        .bind(&card.description)
        .bind(&card.due_date)
        .bind(&labels_json)
        .bind(card.position)
        .bind(&now)
        .bind(&card.id)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Card", &card.id));
        }

        Ok(Card {
            updated_at: now,
            ..card.clone()
        })
    }

    async fn move_card(&self, id: &str, target: &CardMove) -> DbResult<Card> {
        let card = self.get(id).await?;

        if list_board_id(&self.pool, &target.list_id).await?.is_none() {
            return Err(DbError::not_found("List", &target.list_id));
        }

        // Measured before the write, so a card moved within its own list
        // counts itself.
        let position = match target.position {
            Some(position) => position,
            None => next_position(self.max_position(&target.list_id).await?)?,
        };
        debug!(card_id = id, list_id = %target.list_id, position, "moving card");

        let now = current_timestamp();
        let result = sqlx::query(
            "UPDATE card SET list_id = ?, board_id = ?, position = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&target.list_id)
        .bind(&target.board_id)
        .bind(position)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Card", id));
        }

        Ok(Card {
            list_id: target.list_id.clone(),
            board_id: target.board_id.clone(),
            position,
            updated_at: now,
            ..card
        })
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM card WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Card", id));
        }

        Ok(())
    }
}

/// Convert a database row to a Card model.
fn row_to_card(row: &sqlx::sqlite::SqliteRow) -> Card {
    Card {
        id: row.get("id"),
        list_id: row.get("list_id"),
        board_id: row.get("board_id"),
        title: row.get("title"),
        description: row.get("description"),
        due_date: row.get("due_date"),
        labels: labels_from_json(row.get("labels")),
        position: row.get("position"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
