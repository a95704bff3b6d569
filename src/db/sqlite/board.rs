//! SQLite BoardRepository implementation.

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::helpers::map_db_err;
use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{Board, BoardRepository, DbError, DbResult, NewBoard};

/// SQLx-backed board repository.
pub struct SqliteBoardRepository {
    pub(crate) pool: SqlitePool,
}

impl BoardRepository for SqliteBoardRepository {
    async fn create(&self, board: &NewBoard) -> DbResult<Board> {
        let id = generate_entity_id();
        let now = current_timestamp();

        sqlx::query(
            "INSERT INTO board (id, title, description, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&board.title)
        .bind(&board.description)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(Board {
            id,
            title: board.title.clone(),
            description: board.description.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn get(&self, id: &str) -> DbResult<Board> {
        let row = sqlx::query(
            "SELECT id, title, description, created_at, updated_at FROM board WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(|r| row_to_board(&r))
            .ok_or_else(|| DbError::not_found("Board", id))
    }

    async fn list(&self) -> DbResult<Vec<Board>> {
        let rows = sqlx::query(
            "SELECT id, title, description, created_at, updated_at
             FROM board ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(rows.iter().map(row_to_board).collect())
    }

    async fn update(&self, board: &Board) -> DbResult<Board> {
        let now = current_timestamp();

        let result =
            sqlx::query("UPDATE board SET title = ?, description = ?, updated_at = ? WHERE id = ?")
                .bind(&board.title)
                .bind(&board.description)
                .bind(&now)
                .bind(&board.id)
                .execute(&self.pool)
                .await
                .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Board", &board.id));
        }

        Ok(Board {
            updated_at: now,
            ..board.clone()
        })
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        // Existence first so a missing board reports NotFound instead of a no-op
        self.get(id).await?;

        // Independent statements, no transaction: a failure part-way leaves
        // the remaining children in place.
        let cards = sqlx::query("DELETE FROM card WHERE board_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        debug!(board_id = id, deleted = cards.rows_affected(), "deleted board cards");

        let lists = sqlx::query("DELETE FROM board_list WHERE board_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        debug!(board_id = id, deleted = lists.rows_affected(), "deleted board lists");

        sqlx::query("DELETE FROM board WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert a database row to a Board model.
fn row_to_board(row: &sqlx::sqlite::SqliteRow) -> Board {
    Board {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
