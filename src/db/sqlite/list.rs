//! SQLite ListRepository implementation.

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::helpers::{board_exists, map_db_err};
use crate::db::position::resolve_position;
use crate::db::utils::{current_timestamp, generate_entity_id};
use crate::db::{DbError, DbResult, List, ListRepository, NewList};

/// SQLx-backed list repository.
pub struct SqliteListRepository {
    pub(crate) pool: SqlitePool,
}

impl ListRepository for SqliteListRepository {
    async fn create(&self, list: &NewList) -> DbResult<List> {
        if !board_exists(&self.pool, &list.board_id).await? {
            return Err(DbError::not_found("Board", &list.board_id));
        }

        // Read-then-write without locking; concurrent creates may collide.
        let max = self.max_position(&list.board_id).await?;
        let position = resolve_position(list.position, max)?;
        debug!(board_id = %list.board_id, position, "assigned list position");

        let id = generate_entity_id();
        let now = current_timestamp();

        sqlx::query(
            "INSERT INTO board_list (id, board_id, title, position, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&list.board_id)
        .bind(&list.title)
        .bind(position)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(List {
            id,
            board_id: list.board_id.clone(),
            title: list.title.clone(),
            position,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    async fn get(&self, id: &str) -> DbResult<List> {
        let row = sqlx::query(
            "SELECT id, board_id, title, position, created_at, updated_at
             FROM board_list WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)?;

        row.map(|r| row_to_list(&r))
            .ok_or_else(|| DbError::not_found("List", id))
    }

    async fn list_by_board(&self, board_id: &str) -> DbResult<Vec<List>> {
        let rows = sqlx::query(
            "SELECT id, board_id, title, position, created_at, updated_at
             FROM board_list WHERE board_id = ? ORDER BY position ASC, rowid ASC",
        )
        .bind(board_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)?;

        Ok(rows.iter().map(row_to_list).collect())
    }

    async fn max_position(&self, board_id: &str) -> DbResult<Option<i64>> {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT MAX(position) FROM board_list WHERE board_id = ?",
        )
        .bind(board_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn update(&self, list: &List) -> DbResult<List> {
        let now = current_timestamp();

        let result = sqlx::query(
            "UPDATE board_list SET title = ?, position = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&list.title)
        .bind(list.position)
        .bind(&now)
        .bind(&list.id)
        .execute(&self.pool)
        .await
        .map_err(map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("List", &list.id));
        }

        Ok(List {
            updated_at: now,
            ..list.clone()
        })
    }

    async fn delete(&self, id: &str) -> DbResult<()> {
        self.get(id).await?;

        let cards = sqlx::query("DELETE FROM card WHERE list_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;
        debug!(list_id = id, deleted = cards.rows_affected(), "deleted list cards");

        sqlx::query("DELETE FROM board_list WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

/// Convert a database row to a List model.
fn row_to_list(row: &sqlx::sqlite::SqliteRow) -> List {
    List {
        id: row.get("id"),
        board_id: row.get("board_id"),
        title: row.get("title"),
        position: row.get("position"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
