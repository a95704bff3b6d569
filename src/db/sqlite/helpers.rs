//! Shared helper functions for SQLite repositories.

use sqlx::SqlitePool;

use crate::db::{DbError, DbResult};

/// Wrap a driver error in the storage-agnostic error type.
pub fn map_db_err(e: sqlx::Error) -> DbError {
    DbError::Database {
        message: e.to_string(),
    }
}

/// Whether a board with the given id exists.
pub async fn board_exists(pool: &SqlitePool, id: &str) -> DbResult<bool> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM board WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await
        .map_err(map_db_err)
}

/// Board id of a list, or None when the list does not exist.
pub async fn list_board_id(pool: &SqlitePool, list_id: &str) -> DbResult<Option<String>> {
    sqlx::query_scalar::<_, String>("SELECT board_id FROM board_list WHERE id = ?")
        .bind(list_id)
        .fetch_optional(pool)
        .await
        .map_err(map_db_err)
}

/// Serialize labels for the JSON text column.
pub fn labels_to_json(labels: &[String]) -> DbResult<String> {
    serde_json::to_string(labels).map_err(|e| DbError::Database {
        message: format!("Failed to serialize labels: {}", e),
    })
}

/// Parse the labels column, treating NULL or garbage as no labels.
pub fn labels_from_json(raw: Option<String>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_default()
}
