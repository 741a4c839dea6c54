use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{ProgressRecord, ProgressRepository, StorageError};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

impl SqliteRepository {
    /// Delete the saved snapshot so the next load yields the default
    /// state. This is the storage-clear behind the `reset` command.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the delete fails.
    pub async fn clear_progress(&self) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM progress")
            .execute(&self.pool)
            .await
            .map_err(conn)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query("SELECT snapshot FROM progress WHERE id = 1")
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let payload: String = row.try_get("snapshot").map_err(conn)?;
        serde_json::from_str(&payload)
            .map(Some)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    async fn save(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        sqlx::query(
            r"
            INSERT INTO progress (id, snapshot) VALUES (1, ?1)
            ON CONFLICT(id) DO UPDATE SET snapshot = excluded.snapshot
            ",
        )
        .bind(payload)
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        Ok(())
    }
}
