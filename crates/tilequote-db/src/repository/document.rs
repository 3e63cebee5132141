//! # Workspace Repository
//!
//! Persists the single document being edited between CLI runs.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use tilequote_core::QuoteDocument;

/// Repository for the working document (one row, id 1).
#[derive(Debug, Clone)]
pub struct WorkspaceRepository {
    pool: SqlitePool,
}

impl WorkspaceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        WorkspaceRepository { pool }
    }

    /// Replaces the working document.
    pub async fn store(&self, document: &QuoteDocument, now: DateTime<Utc>) -> DbResult<()> {
        let json = serde_json::to_string(document)?;
        debug!(rooms = document.rooms.len(), "Storing working document");

        sqlx::query(
            r#"
            INSERT INTO working_document (id, document_json, updated_at)
            VALUES (1, ?1, ?2)
            ON CONFLICT(id) DO UPDATE SET
                document_json = excluded.document_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// The working document, or `None` on a fresh database.
    pub async fn load(&self) -> DbResult<Option<QuoteDocument>> {
        let json: Option<String> =
            sqlx::query_scalar("SELECT document_json FROM working_document WHERE id = 1")
                .fetch_optional(&self.pool)
                .await?;

        match json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Forgets the working document. A no-op when none is stored.
    pub async fn clear(&self) -> DbResult<()> {
        sqlx::query("DELETE FROM working_document WHERE id = 1")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    #[tokio::test]
    async fn test_fresh_database_has_no_document() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.workspace().load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_replaces_previous() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.workspace();

        repo.store(&QuoteDocument::with_rooms(1), Utc::now()).await.unwrap();
        let mut doc = QuoteDocument::with_rooms(3);
        doc.customer.name = "Priya".to_string();
        repo.store(&doc, Utc::now()).await.unwrap();

        assert_eq!(repo.load().await.unwrap(), Some(doc));

        repo.clear().await.unwrap();
        assert_eq!(repo.load().await.unwrap(), None);
    }
}
