//! # Saved Quote Repository
//!
//! Frozen snapshots of quote documents.
//!
//! ## Keys
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  id = saved_at in epoch milliseconds                                    │
//! │                                                                         │
//! │  1760868000000  ← first save                                            │
//! │  1760868000001  ← second save in the same millisecond (bumped)          │
//! │                                                                         │
//! │  Listing orders by id descending, so newest comes first.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The whole [`SavedQuote`] is kept as JSON. Customer name, room count and
//! grand total are copied out so listing never parses a document.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use tilequote_core::{Money, QuoteDocument, SavedQuote};

/// One line of the saved quotes list.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuoteSummary {
    pub id: i64,
    pub saved_at: DateTime<Utc>,
    pub customer_name: Option<String>,
    pub room_count: i64,
    pub grand_total: f64,
}

impl SavedQuoteSummary {
    /// Customer name, or "this job" when none was entered.
    pub fn title(&self) -> &str {
        self.customer_name.as_deref().unwrap_or("this job")
    }

    pub fn grand_total(&self) -> Money {
        Money::new(self.grand_total)
    }

    pub fn saved_at_label(&self) -> String {
        self.saved_at.format("%d/%m/%Y %H:%M").to_string()
    }
}

/// Repository for saved quote operations.
#[derive(Debug, Clone)]
pub struct SavedQuoteRepository {
    pool: SqlitePool,
}

impl SavedQuoteRepository {
    /// Creates a new SavedQuoteRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SavedQuoteRepository { pool }
    }

    /// Snapshots `document` as of `now` and stores it.
    ///
    /// ## Steps
    /// 1. Read the highest existing id
    /// 2. Build the snapshot (id bumped past that maximum if needed)
    /// 3. Insert row and JSON in one statement
    pub async fn save(&self, document: &QuoteDocument, now: DateTime<Utc>) -> DbResult<SavedQuote> {
        let mut tx = self.pool.begin().await?;

        let max_id: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM saved_quotes")
            .fetch_one(&mut *tx)
            .await?;

        let saved = SavedQuote::new(document.clone(), now, max_id);
        let grand_total = saved.recompute().grand_total().pounds();
        let json = serde_json::to_string(&saved)?;

        debug!(id = saved.id, rooms = saved.document.rooms.len(), "Saving quote");

        sqlx::query(
            r#"
            INSERT INTO saved_quotes
                (id, saved_at, customer_name, room_count, grand_total, document_json)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(saved.id)
        .bind(saved.saved_at)
        .bind(saved.document.customer.name())
        .bind(saved.document.rooms.len() as i64)
        .bind(grand_total)
        .bind(&json)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(id = saved.id, title = %saved.title(), "Quote saved");
        Ok(saved)
    }

    /// Summaries of every saved quote, newest first.
    pub async fn list(&self) -> DbResult<Vec<SavedQuoteSummary>> {
        let rows: Vec<SavedQuoteSummary> = sqlx::query_as(
            r#"
            SELECT id, saved_at, customer_name, room_count, grand_total
            FROM saved_quotes
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed saved quotes");
        Ok(rows)
    }

    /// Loads the full snapshot.
    pub async fn get(&self, id: i64) -> DbResult<SavedQuote> {
        let json: Option<String> =
            sqlx::query_scalar("SELECT document_json FROM saved_quotes WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        let json = json.ok_or_else(|| DbError::not_found("Saved quote", id.to_string()))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub async fn delete(&self, id: i64) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM saved_quotes WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Saved quote", id.to_string()));
        }

        info!(id, "Saved quote deleted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
