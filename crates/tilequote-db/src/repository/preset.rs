//! # Rate Preset Repository
//!
//! Named rate sheets. Saving under an existing name replaces it.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use tilequote_core::validation::validate_preset_name;
use tilequote_core::{RatePreset, RateSheet};

#[derive(Debug, sqlx::FromRow)]
struct PresetRow {
    name: String,
    rates_json: String,
}

impl PresetRow {
    fn into_preset(self) -> DbResult<RatePreset> {
        let rates: RateSheet = serde_json::from_str(&self.rates_json)?;
        Ok(RatePreset {
            name: self.name,
            rates,
        })
    }
}

/// Repository for rate preset operations.
#[derive(Debug, Clone)]
pub struct PresetRepository {
    pool: SqlitePool,
}

impl PresetRepository {
    /// Creates a new PresetRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PresetRepository { pool }
    }

    /// Saves `rates` under `name`, overwriting any preset with that name.
    ///
    /// The name is trimmed and must be 1-50 characters.
    pub async fn upsert(
        &self,
        name: &str,
        rates: &RateSheet,
        now: DateTime<Utc>,
    ) -> DbResult<RatePreset> {
        let name = name.trim();
        validate_preset_name(name)?;

        let rates_json = serde_json::to_string(rates)?;
        debug!(name = %name, "Saving rate preset");

        sqlx::query(
            r#"
            INSERT INTO rate_presets (name, rates_json, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            ON CONFLICT(name) DO UPDATE SET
                rates_json = excluded.rates_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(name)
        .bind(&rates_json)
        .bind(now)
        .execute(&self.pool)
        .await?;

        info!(name = %name, "Rate preset saved");
        Ok(RatePreset {
            name: name.to_string(),
            rates: rates.clone(),
        })
    }

    /// Every preset, ordered by name.
    pub async fn list(&self) -> DbResult<Vec<RatePreset>> {
        let rows: Vec<PresetRow> =
            sqlx::query_as("SELECT name, rates_json FROM rate_presets ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = rows.len(), "Listed rate presets");
        rows.into_iter().map(PresetRow::into_preset).collect()
    }

    /// Loads one preset by name.
    pub async fn get(&self, name: &str) -> DbResult<RatePreset> {
        let name = name.trim();
        let row: Option<PresetRow> =
            sqlx::query_as("SELECT name, rates_json FROM rate_presets WHERE name = ?1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;

        row.ok_or_else(|| DbError::not_found("Rate preset", name))?
            .into_preset()
    }

    /// Deletes a preset by name.
    pub async fn delete(&self, name: &str) -> DbResult<()> {
        let name = name.trim();
        let result = sqlx::query("DELETE FROM rate_presets WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Rate preset", name));
        }

        info!(name = %name, "Rate preset deleted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
