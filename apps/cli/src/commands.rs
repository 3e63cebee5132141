//! # Subcommand Implementations
//!
//! Each function returns the text to print on stdout. File and database
//! access happen here; every number comes from `tilequote-core`.

use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info};

use tilequote_core::message::{format_quote_message, format_trader_breakdown, sign_off};
use tilequote_core::share::{email_link, whatsapp_link};
use tilequote_core::validation::validate_document;
use tilequote_core::voice::parse_spoken_value;
use tilequote_core::QuoteDocument;
use tilequote_db::Database;

use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

// =============================================================================
// Job Files
// =============================================================================

/// Reads a `QuoteDocument` JSON file.
pub fn read_document(path: &Path) -> CliResult<QuoteDocument> {
    let json = std::fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
    let doc = QuoteDocument::from_json(&json)?;
    debug!(path = %path.display(), rooms = doc.rooms.len(), "Read job file");
    Ok(doc)
}

/// Writes a `QuoteDocument` as pretty JSON.
pub fn write_document(path: &Path, doc: &QuoteDocument) -> CliResult<()> {
    let json = doc.to_json()?;
    std::fs::write(path, json).map_err(|e| CliError::io(path, e))?;
    debug!(path = %path.display(), "Wrote job file");
    Ok(())
}

// =============================================================================
// Pure Commands
// =============================================================================

/// Output of `tilequote quote`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QuoteFormat {
    /// Every line with quantities, for the trader
    #[default]
    Breakdown,
    /// The full result as JSON
    Json,
    /// The message sent to the customer
    Message,
}

/// Where `tilequote share` sends the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShareChannel {
    Whatsapp,
    Email,
}

/// The customer message with the trader's sign-off.
pub fn customer_message(doc: &QuoteDocument, config: &AppConfig, today: NaiveDate) -> String {
    let message = format_quote_message(&doc.quote(), &doc.customer, today);
    sign_off(&message, config.trader_name.as_deref())
}

pub fn render_quote(
    doc: &QuoteDocument,
    format: QuoteFormat,
    config: &AppConfig,
    today: NaiveDate,
) -> CliResult<String> {
    Ok(match format {
        QuoteFormat::Breakdown => format_trader_breakdown(&doc.quote()),
        QuoteFormat::Json => serde_json::to_string_pretty(&doc.quote())?,
        QuoteFormat::Message => customer_message(doc, config, today),
    })
}

/// Builds the deep link carrying the customer message.
pub fn share_link(
    doc: &QuoteDocument,
    channel: ShareChannel,
    config: &AppConfig,
    today: NaiveDate,
) -> CliResult<String> {
    if !doc.quote().has_calculations() {
        return Err(CliError::NothingToShare);
    }

    let message = customer_message(doc, config, today);
    let customer = &doc.customer;

    Ok(match channel {
        ShareChannel::Whatsapp => {
            whatsapp_link(customer.phone().unwrap_or(""), &message, &config.country_code)
        }
        ShareChannel::Email => {
            email_link(customer.email().unwrap_or(""), customer.name(), &message)
        }
    })
}

/// A fresh document with `rooms` default rooms.
pub fn new_document(rooms: usize) -> QuoteDocument {
    QuoteDocument::with_rooms(rooms)
}

/// Runs the spoken value parser over a transcript.
pub fn voice(transcript: &str, numeric: bool) -> CliResult<String> {
    parse_spoken_value(transcript, numeric).ok_or_else(|| CliError::Unrecognised(transcript.to_string()))
}

// =============================================================================
// Saved Quotes
// =============================================================================

pub async fn save_quote(db: &Database, doc: &QuoteDocument, now: DateTime<Utc>) -> CliResult<String> {
    validate_document(doc)?;
    let saved = db.quotes().save(doc, now).await?;
    info!(id = saved.id, "Saved quote");
    Ok(format!(
        "Saved quote {} for {} ({})",
        saved.id,
        saved.title(),
        saved.recompute().grand_total()
    ))
}

pub async fn list_quotes(db: &Database) -> CliResult<String> {
    let quotes = db.quotes().list().await?;
    if quotes.is_empty() {
        return Ok("No saved quotes".to_string());
    }

    let mut out = String::new();
    for quote in &quotes {
        let rooms = if quote.room_count == 1 { "room" } else { "rooms" };
        let _ = writeln!(
            out,
            "{}  {}  {:<24} {} {:<6} {:>10}",
            quote.id,
            quote.saved_at_label(),
            quote.title(),
            quote.room_count,
            rooms,
            quote.grand_total().to_string()
        );
    }
    Ok(out.trim_end().to_string())
}

/// Recomputes a saved quote and renders it like `tilequote quote`.
pub async fn show_quote(
    db: &Database,
    id: i64,
    format: QuoteFormat,
    config: &AppConfig,
) -> CliResult<String> {
    let saved = db.quotes().get(id).await?;
    let header = format!("Quote for {} saved {}", saved.title(), saved.saved_at_label());
    let body = render_quote(&saved.document, format, config, saved.saved_at.date_naive())?;

    Ok(match format {
        QuoteFormat::Json => body,
        _ => format!("{header}\n\n{body}"),
    })
}

/// The document inside a saved quote, ready to edit again.
pub async fn load_quote(db: &Database, id: i64) -> CliResult<QuoteDocument> {
    Ok(db.quotes().get(id).await?.document)
}

pub async fn delete_quote(db: &Database, id: i64) -> CliResult<String> {
    db.quotes().delete(id).await?;
    Ok(format!("Deleted quote {id}"))
}

// =============================================================================
// Rate Presets
// =============================================================================

/// Stores the job's rate sheet under `name`.
pub async fn save_preset(
    db: &Database,
    name: &str,
    doc: &QuoteDocument,
    now: DateTime<Utc>,
) -> CliResult<String> {
    let preset = db.presets().upsert(name, &doc.rates, now).await?;
    Ok(format!("Saved rate preset '{}'", preset.name))
}

pub async fn list_presets(db: &Database) -> CliResult<String> {
    let presets = db.presets().list().await?;
    if presets.is_empty() {
        return Ok("No rate presets".to_string());
    }

    let mut out = String::new();
    for preset in &presets {
        let r = &preset.rates;
        let _ = writeln!(
            out,
            "{:<20} floor {}/m²  wall {}/m²  day {}  VAT {}",
            preset.name,
            r.floor_rate,
            r.wall_rate,
            r.day_rate,
            if r.vat_enabled { r.vat_rate.to_string() } else { "off".to_string() }
        );
    }
    Ok(out.trim_end().to_string())
}

/// Replaces the document's rates with the named preset.
pub async fn apply_preset(db: &Database, name: &str, doc: &mut QuoteDocument) -> CliResult<()> {
    let preset = db.presets().get(name).await?;
    doc.apply_rates(preset.rates);
    info!(name = %preset.name, "Applied rate preset");
    Ok(())
}

pub async fn delete_preset(db: &Database, name: &str) -> CliResult<String> {
    db.presets().delete(name).await?;
    Ok(format!("Deleted rate preset '{}'", name.trim()))
}

// =============================================================================
// Working Document
// =============================================================================

pub async fn store_workspace(
    db: &Database,
    doc: &QuoteDocument,
    now: DateTime<Utc>,
) -> CliResult<String> {
    db.workspace().store(doc, now).await?;
    Ok(format!("Stored working document ({} rooms)", doc.rooms.len()))
}

pub async fn load_workspace(db: &Database) -> CliResult<QuoteDocument> {
    db.workspace().load().await?.ok_or(CliError::NoWorkspace)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tilequote_core::{LabourMode, Money, RoomOption};
    use tilequote_db::DbConfig;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 16, 45, 0).unwrap()
    }

    fn job() -> QuoteDocument {
        let mut doc = QuoteDocument::with_rooms(1);
        doc.customer.name = "Jo Bloggs".to_string();
        doc.customer.phone = "07700 900123".to_string();
        doc.customer.email = "jo@example.com".to_string();
        doc.rooms[0].add_floor_area(4.0, 3.0);
        doc.rooms[0].enable(RoomOption::TankingFloor);
        doc
    }

    async fn db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[test]
    fn test_message_has_sign_off() {
        let config = AppConfig {
            trader_name: Some("Dave's Tiling".to_string()),
            ..AppConfig::default()
        };
        let text = render_quote(&job(), QuoteFormat::Message, &config, today()).unwrap();
        assert!(text.starts_with("TILING QUOTE — 19/10/2026"));
        assert!(text.contains("Customer: Jo Bloggs"));
        assert!(text.ends_with("\n\nDave's Tiling"));
    }

    #[test]
    fn test_json_output_parses() {
        let text = render_quote(&job(), QuoteFormat::Json, &AppConfig::default(), today()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["floorArea"], 12.0);
    }

    #[test]
    fn test_share_links() {
        let config = AppConfig::default();

        let wa = share_link(&job(), ShareChannel::Whatsapp, &config, today()).unwrap();
        assert!(wa.starts_with("https://wa.me/+447700900123?text=TILING%20QUOTE"));

        let mail = share_link(&job(), ShareChannel::Email, &config, today()).unwrap();
        assert!(mail.starts_with("mailto:jo@example.com?subject=Tiling%20Quote%20for%20Jo%20Bloggs&body="));
    }

    #[test]
    fn test_share_needs_measurements() {
        let err = share_link(
            &QuoteDocument::with_rooms(1),
            ShareChannel::Whatsapp,
            &AppConfig::default(),
            today(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::NothingToShare));
    }

    #[test]
    fn test_voice() {
        assert_eq!(voice("three point five metres", true).unwrap(), "3.5");
        assert_eq!(voice("  Back bedroom ", false).unwrap(), "Back bedroom");
        assert!(matches!(voice("blue", true), Err(CliError::Unrecognised(_))));
    }

    #[test]
    fn test_job_file_round_trip() {
        let path = std::env::temp_dir().join(format!("tilequote-job-{}.json", std::process::id()));
        let doc = job();

        write_document(&path, &doc).unwrap();
        let read = read_document(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read, doc);
        assert!(matches!(read_document(&path), Err(CliError::Io { .. })));
    }

    #[tokio::test]
    async fn test_save_list_show_delete() {
        let db = db().await;

        let msg = save_quote(&db, &job(), now()).await.unwrap();
        let id = now().timestamp_millis();
        assert!(msg.starts_with(&format!("Saved quote {id} for Jo Bloggs")));

        let list = list_quotes(&db).await.unwrap();
        assert!(list.contains("19/10/2026 16:45"));
        assert!(list.contains("1 room"));

        let shown = show_quote(&db, id, QuoteFormat::Message, &AppConfig::default())
            .await
            .unwrap();
        assert!(shown.starts_with("Quote for Jo Bloggs saved 19/10/2026 16:45"));
        assert!(shown.contains("TILING QUOTE — 19/10/2026"));

        assert_eq!(load_quote(&db, id).await.unwrap(), job());

        delete_quote(&db, id).await.unwrap();
        assert_eq!(list_quotes(&db).await.unwrap(), "No saved quotes");
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_document() {
        let db = db().await;
        let mut doc = job();
        doc.rooms[0].name = "   ".to_string();

        let err = save_quote(&db, &doc, now()).await.unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[tokio::test]
    async fn test_presets_apply_to_document() {
        let db = db().await;
        let mut source = job();
        source.rates.labour_mode = LabourMode::DayRate;
        source.rates.day_rate = Money::new(280.0);

        save_preset(&db, "Trade", &source, now()).await.unwrap();
        assert!(list_presets(&db).await.unwrap().starts_with("Trade"));

        let mut target = QuoteDocument::with_rooms(2);
        apply_preset(&db, "Trade", &mut target).await.unwrap();
        assert_eq!(target.rates, source.rates);

        delete_preset(&db, "Trade").await.unwrap();
        assert!(apply_preset(&db, "Trade", &mut target).await.is_err());
    }

    #[tokio::test]
    async fn test_workspace_store_and_load() {
        let db = db().await;
        assert!(matches!(load_workspace(&db).await, Err(CliError::NoWorkspace)));

        store_workspace(&db, &job(), now()).await.unwrap();
        assert_eq!(load_workspace(&db).await.unwrap(), job());
    }
}
