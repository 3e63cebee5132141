//! # Quote Document
//!
//! The caller-owned working state: customer, rooms, rates and grout spec.
//!
//! ## Lifecycle
//! ```text
//! ┌──────────────┐  edit   ┌──────────────┐  quote()  ┌──────────────┐
//! │ QuoteDocument│ ──────► │ QuoteDocument│ ────────► │ QuoteResult  │
//! │  (mutable)   │         │  (mutable)   │           │ (immutable)  │
//! └──────┬───────┘         └──────────────┘           └──────────────┘
//!        │ SavedQuote::new(doc.clone(), now, max_id)
//!        ▼
//! ┌──────────────┐  recompute()  ┌──────────────┐
//! │  SavedQuote  │ ────────────► │ QuoteResult  │
//! │   (frozen)   │               │ (identical)  │
//! └──────────────┘               └──────────────┘
//! ```
//!
//! The engine never holds a document. Each `quote()` call prices the
//! document as it is right now.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::area::{self, Areas};
use crate::error::{CoreError, CoreResult};
use crate::quote::{compute_quote, QuoteResult};
use crate::types::{CustomerInfo, GroutSpec, RateSheet, RoomSpec};

// =============================================================================
// Quote Document
// =============================================================================

/// Everything needed to price a job.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteDocument {
    pub customer: CustomerInfo,
    pub rooms: Vec<RoomSpec>,
    pub rates: RateSheet,
    #[serde(rename = "groutSpec")]
    pub grout: GroutSpec,
}

impl QuoteDocument {
    /// A document with `count` default rooms named "Room 1", "Room 2"...
    pub fn with_rooms(count: usize) -> Self {
        let mut doc = QuoteDocument::default();
        for _ in 0..count {
            doc.add_room();
        }
        doc
    }

    /// Appends a room with default settings, named after its position.
    pub fn add_room(&mut self) -> &mut RoomSpec {
        let name = format!("Room {}", self.rooms.len() + 1);
        self.rooms.push(RoomSpec::new(name));
        let last = self.rooms.len() - 1;
        &mut self.rooms[last]
    }

    /// Removes and returns a room. Later rooms shift down one index.
    pub fn remove_room(&mut self, index: usize) -> CoreResult<RoomSpec> {
        if index >= self.rooms.len() {
            return Err(CoreError::RoomIndexOutOfRange {
                index,
                len: self.rooms.len(),
            });
        }
        Ok(self.rooms.remove(index))
    }

    pub fn room_mut(&mut self, index: usize) -> CoreResult<&mut RoomSpec> {
        let len = self.rooms.len();
        self.rooms
            .get_mut(index)
            .ok_or(CoreError::RoomIndexOutOfRange { index, len })
    }

    /// Replaces the rate sheet, e.g. from a saved preset.
    pub fn apply_rates(&mut self, rates: RateSheet) {
        self.rates = rates;
    }

    pub fn areas(&self) -> Areas {
        area::compute_areas(&self.rooms)
    }

    /// Prices the document as it stands.
    pub fn quote(&self) -> QuoteResult {
        compute_quote(&self.rooms, &self.rates, &self.grout)
    }

    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Saved Quote
// =============================================================================

/// A frozen copy of a document, keyed by its creation time in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuote {
    #[ts(type = "number")]
    pub id: i64,
    #[ts(as = "String")]
    pub saved_at: DateTime<Utc>,
    #[serde(flatten)]
    pub document: QuoteDocument,
}

/// Next saved-quote id: the timestamp, bumped past any existing id so keys
/// stay unique and increasing.
pub fn next_quote_id(now_ms: i64, max_existing: Option<i64>) -> i64 {
    match max_existing {
        Some(max) if max >= now_ms => max + 1,
        _ => now_ms,
    }
}

impl SavedQuote {
    /// Snapshots `document` at `saved_at`.
    pub fn new(document: QuoteDocument, saved_at: DateTime<Utc>, max_existing: Option<i64>) -> Self {
        SavedQuote {
            id: next_quote_id(saved_at.timestamp_millis(), max_existing),
            saved_at,
            document,
        }
    }

    /// `dd/mm/yyyy HH:MM`, as shown in the saved quotes list.
    pub fn saved_at_label(&self) -> String {
        self.saved_at.format("%d/%m/%Y %H:%M").to_string()
    }

    /// Customer name, or "this job" when none was entered.
    pub fn title(&self) -> &str {
        self.document.customer.name().unwrap_or("this job")
    }

    /// Prices the frozen snapshot. Same inputs, same result.
    pub fn recompute(&self) -> QuoteResult {
        self.document.quote()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_add_room_names_by_position() {
        let mut doc = QuoteDocument::with_rooms(2);
        doc.add_room().add_floor_area(2.0, 2.0);
        let names: Vec<_> = doc.rooms.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Room 1", "Room 2", "Room 3"]);
        assert_eq!(doc.areas().floor_area, 4.0);
    }

    #[test]
    fn test_remove_room() {
        let mut doc = QuoteDocument::with_rooms(3);
        let removed = doc.remove_room(1).unwrap();
        assert_eq!(removed.name, "Room 2");
        assert_eq!(doc.rooms[1].name, "Room 3");

        let err = doc.remove_room(2).unwrap_err();
        assert!(matches!(
            err,
            CoreError::RoomIndexOutOfRange { index: 2, len: 2 }
        ));
        assert!(doc.room_mut(5).is_err());
    }

    #[test]
    fn test_document_json_uses_grout_spec_key() {
        let doc = QuoteDocument::with_rooms(1);
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"groutSpec\""));
        assert_eq!(QuoteDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn test_missing_sections_take_defaults() {
        let doc = QuoteDocument::from_json(r#"{"customer":{"name":"Jo"}}"#).unwrap();
        assert_eq!(doc.customer.name(), Some("Jo"));
        assert_eq!(doc.rates, RateSheet::default());
        assert_eq!(doc.grout, GroutSpec::default());
        assert!(doc.rooms.is_empty());
    }

    #[test]
    fn test_bad_json_is_serialization_error() {
        assert!(matches!(
            QuoteDocument::from_json("not json"),
            Err(CoreError::Serialization(_))
        ));
    }

    #[test]
    fn test_next_quote_id() {
        assert_eq!(next_quote_id(1_000, None), 1_000);
        assert_eq!(next_quote_id(1_000, Some(999)), 1_000);
        assert_eq!(next_quote_id(1_000, Some(1_000)), 1_001);
        assert_eq!(next_quote_id(1_000, Some(5_000)), 5_001);
    }

    #[test]
    fn test_saved_quote_snapshot() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 14, 5, 0).unwrap();
        let mut doc = QuoteDocument::with_rooms(1);
        doc.rooms[0].add_floor_area(3.0, 3.0);

        let saved = SavedQuote::new(doc.clone(), at, None);
        assert_eq!(saved.id, at.timestamp_millis());
        assert_eq!(saved.saved_at_label(), "19/10/2026 14:05");
        assert_eq!(saved.title(), "this job");
        assert_eq!(saved.recompute(), doc.quote());

        // Later edits to the working document do not touch the snapshot.
        doc.rooms[0].add_floor_area(1.0, 1.0);
        assert_ne!(saved.recompute(), doc.quote());
    }

    #[test]
    fn test_saved_quote_json_is_flat() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 9, 30, 0).unwrap();
        let saved = SavedQuote::new(QuoteDocument::with_rooms(1), at, None);
        let value = serde_json::to_value(&saved).unwrap();
        assert!(value.get("rooms").is_some());
        assert!(value.get("groutSpec").is_some());
        assert!(value.get("savedAt").is_some());
        assert!(value.get("document").is_none());
    }
}
