//! Tile size catalog.
//!
//! A fixed table of the tile sizes a room can pick by label. Lookups fail
//! soft: a saved quote may reference a size that was renamed or retired, and
//! callers fall back to the global [`GroutSpec`](crate::types::GroutSpec)
//! dimensions instead of erroring.

use serde::Serialize;

/// One catalog entry. Dimensions are in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TilePreset {
    pub label: &'static str,
    pub length_mm: f64,
    pub width_mm: f64,
}

const fn preset(label: &'static str, length_mm: f64, width_mm: f64) -> TilePreset {
    TilePreset {
        label,
        length_mm,
        width_mm,
    }
}

/// Every size offered, smallest first.
pub const TILE_PRESETS: [TilePreset; 10] = [
    preset("25×25 Mosaic", 25.0, 25.0),
    preset("48×48 Mosaic", 48.0, 48.0),
    preset("100×100", 100.0, 100.0),
    preset("150×150", 150.0, 150.0),
    preset("200×100", 200.0, 100.0),
    preset("300×300", 300.0, 300.0),
    preset("600×300", 600.0, 300.0),
    preset("600×600", 600.0, 600.0),
    preset("900×600", 900.0, 600.0),
    preset("1200×600", 1200.0, 600.0),
];

/// Finds a preset by its exact label.
pub fn find(label: &str) -> Option<&'static TilePreset> {
    TILE_PRESETS.iter().find(|p| p.label == label)
}

/// All catalog labels, in catalog order.
pub fn labels() -> impl Iterator<Item = &'static str> {
    TILE_PRESETS.iter().map(|p| p.label)
}
