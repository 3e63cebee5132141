//! # tilequote-core: Pure Quote Engine for TileQuote
//!
//! This crate is the **heart** of TileQuote. It turns room measurements, a
//! rate sheet and a grout spec into an itemised tiling quote, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        TileQuote Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/cli (`tilequote`)                       │   │
//! │  │    quote ──► share ──► save / presets / workspace               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ tilequote-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐  ┌─────────┐  ┌───────────┐  ┌─────────┐         │   │
//! │  │   │ catalog │─►│  area   │─►│ materials │─►│  quote  │         │   │
//! │  │   │  sizes  │  │ floor/  │  │ packs and │  │ margin  │         │   │
//! │  │   │         │  │  wall   │  │   costs   │  │  + VAT  │         │   │
//! │  │   └─────────┘  └─────────┘  └───────────┘  └────┬────┘         │   │
//! │  │                                                 ▼              │   │
//! │  │             document · message · share · voice · validation    │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 tilequote-db (Database Layer)                   │   │
//! │  │          presets, saved quotes, working document                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Rooms, options, rate sheet, grout spec, customer
//! - [`catalog`] - Named tile sizes
//! - [`area`] - Floor and wall area aggregation
//! - [`materials`] - Material quantity formulas
//! - [`quote`] - Labour, materials, margin and VAT
//! - [`message`] - Plain-text quote rendering
//! - [`document`] - The editable job document and saved snapshots
//! - [`share`] - Messaging and email deep links
//! - [`voice`] - Spoken number parsing
//! - [`validation`] - Pre-save checks
//! - [`money`] - Money and percentage types
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same quote, every time
//! 2. **Total**: the calculator accepts any input; junk numbers are zero
//! 3. **Round Up**: every pack, bag, sheet or tub count is a ceiling
//! 4. **Margin Before VAT**: VAT is charged on the margin-inclusive total
//!
//! ## Example Usage
//!
//! ```rust
//! use tilequote_core::{compute_quote, GroutSpec, RateSheet, RoomOption, RoomSpec};
//!
//! let mut bathroom = RoomSpec::new("Bathroom").with(RoomOption::TankingFloor);
//! bathroom.add_floor_area(2.0, 2.0);
//! bathroom.tile_size_preset = Some("300×300".to_string());
//!
//! let result = compute_quote(&[bathroom], &RateSheet::default(), &GroutSpec::default());
//! assert_eq!(result.floor_area, 4.0);
//! assert!(result.grand_total() > result.totals.sub_total);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod area;
pub mod catalog;
pub mod document;
pub mod error;
pub mod lenient;
pub mod materials;
pub mod message;
pub mod money;
pub mod quote;
pub mod share;
pub mod types;
pub mod validation;
pub mod voice;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use area::{compute_areas, Areas};
pub use document::{QuoteDocument, SavedQuote};
pub use error::{CoreError, CoreResult, ValidationError};
pub use message::{format_quote_message, format_trader_breakdown};
pub use money::{Money, Percent};
pub use quote::{compute_quote, QuoteResult, QuoteTotals};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Standard wall height for new walls and rooms, in metres.
pub const DEFAULT_WALL_HEIGHT_M: f64 = 2.4;

/// Half-height wall (splashback, dado), in metres.
pub const HALF_WALL_HEIGHT_M: f64 = 1.2;

/// Contractor margin on the subtotal.
///
/// ## Business Reason
/// Fixed for every quote; not part of the rate sheet.
pub const MARGIN_PERCENT: f64 = 20.0;

/// Mat output a new underfloor heating option starts with.
pub const DEFAULT_UFH_WATTS_PER_M2: u32 = 150;

/// Mat outputs on sale, in W/m².
pub const UFH_WATT_OPTIONS: [u32; 3] = [100, 150, 200];

/// Longest room or preset name accepted.
pub const MAX_NAME_LEN: usize = 50;
