//! # Cost Aggregator
//!
//! Turns rooms, a rate sheet and a grout spec into a [`QuoteResult`].
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rooms ──► compute_areas ──► base labour (m² or day rate)               │
//! │    │                                                                    │
//! │    └──► per room: room_areas ──► option_cost × enabled options          │
//! │                        │            ├── material lines ──┐              │
//! │                        │            └── install labour   │              │
//! │                        └──► grout kg (own tile sizing)   │              │
//! │                                                          ▼              │
//! │  adhesive + grout (whole job) ───────────────────► materials_total      │
//! │                                                                         │
//! │  sub_total        = base labour + install labour + materials            │
//! │  margin           = 20% × sub_total                                     │
//! │  total_with_margin = sub_total + margin                                 │
//! │  vat              = vat_rate × total_with_margin   (if enabled)         │
//! │  grand_total      = total_with_margin + vat                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Margin is applied BEFORE VAT, and VAT is charged on the margin-inclusive
//! total. Base labour uses the job totals; install labour is summed room by
//! room. Day-rate mode ignores area for base labour but still adds the
//! (area-based) install labour.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

use crate::area::{self, Areas};
use crate::materials::{self, LabourItem, LabourLine, MaterialItem, MaterialLine, RoomContext};
use crate::money::{Money, Percent};
use crate::types::{GroutSpec, LabourMode, OptionKind, RateSheet, RoomOption, RoomSpec};
use crate::MARGIN_PERCENT;

// =============================================================================
// Result Types
// =============================================================================

/// Per-room figures shown alongside the job totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RoomBreakdown {
    pub name: String,
    pub floor_area: f64,
    pub wall_area: f64,
    /// Grout kg/m² for this room's tile sizing.
    pub grout_kg_per_m2: f64,
    /// Auto-calculated clips/m²; 0 when the tile is too small or unknown.
    pub clips_per_m2: f64,
    /// Clips are enabled but could not be auto-calculated.
    pub clips_need_manual_quantity: bool,
    /// `wattsPerM2 × floor area`, when underfloor heating is enabled.
    pub ufh_total_watts: Option<f64>,
}

/// Subtotal, margin, VAT and grand total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub sub_total: Money,
    pub margin: Percent,
    pub margin_amount: Money,
    pub total_with_margin: Money,
    /// VAT rate charged; `None` when VAT is off.
    pub vat: Option<Percent>,
    pub vat_amount: Money,
    pub grand_total: Money,
}

impl QuoteTotals {
    /// Applies margin, then VAT on the margin-inclusive amount.
    ///
    /// ## Example
    /// ```rust
    /// use tilequote_core::money::{Money, Percent};
    /// use tilequote_core::quote::QuoteTotals;
    ///
    /// let totals = QuoteTotals::from_sub_total(
    ///     Money::new(1000.0),
    ///     Percent::new(20.0),
    ///     Some(Percent::new(20.0)),
    /// );
    /// assert_eq!(totals.margin_amount, Money::new(200.0));
    /// assert_eq!(totals.total_with_margin, Money::new(1200.0));
    /// assert_eq!(totals.vat_amount, Money::new(240.0));
    /// assert_eq!(totals.grand_total, Money::new(1440.0));
    /// ```
    pub fn from_sub_total(sub_total: Money, margin: Percent, vat: Option<Percent>) -> Self {
        let margin_amount = margin.of(sub_total);
        let total_with_margin = sub_total + margin_amount;
        let vat_amount = vat.map(|rate| rate.of(total_with_margin)).unwrap_or_default();
        QuoteTotals {
            sub_total,
            margin,
            margin_amount,
            total_with_margin,
            vat,
            vat_amount,
            grand_total: total_with_margin + vat_amount,
        }
    }
}

/// The fully itemised quote. Recomputed from scratch on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResult {
    pub floor_area: f64,
    pub wall_area: f64,
    pub rooms: Vec<RoomBreakdown>,

    /// Base tiling labour (area rates or day rate).
    pub labour_cost: Money,
    /// Installation labour for room options.
    pub install_labour: Vec<LabourLine>,
    pub install_labour_total: Money,
    pub total_labour_cost: Money,

    /// Material lines in [`MaterialItem`] order. Empty lines are omitted.
    pub materials: Vec<MaterialLine>,
    pub materials_total: Money,

    pub totals: QuoteTotals,
}

impl QuoteResult {
    /// At least one room with some area to tile.
    pub fn has_calculations(&self) -> bool {
        !self.rooms.is_empty() && (self.floor_area > 0.0 || self.wall_area > 0.0)
    }

    pub fn material(&self, item: MaterialItem) -> Option<&MaterialLine> {
        self.materials.iter().find(|l| l.item == item)
    }

    pub fn labour(&self, item: LabourItem) -> Money {
        self.install_labour
            .iter()
            .filter(|l| l.item == item)
            .map(|l| l.cost)
            .sum()
    }

    /// The customer-facing materials figure: materials with the margin folded in.
    pub fn materials_with_margin(&self) -> Money {
        self.materials_total + self.totals.margin_amount
    }

    pub fn grand_total(&self) -> Money {
        self.totals.grand_total
    }
}

// =============================================================================
// Computation
// =============================================================================

/// Base labour from job totals.
pub fn base_labour(areas: &Areas, rates: &RateSheet) -> Money {
    match rates.labour_mode {
        LabourMode::DayRate => rates.day_rate.per(rates.days_estimate),
        LabourMode::PerSquareMetre => {
            rates.floor_rate.per(areas.floor_area) + rates.wall_rate.per(areas.wall_area)
        }
    }
}

#[derive(Default)]
struct Accumulator {
    materials: BTreeMap<MaterialItem, MaterialLine>,
    labour: BTreeMap<LabourItem, Money>,
    grout_kg: f64,
    ufh_area: f64,
}

impl Accumulator {
    fn add_material(&mut self, line: MaterialLine) {
        self.materials
            .entry(line.item)
            .and_modify(|existing| existing.absorb(&line))
            .or_insert(line);
    }

    fn add_labour(&mut self, line: LabourLine) {
        *self.labour.entry(line.item).or_default() += line.cost;
    }
}

fn price_room(
    room: &RoomSpec,
    rates: &RateSheet,
    grout: &GroutSpec,
    acc: &mut Accumulator,
) -> RoomBreakdown {
    let areas = area::room_areas(room);
    let ctx = RoomContext::new(room, areas, grout);

    for option in &room.options {
        let cost = materials::option_cost(option, &ctx, rates);
        cost.materials.into_iter().for_each(|l| acc.add_material(l));
        cost.labour.into_iter().for_each(|l| acc.add_labour(l));
    }

    let grout_kg_per_m2 = materials::room_grout_kg_per_m2(room, grout);
    acc.grout_kg += materials::room_grout_kg(&areas, grout_kg_per_m2, grout);

    let ufh_watts = match room.option(OptionKind::UnderfloorHeating) {
        Some(RoomOption::UnderfloorHeating { watts_per_m2 }) => {
            acc.ufh_area += areas.floor_area;
            Some(*watts_per_m2 as f64 * areas.floor_area)
        }
        _ => None,
    };

    RoomBreakdown {
        name: room.name.clone(),
        floor_area: areas.floor_area,
        wall_area: areas.wall_area,
        grout_kg_per_m2,
        clips_per_m2: ctx.clips_per_m2,
        clips_need_manual_quantity: room.has(OptionKind::LevellingClips)
            && ctx.clips_per_m2 <= 0.0,
        ufh_total_watts: ufh_watts,
    }
}

/// Computes the full quote.
///
/// Pure and total: any input produces a result, nothing is cached.
///
/// ## Example
/// ```rust
/// use tilequote_core::quote::compute_quote;
/// use tilequote_core::types::{GroutSpec, RateSheet, RoomSpec};
///
/// let mut room = RoomSpec::new("Kitchen");
/// room.add_floor_area(4.0, 3.0);
/// room.tile_size_preset = Some("600×600".to_string());
///
/// let result = compute_quote(&[room], &RateSheet::default(), &GroutSpec::default());
/// assert_eq!(result.labour_cost.to_string(), "£540.00");
/// ```
pub fn compute_quote(rooms: &[RoomSpec], rates: &RateSheet, grout: &GroutSpec) -> QuoteResult {
    let areas = area::compute_areas(rooms);
    let labour_cost = base_labour(&areas, rates);

    let mut acc = Accumulator::default();
    let breakdown: Vec<RoomBreakdown> = rooms
        .iter()
        .map(|room| price_room(room, rates, grout, &mut acc))
        .collect();

    acc.add_material(materials::adhesive(areas.total(), acc.ufh_area, rates));
    acc.add_material(materials::grout(acc.grout_kg, rates));

    let install_labour: Vec<LabourLine> = acc
        .labour
        .into_iter()
        .map(|(item, cost)| LabourLine { item, cost })
        .collect();
    let install_labour_total: Money = install_labour.iter().map(|l| l.cost).sum();
    let total_labour_cost = labour_cost + install_labour_total;

    let materials: Vec<MaterialLine> = acc
        .materials
        .into_values()
        .filter(|l| l.quantity > 0.0 || !l.cost.is_zero())
        .collect();
    let materials_total: Money = materials.iter().map(|l| l.cost).sum();

    let totals = QuoteTotals::from_sub_total(
        total_labour_cost + materials_total,
        Percent::new(MARGIN_PERCENT),
        rates.vat(),
    );

    QuoteResult {
        floor_area: areas.floor_area,
        wall_area: areas.wall_area,
        rooms: breakdown,
        labour_cost,
        install_labour,
        install_labour_total,
        total_labour_cost,
        materials,
        materials_total,
        totals,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
