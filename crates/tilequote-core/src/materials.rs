//! # Material Quantity Calculator
//!
//! Converts areas into purchasable units and their costs.
//!
//! ## Formula Table
//! ```text
//! ┌──────────────────────┬───────────────────────────┬─────────────────────┐
//! │ Material             │ Quantity                  │ Packs (ceil)        │
//! ├──────────────────────┼───────────────────────────┼─────────────────────┤
//! │ Adhesive             │ floor + wall (m²)         │ ÷ coverage, UFH ÷ 3 │
//! │ Grout                │ Σ area × kg/m² × waste    │ ÷ 2.5 kg            │
//! │ Cement board         │ floor (m²)                │ ÷ 0.72 m² sheet     │
//! │   + adhesive         │ floor × 3 kg              │ ÷ 20 kg             │
//! │ Anti-crack membrane  │ floor (m²)                │ (priced per m²)     │
//! │   + adhesive         │ floor × 3 kg              │ ÷ 20 kg             │
//! │ Levelling compound   │ floor (m²)                │ ÷ 15/depth m²       │
//! │ Levelling clips      │ area × clips/m²           │ ÷ 100               │
//! │ Tanking              │ wall or floor (m²)        │ ÷ 4 m² tub          │
//! │ Sealer               │ floor + wall (m²)         │ (priced per m²)     │
//! │ UFH mat + thermostat │ floor (m²), 1 per room    │ (priced per m²)     │
//! │ Trim                 │ length (m)                │ ÷ 2.5 m             │
//! └──────────────────────┴───────────────────────────┴─────────────────────┘
//! ```
//!
//! Room options are priced one room at a time by [`option_cost`]; adhesive
//! and grout are priced once for the whole job by [`adhesive`] and
//! [`grout`]. Every pack count rounds up: half a bag is not for sale.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::area::Areas;
use crate::catalog;
use crate::money::Money;
use crate::types::{GroutSpec, LevellingDepth, RateSheet, RoomOption, RoomSpec, TileType};

// =============================================================================
// Constants
// =============================================================================

/// Adhesive coverage used when the rate sheet gives none (m² per 20 kg bag).
pub const DEFAULT_ADHESIVE_COVERAGE_M2: f64 = 4.0;
/// Flexible adhesive over heating mats covers less (m² per bag).
pub const UFH_ADHESIVE_COVERAGE_M2: f64 = 3.0;
pub const ADHESIVE_BAG_KG: f64 = 20.0;
/// Board and membrane both bed on 3 kg of adhesive per m².
pub const BEDDING_ADHESIVE_KG_PER_M2: f64 = 3.0;

pub const GROUT_DENSITY: f64 = 1.7;
pub const GROUT_BAG_KG: f64 = 2.5;

pub const CEMENT_BOARD_SHEET_M2: f64 = 0.72;
pub const TANKING_TUB_COVERAGE_M2: f64 = 4.0;
pub const TRIM_LENGTH_M: f64 = 2.5;
pub const CLIPS_PER_PACK: f64 = 100.0;

/// Tiles smaller than this in either dimension are not clipped.
pub const MIN_CLIP_TILE_MM: f64 = 300.0;

// =============================================================================
// Result Lines
// =============================================================================

/// A purchasable material on the quote.
///
/// Ordered the way lines are listed on a breakdown.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MaterialItem {
    Adhesive,
    Grout,
    CementBoard,
    CementBoardAdhesive,
    AntiCrackMembrane,
    AntiCrackAdhesive,
    LevellingCompound,
    LevellingClips,
    TankingWalls,
    TankingFloor,
    Sealer,
    Trim,
    UfhMat,
    UfhThermostat,
}

impl MaterialItem {
    pub const fn label(self) -> &'static str {
        match self {
            MaterialItem::Adhesive => "Tile adhesive",
            MaterialItem::Grout => "Grout",
            MaterialItem::CementBoard => "Cement board",
            MaterialItem::CementBoardAdhesive => "Cement board adhesive",
            MaterialItem::AntiCrackMembrane => "Anti-crack membrane",
            MaterialItem::AntiCrackAdhesive => "Anti-crack adhesive",
            MaterialItem::LevellingCompound => "Levelling compound",
            MaterialItem::LevellingClips => "Levelling clips",
            MaterialItem::TankingWalls => "Tanking (walls)",
            MaterialItem::TankingFloor => "Tanking (floor)",
            MaterialItem::Sealer => "Stone sealer",
            MaterialItem::Trim => "Trim",
            MaterialItem::UfhMat => "UFH mat",
            MaterialItem::UfhThermostat => "UFH thermostat",
        }
    }

    /// Unit of [`MaterialLine::quantity`].
    pub const fn measure_unit(self) -> &'static str {
        match self {
            MaterialItem::Grout
            | MaterialItem::CementBoardAdhesive
            | MaterialItem::AntiCrackAdhesive => "kg",
            MaterialItem::LevellingClips => "clips",
            MaterialItem::Trim => "m",
            MaterialItem::UfhThermostat => "thermostats",
            _ => "m²",
        }
    }

    /// Unit of [`MaterialLine::packs`], for items bought in packs.
    pub const fn pack_unit(self) -> Option<&'static str> {
        match self {
            MaterialItem::Adhesive
            | MaterialItem::Grout
            | MaterialItem::CementBoardAdhesive
            | MaterialItem::AntiCrackAdhesive
            | MaterialItem::LevellingCompound => Some("bags"),
            MaterialItem::CementBoard => Some("sheets"),
            MaterialItem::LevellingClips => Some("packs"),
            MaterialItem::TankingWalls | MaterialItem::TankingFloor => Some("tubs"),
            MaterialItem::Trim => Some("lengths"),
            MaterialItem::AntiCrackMembrane
            | MaterialItem::Sealer
            | MaterialItem::UfhMat
            | MaterialItem::UfhThermostat => None,
        }
    }
}

/// One material on the quote: how much, how many packs, what it costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MaterialLine {
    pub item: MaterialItem,
    /// Measured amount in [`MaterialItem::measure_unit`].
    pub quantity: f64,
    /// Whole packs to buy, for items sold in packs.
    #[ts(type = "number | null")]
    pub packs: Option<u64>,
    pub cost: Money,
}

impl MaterialLine {
    fn packed(item: MaterialItem, quantity: f64, packs: u64, unit_price: Money) -> Self {
        MaterialLine {
            item,
            quantity,
            packs: Some(packs),
            cost: unit_price.times(packs),
        }
    }

    fn measured(item: MaterialItem, quantity: f64, rate: Money) -> Self {
        MaterialLine {
            item,
            quantity,
            packs: None,
            cost: rate.per(quantity),
        }
    }

    /// Adds another room's line for the same item into this one.
    ///
    /// Packs are summed, not re-rounded: each room buys its own.
    pub fn absorb(&mut self, other: &MaterialLine) {
        debug_assert_eq!(self.item, other.item);
        self.quantity += other.quantity;
        self.packs = match (self.packs, other.packs) {
            (Some(a), Some(b)) => Some(a + b),
            (a, b) => a.or(b),
        };
        self.cost += other.cost;
    }
}

/// Installation labour on top of the base tiling rate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum LabourItem {
    CementBoard,
    AntiCrack,
    /// Walls and floor share one tanking total.
    Tanking,
    Sealer,
    LevellingCompound,
    Ufh,
}

impl LabourItem {
    pub const fn label(self) -> &'static str {
        match self {
            LabourItem::CementBoard => "Cement board fitting",
            LabourItem::AntiCrack => "Anti-crack membrane fitting",
            LabourItem::Tanking => "Tanking",
            LabourItem::Sealer => "Sealing",
            LabourItem::LevellingCompound => "Levelling",
            LabourItem::Ufh => "UFH installation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LabourLine {
    pub item: LabourItem,
    pub cost: Money,
}

/// What one enabled room option adds to the quote.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OptionCost {
    pub materials: Vec<MaterialLine>,
    pub labour: Vec<LabourLine>,
}

impl OptionCost {
    fn material(mut self, line: MaterialLine) -> Self {
        self.materials.push(line);
        self
    }

    fn labour(mut self, item: LabourItem, cost: Money) -> Self {
        self.labour.push(LabourLine { item, cost });
        self
    }
}

// =============================================================================
// Unit Helpers
// =============================================================================

/// Whole units needed to cover `quantity` at `per_unit` each (ceiling).
///
/// Zero, negative and non-finite input needs no units.
///
/// ## Example
/// ```rust
/// use tilequote_core::materials::units_needed;
///
/// assert_eq!(units_needed(12.0, 4.0), 3);
/// assert_eq!(units_needed(12.1, 4.0), 4);
/// assert_eq!(units_needed(0.0, 4.0), 0);
/// ```
pub fn units_needed(quantity: f64, per_unit: f64) -> u64 {
    if !(quantity > 0.0) || !(per_unit > 0.0) {
        return 0;
    }
    let units = (quantity / per_unit).ceil();
    if units.is_finite() {
        units as u64
    } else {
        0
    }
}

// =============================================================================
// Tile Sizing
// =============================================================================

/// Grout consumption in kg/m² for one tile size.
///
/// `((L + W) / (L × W)) × J × T × 1.7`, every input floored at 1 mm.
pub fn grout_kg_per_m2(length_mm: f64, width_mm: f64, joint_mm: f64, thickness_mm: f64) -> f64 {
    let l = floor_at_one(length_mm);
    let w = floor_at_one(width_mm);
    let j = floor_at_one(joint_mm);
    let t = floor_at_one(thickness_mm);
    ((l + w) / (l * w)) * j * t * GROUT_DENSITY
}

/// Levelling clips per m² for one tile size.
///
/// `ceil(3 / (L × W in m²)) × 1.1`, or 0 when either side is under 300 mm.
pub fn clips_per_m2(length_mm: f64, width_mm: f64) -> f64 {
    if !(length_mm >= MIN_CLIP_TILE_MM) || !(width_mm >= MIN_CLIP_TILE_MM) {
        return 0.0;
    }
    let tile_m2 = (length_mm / 1000.0) * (width_mm / 1000.0);
    (3.0 / tile_m2).ceil() * 1.1
}

fn floor_at_one(value: f64) -> f64 {
    if value >= 1.0 {
        value
    } else {
        1.0
    }
}

/// Dimensions for a catalog label, or the global tile on a miss.
fn preset_dims(label: Option<&str>, grout: &GroutSpec) -> (f64, f64) {
    label
        .and_then(catalog::find)
        .map(|p| (p.length_mm, p.width_mm))
        .unwrap_or((grout.tile_length, grout.tile_width))
}

/// Evaluates a per-tile-size figure for a room, honouring its tile sizing.
///
/// ## Resolution Order
/// 1. Modular pattern with a positive proportion sum: proportion-weighted
///    average over the mix (weights normalised by their own sum)
/// 2. The room's single tile preset
/// 3. The global [`GroutSpec`] tile
///
/// Unknown labels at any step use the global tile.
pub fn resolve_tile_metric<F>(room: &RoomSpec, grout: &GroutSpec, metric: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    if room.use_modular_pattern {
        let total: f64 = room
            .modular_tiles
            .iter()
            .map(|t| t.proportion.max(0.0))
            .sum();
        if total > 0.0 {
            return room
                .modular_tiles
                .iter()
                .map(|t| {
                    let (l, w) = preset_dims(Some(&t.preset), grout);
                    t.proportion.max(0.0) / total * metric(l, w)
                })
                .sum();
        }
    }

    let (l, w) = preset_dims(room.tile_size_preset.as_deref(), grout);
    metric(l, w)
}

/// Grout kg/m² for a room's resolved tile sizing.
pub fn room_grout_kg_per_m2(room: &RoomSpec, grout: &GroutSpec) -> f64 {
    resolve_tile_metric(room, grout, |l, w| {
        grout_kg_per_m2(l, w, grout.joint_width, grout.tile_thickness)
    })
}

/// Clips/m² for a room's resolved tile sizing. 0 means "enter manually".
pub fn room_clips_per_m2(room: &RoomSpec, grout: &GroutSpec) -> f64 {
    resolve_tile_metric(room, grout, clips_per_m2)
}

// =============================================================================
// Whole-Job Materials
// =============================================================================

/// Tile adhesive for the whole job.
///
/// Heated floor area takes flexible adhesive at 3 m²/bag; the rest uses the
/// rate sheet's coverage (4 m²/bag when unset). The two bag counts are
/// rounded separately and added.
pub fn adhesive(tile_area: f64, ufh_area: f64, rates: &RateSheet) -> MaterialLine {
    let coverage = if rates.adhesive_coverage_per_bag > 0.0 {
        rates.adhesive_coverage_per_bag
    } else {
        DEFAULT_ADHESIVE_COVERAGE_M2
    };
    let standard_bags = units_needed((tile_area - ufh_area).max(0.0), coverage);
    let ufh_bags = units_needed(ufh_area, UFH_ADHESIVE_COVERAGE_M2);

    MaterialLine::packed(
        MaterialItem::Adhesive,
        tile_area.max(0.0),
        standard_bags + ufh_bags,
        rates.adhesive_price_per_bag,
    )
}

/// Grout for the whole job from the summed kilograms of every room.
pub fn grout(total_kg: f64, rates: &RateSheet) -> MaterialLine {
    let kg = total_kg.max(0.0);
    MaterialLine::packed(
        MaterialItem::Grout,
        kg,
        units_needed(kg, GROUT_BAG_KG),
        rates.grout_price_per_bag,
    )
}

/// Grout kilograms for one room, waste included.
pub fn room_grout_kg(areas: &Areas, kg_per_m2: f64, grout: &GroutSpec) -> f64 {
    areas.total() * kg_per_m2 * (1.0 + grout.waste_percent / 100.0)
}

// =============================================================================
// Per-Room Options
// =============================================================================

/// What an option calculator knows about its room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomContext {
    pub areas: Areas,
    pub tile_type: TileType,
    /// Resolved clips/m²; 0 when the tile is too small or unknown.
    pub clips_per_m2: f64,
}

impl RoomContext {
    pub fn new(room: &RoomSpec, areas: Areas, grout: &GroutSpec) -> Self {
        RoomContext {
            areas,
            tile_type: room.tile_type,
            clips_per_m2: room_clips_per_m2(room, grout),
        }
    }

    /// The area clips are counted against.
    fn clip_area(&self) -> f64 {
        match self.tile_type {
            TileType::Floor => self.areas.floor_area,
            TileType::Wall => self.areas.wall_area,
        }
    }
}

/// Prices one enabled room option.
///
/// The formula table: each [`RoomOption`] variant maps to exactly one
/// calculator below.
pub fn option_cost(option: &RoomOption, ctx: &RoomContext, rates: &RateSheet) -> OptionCost {
    let floor = ctx.areas.floor_area;
    match option {
        RoomOption::CementBoard => cement_board(floor, rates),
        RoomOption::AntiCrackMembrane => anti_crack(floor, rates),
        RoomOption::LevellingCompound { depth } => levelling_compound(floor, *depth, rates),
        RoomOption::LevellingClips { manual_quantity } => {
            levelling_clips(ctx, *manual_quantity, rates)
        }
        RoomOption::NaturalStoneSealer => sealer(ctx.areas.total(), rates),
        RoomOption::TankingWalls => tanking(MaterialItem::TankingWalls, ctx.areas.wall_area, rates),
        RoomOption::TankingFloor => tanking(MaterialItem::TankingFloor, floor, rates),
        RoomOption::UnderfloorHeating { .. } => underfloor_heating(floor, rates),
        RoomOption::Trim { length_m } => trim(*length_m, rates),
    }
}

fn bedding_adhesive(item: MaterialItem, floor: f64, rates: &RateSheet) -> MaterialLine {
    let kg = floor * BEDDING_ADHESIVE_KG_PER_M2;
    MaterialLine::packed(
        item,
        kg,
        units_needed(kg, ADHESIVE_BAG_KG),
        rates.adhesive_price_per_bag,
    )
}

fn cement_board(floor: f64, rates: &RateSheet) -> OptionCost {
    OptionCost::default()
        .material(MaterialLine::packed(
            MaterialItem::CementBoard,
            floor,
            units_needed(floor, CEMENT_BOARD_SHEET_M2),
            rates.cement_board_price_per_sheet,
        ))
        .material(bedding_adhesive(
            MaterialItem::CementBoardAdhesive,
            floor,
            rates,
        ))
        .labour(
            LabourItem::CementBoard,
            rates.cement_board_labour_per_m2.per(floor),
        )
}

fn anti_crack(floor: f64, rates: &RateSheet) -> OptionCost {
    OptionCost::default()
        .material(MaterialLine::measured(
            MaterialItem::AntiCrackMembrane,
            floor,
            rates.anti_crack_per_m2,
        ))
        .material(bedding_adhesive(
            MaterialItem::AntiCrackAdhesive,
            floor,
            rates,
        ))
        .labour(
            LabourItem::AntiCrack,
            rates.anti_crack_labour_per_m2.per(floor),
        )
}

/// Coverage of one 25 kg bag: 15 m²·mm spread over the pour depth.
pub fn levelling_coverage_m2(depth: LevellingDepth) -> f64 {
    (5.0 * 3.0) / depth.mm()
}

fn levelling_compound(floor: f64, depth: LevellingDepth, rates: &RateSheet) -> OptionCost {
    OptionCost::default()
        .material(MaterialLine::packed(
            MaterialItem::LevellingCompound,
            floor,
            units_needed(floor, levelling_coverage_m2(depth)),
            rates.levelling_compound_price_per_bag,
        ))
        .labour(
            LabourItem::LevellingCompound,
            rates.levelling_compound_labour_per_m2.per(floor),
        )
}

fn levelling_clips(ctx: &RoomContext, manual_quantity: f64, rates: &RateSheet) -> OptionCost {
    let clips = if ctx.clips_per_m2 > 0.0 {
        units_needed(ctx.clip_area() * ctx.clips_per_m2, 1.0) as f64
    } else {
        manual_quantity.max(0.0)
    };
    OptionCost::default().material(MaterialLine::packed(
        MaterialItem::LevellingClips,
        clips,
        units_needed(clips, CLIPS_PER_PACK),
        rates.levelling_clips_price_per100,
    ))
}

fn sealer(area: f64, rates: &RateSheet) -> OptionCost {
    OptionCost::default()
        .material(MaterialLine::measured(
            MaterialItem::Sealer,
            area,
            rates.sealer_per_m2,
        ))
        .labour(LabourItem::Sealer, rates.sealer_labour_per_m2.per(area))
}

fn tanking(item: MaterialItem, area: f64, rates: &RateSheet) -> OptionCost {
    OptionCost::default()
        .material(MaterialLine::packed(
            item,
            area,
            units_needed(area, TANKING_TUB_COVERAGE_M2),
            rates.tanking_per_tub,
        ))
        .labour(LabourItem::Tanking, rates.tanking_labour_per_m2.per(area))
}

fn underfloor_heating(floor: f64, rates: &RateSheet) -> OptionCost {
    OptionCost::default()
        .material(MaterialLine::measured(
            MaterialItem::UfhMat,
            floor,
            rates.ufh_mat_price_per_m2,
        ))
        .material(MaterialLine {
            item: MaterialItem::UfhThermostat,
            quantity: 1.0,
            packs: None,
            cost: rates.ufh_thermostat_price,
        })
        .labour(LabourItem::Ufh, rates.ufh_labour_per_m2.per(floor))
}

fn trim(length_m: f64, rates: &RateSheet) -> OptionCost {
    if !(length_m > 0.0) {
        return OptionCost::default();
    }
    OptionCost::default().material(MaterialLine::packed(
        MaterialItem::Trim,
        length_m,
        units_needed(length_m, TRIM_LENGTH_M),
        rates.trim_price_per_length,
    ))
}

// =============================================================================
// Unit Tests
// =============================================================================
