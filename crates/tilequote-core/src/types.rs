//! # Domain Types
//!
//! Core domain types used throughout TileQuote.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    RoomSpec     │   │   RateSheet     │   │   GroutSpec     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  floor_areas[]  │   │  labour_mode    │   │  tile_length    │       │
//! │  │  walls[]        │   │  unit prices    │   │  tile_width     │       │
//! │  │  four-wall calc │   │  labour rates   │   │  thickness      │       │
//! │  │  tile sizing    │   │  vat            │   │  joint, waste   │       │
//! │  │  options[]      │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   RoomOption    │   │  CustomerInfo   │   │   RatePreset    │       │
//! │  │  (tagged enum)  │   │  name, address  │   │  name + rates   │       │
//! │  │  CementBoard    │   │  email, phone   │   └─────────────────┘       │
//! │  │  Tanking...     │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lenient Input
//! Every numeric field a user types goes through [`crate::lenient`], and
//! every struct carries `#[serde(default)]`, so documents written by older
//! front ends (strings for numbers, missing fields) still load.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lenient;
use crate::money::{Money, Percent};
use crate::{DEFAULT_WALL_HEIGHT_M, HALF_WALL_HEIGHT_M};

// =============================================================================
// Tile Type
// =============================================================================

/// Which surface a room is primarily tiling.
///
/// Only matters for levelling clips, which are counted against the floor
/// area of a floor room and the wall area of a wall room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    #[default]
    Floor,
    Wall,
}

// =============================================================================
// Measurements
// =============================================================================

/// One rectangular floor area, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct FloorArea {
    #[serde(deserialize_with = "lenient::number")]
    pub length: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub width: f64,
}

impl FloorArea {
    pub fn new(length: f64, width: f64) -> Self {
        FloorArea { length, width }
    }

    /// `length × width`. Not clamped: both are user-entered lengths.
    #[inline]
    pub fn area(&self) -> f64 {
        self.length * self.width
    }
}

/// One wall, in metres, with a deduction (windows, doors) in m².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct WallSegment {
    #[serde(deserialize_with = "lenient::number")]
    pub length: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub height: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub deduct: f64,
}

impl Default for WallSegment {
    fn default() -> Self {
        WallSegment {
            length: 0.0,
            height: DEFAULT_WALL_HEIGHT_M,
            deduct: 0.0,
        }
    }
}

impl WallSegment {
    pub fn new(length: f64, height: f64, deduct: f64) -> Self {
        WallSegment {
            length,
            height,
            deduct,
        }
    }

    /// `max(0, length × height − deduct)`.
    ///
    /// A deduction larger than the wall clamps this segment to zero; it
    /// never eats into the area of another wall.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.length * self.height - self.deduct).max(0.0)
    }
}

// =============================================================================
// Tile Sizing
// =============================================================================

/// One entry of a modular (mixed size) pattern.
///
/// `proportion` is a relative weight. The engine normalises by the sum of
/// all entries, so `{50, 50}` and `{25, 25}` mean the same mix.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ModularTile {
    /// Catalog label, e.g. `"600×300"`.
    pub preset: String,
    #[serde(deserialize_with = "lenient::number")]
    pub proportion: f64,
}

impl ModularTile {
    pub fn new(preset: impl Into<String>, proportion: f64) -> Self {
        ModularTile {
            preset: preset.into(),
            proportion,
        }
    }
}

/// The 25/50/25 mix a new room starts with.
pub fn default_modular_mix() -> Vec<ModularTile> {
    vec![
        ModularTile::new("600×600", 25.0),
        ModularTile::new("600×300", 50.0),
        ModularTile::new("300×300", 25.0),
    ]
}

// =============================================================================
// Room Options
// =============================================================================

/// Levelling compound pour depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LevellingDepth {
    #[serde(rename = "2mm")]
    TwoMm,
    #[default]
    #[serde(rename = "3mm")]
    ThreeMm,
}

impl LevellingDepth {
    /// Depth in millimetres.
    pub const fn mm(self) -> f64 {
        match self {
            LevellingDepth::TwoMm => 2.0,
            LevellingDepth::ThreeMm => 3.0,
        }
    }
}

/// An optional material or treatment attached to a room.
///
/// Each variant is independent; a room holds any combination. Adding a new
/// material is a new variant plus a calculator in [`crate::materials`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoomOption {
    /// Cement backer board over the floor.
    CementBoard,
    /// Anti-crack (decoupling) membrane over the floor.
    AntiCrackMembrane,
    /// Self-levelling compound poured over the floor.
    LevellingCompound {
        #[serde(default)]
        depth: LevellingDepth,
    },
    /// Tile levelling clips. `manual_quantity` is used when the tile size
    /// is too small (or unknown) to auto-calculate.
    LevellingClips {
        #[serde(
            default,
            rename = "manualQuantity",
            deserialize_with = "lenient::number"
        )]
        manual_quantity: f64,
    },
    /// Natural stone: sealer over floor and walls.
    NaturalStoneSealer,
    /// Tanking membrane on the walls.
    TankingWalls,
    /// Tanking membrane on the floor.
    TankingFloor,
    /// Electric underfloor heating mat.
    UnderfloorHeating {
        #[serde(
            default = "default_ufh_watts",
            rename = "wattsPerM2",
            deserialize_with = "lenient::count"
        )]
        watts_per_m2: u32,
    },
    /// Edge trim, in metres.
    Trim {
        #[serde(default, rename = "lengthM", deserialize_with = "lenient::number")]
        length_m: f64,
    },
}

/// The tag of a [`RoomOption`], without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OptionKind {
    CementBoard,
    AntiCrackMembrane,
    LevellingCompound,
    LevellingClips,
    NaturalStoneSealer,
    TankingWalls,
    TankingFloor,
    UnderfloorHeating,
    Trim,
}

impl OptionKind {
    pub const ALL: [OptionKind; 9] = [
        OptionKind::CementBoard,
        OptionKind::AntiCrackMembrane,
        OptionKind::LevellingCompound,
        OptionKind::LevellingClips,
        OptionKind::NaturalStoneSealer,
        OptionKind::TankingWalls,
        OptionKind::TankingFloor,
        OptionKind::UnderfloorHeating,
        OptionKind::Trim,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            OptionKind::CementBoard => "Cement board",
            OptionKind::AntiCrackMembrane => "Anti-crack membrane",
            OptionKind::LevellingCompound => "Levelling compound",
            OptionKind::LevellingClips => "Levelling clips",
            OptionKind::NaturalStoneSealer => "Natural stone sealer",
            OptionKind::TankingWalls => "Tanking (walls)",
            OptionKind::TankingFloor => "Tanking (floor)",
            OptionKind::UnderfloorHeating => "Underfloor heating",
            OptionKind::Trim => "Trim",
        }
    }
}

impl RoomOption {
    pub const fn kind(&self) -> OptionKind {
        match self {
            RoomOption::CementBoard => OptionKind::CementBoard,
            RoomOption::AntiCrackMembrane => OptionKind::AntiCrackMembrane,
            RoomOption::LevellingCompound { .. } => OptionKind::LevellingCompound,
            RoomOption::LevellingClips { .. } => OptionKind::LevellingClips,
            RoomOption::NaturalStoneSealer => OptionKind::NaturalStoneSealer,
            RoomOption::TankingWalls => OptionKind::TankingWalls,
            RoomOption::TankingFloor => OptionKind::TankingFloor,
            RoomOption::UnderfloorHeating { .. } => OptionKind::UnderfloorHeating,
            RoomOption::Trim { .. } => OptionKind::Trim,
        }
    }

    /// Underfloor heating at the default 150 W/m².
    pub fn underfloor_heating() -> Self {
        RoomOption::UnderfloorHeating {
            watts_per_m2: crate::DEFAULT_UFH_WATTS_PER_M2,
        }
    }

    /// Levelling compound at the default 3 mm depth.
    pub fn levelling_compound() -> Self {
        RoomOption::LevellingCompound {
            depth: LevellingDepth::default(),
        }
    }
}

fn default_ufh_watts() -> u32 {
    crate::DEFAULT_UFH_WATTS_PER_M2
}

fn default_room_height() -> f64 {
    DEFAULT_WALL_HEIGHT_M
}

// =============================================================================
// Room Spec
// =============================================================================

/// A room to be tiled: its measurements, tile sizing and options.
///
/// ## Wall Area Modes
/// - `use_four_wall_calc = false`: the `walls` list is summed
/// - `use_four_wall_calc = true`: perimeter of `room_length × room_width`
///   times `room_height`, minus `four_wall_deduct`; `walls` is ignored
///
/// ## Tile Sizing
/// `use_modular_pattern` with a non-zero mix wins, then `tile_size_preset`,
/// then the document's global [`GroutSpec`] tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomSpec {
    pub name: String,
    pub tile_type: TileType,
    pub floor_areas: Vec<FloorArea>,
    pub walls: Vec<WallSegment>,

    #[serde(deserialize_with = "lenient::flag")]
    pub use_four_wall_calc: bool,
    #[serde(deserialize_with = "lenient::number")]
    pub room_length: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub room_width: f64,
    #[serde(default = "default_room_height", deserialize_with = "lenient::number")]
    pub room_height: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub four_wall_deduct: f64,

    /// Single catalog size; `None` falls back to the global tile.
    #[serde(deserialize_with = "lenient::label")]
    pub tile_size_preset: Option<String>,
    #[serde(deserialize_with = "lenient::flag")]
    pub use_modular_pattern: bool,
    pub modular_tiles: Vec<ModularTile>,

    pub options: Vec<RoomOption>,
}

impl Default for RoomSpec {
    fn default() -> Self {
        RoomSpec::new("Room 1")
    }
}

impl RoomSpec {
    /// A new floor room with the documented defaults: 2.4 m height and the
    /// 25/50/25 modular mix (inactive), no options.
    pub fn new(name: impl Into<String>) -> Self {
        RoomSpec {
            name: name.into(),
            tile_type: TileType::Floor,
            floor_areas: Vec::new(),
            walls: Vec::new(),
            use_four_wall_calc: false,
            room_length: 0.0,
            room_width: 0.0,
            room_height: DEFAULT_WALL_HEIGHT_M,
            four_wall_deduct: 0.0,
            tile_size_preset: None,
            use_modular_pattern: false,
            modular_tiles: default_modular_mix(),
            options: Vec::new(),
        }
    }

    /// Returns the option of the given kind, if enabled.
    pub fn option(&self, kind: OptionKind) -> Option<&RoomOption> {
        self.options.iter().find(|o| o.kind() == kind)
    }

    /// Checks if an option of the given kind is enabled.
    pub fn has(&self, kind: OptionKind) -> bool {
        self.option(kind).is_some()
    }

    /// Enables an option, replacing any existing option of the same kind.
    pub fn enable(&mut self, option: RoomOption) {
        let kind = option.kind();
        match self.options.iter_mut().find(|o| o.kind() == kind) {
            Some(existing) => *existing = option,
            None => self.options.push(option),
        }
    }

    /// Disables an option. Returns the removed option, if it was enabled.
    pub fn disable(&mut self, kind: OptionKind) -> Option<RoomOption> {
        let index = self.options.iter().position(|o| o.kind() == kind)?;
        Some(self.options.remove(index))
    }

    /// Builder-style [`enable`](Self::enable).
    pub fn with(mut self, option: RoomOption) -> Self {
        self.enable(option);
        self
    }

    pub fn add_floor_area(&mut self, length: f64, width: f64) {
        self.floor_areas.push(FloorArea::new(length, width));
    }

    /// Adds a wall at the default 2.4 m height.
    pub fn add_wall(&mut self, length: f64) {
        self.walls.push(WallSegment::new(length, DEFAULT_WALL_HEIGHT_M, 0.0));
    }

    /// Sets a wall to half height (1.2 m). Returns false if there is no such wall.
    pub fn set_half_height(&mut self, wall: usize) -> bool {
        self.set_wall_height(wall, HALF_WALL_HEIGHT_M)
    }

    /// Resets a wall to the default 2.4 m height.
    pub fn reset_wall_height(&mut self, wall: usize) -> bool {
        self.set_wall_height(wall, DEFAULT_WALL_HEIGHT_M)
    }

    fn set_wall_height(&mut self, wall: usize, height: f64) -> bool {
        match self.walls.get_mut(wall) {
            Some(w) => {
                w.height = height;
                true
            }
            None => false,
        }
    }
}

// =============================================================================
// Rate Sheet
// =============================================================================

/// How base labour is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LabourMode {
    /// Separate £/m² rates for floor and wall area.
    #[default]
    #[serde(rename = "m2")]
    PerSquareMetre,
    /// Day rate × estimated days; ignores area.
    #[serde(rename = "day")]
    DayRate,
}

/// Unit prices, labour rates and VAT settings.
///
/// Every field defaults independently, so a partially stored sheet fills in
/// the rest from [`RateSheet::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct RateSheet {
    pub labour_mode: LabourMode,
    #[serde(deserialize_with = "lenient::money")]
    pub floor_rate: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub wall_rate: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub day_rate: Money,
    #[serde(deserialize_with = "lenient::number")]
    pub days_estimate: f64,

    #[serde(deserialize_with = "lenient::money")]
    pub adhesive_price_per_bag: Money,
    /// m² covered by one 20 kg bag.
    #[serde(deserialize_with = "lenient::number")]
    pub adhesive_coverage_per_bag: f64,
    #[serde(deserialize_with = "lenient::money")]
    pub grout_price_per_bag: Money,

    #[serde(deserialize_with = "lenient::money")]
    pub cement_board_price_per_sheet: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub cement_board_labour_per_m2: Money,

    #[serde(deserialize_with = "lenient::money")]
    pub anti_crack_per_m2: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub anti_crack_labour_per_m2: Money,

    #[serde(deserialize_with = "lenient::money")]
    pub levelling_compound_price_per_bag: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub levelling_compound_labour_per_m2: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub levelling_clips_price_per100: Money,

    #[serde(deserialize_with = "lenient::money")]
    pub tanking_per_tub: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub tanking_labour_per_m2: Money,

    #[serde(deserialize_with = "lenient::money")]
    pub sealer_per_m2: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub sealer_labour_per_m2: Money,

    #[serde(deserialize_with = "lenient::money")]
    pub ufh_mat_price_per_m2: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub ufh_thermostat_price: Money,
    #[serde(deserialize_with = "lenient::money")]
    pub ufh_labour_per_m2: Money,

    #[serde(deserialize_with = "lenient::money")]
    pub trim_price_per_length: Money,

    #[serde(deserialize_with = "lenient::flag")]
    pub vat_enabled: bool,
    #[serde(deserialize_with = "lenient::percent")]
    pub vat_rate: Percent,
}

impl Default for RateSheet {
    /// The stock rate sheet a new install starts with.
    fn default() -> Self {
        RateSheet {
            labour_mode: LabourMode::PerSquareMetre,
            floor_rate: Money::new(45.0),
            wall_rate: Money::new(55.0),
            day_rate: Money::new(250.0),
            days_estimate: 1.0,
            adhesive_price_per_bag: Money::new(15.0),
            adhesive_coverage_per_bag: 4.0,
            grout_price_per_bag: Money::new(8.5),
            cement_board_price_per_sheet: Money::new(8.0),
            cement_board_labour_per_m2: Money::new(5.0),
            anti_crack_per_m2: Money::new(8.0),
            anti_crack_labour_per_m2: Money::new(4.0),
            levelling_compound_price_per_bag: Money::new(12.0),
            levelling_compound_labour_per_m2: Money::new(4.0),
            levelling_clips_price_per100: Money::new(18.0),
            tanking_per_tub: Money::new(85.0),
            tanking_labour_per_m2: Money::new(6.0),
            sealer_per_m2: Money::new(6.0),
            sealer_labour_per_m2: Money::new(3.0),
            ufh_mat_price_per_m2: Money::new(35.0),
            ufh_thermostat_price: Money::new(120.0),
            ufh_labour_per_m2: Money::new(8.0),
            trim_price_per_length: Money::new(3.5),
            vat_enabled: false,
            vat_rate: Percent::new(20.0),
        }
    }
}

impl RateSheet {
    /// The VAT rate if VAT is enabled.
    pub fn vat(&self) -> Option<Percent> {
        self.vat_enabled.then_some(self.vat_rate)
    }
}

// =============================================================================
// Grout Spec
// =============================================================================

/// Global tile and joint dimensions, in millimetres.
///
/// The tile size here is only a fallback for rooms without a resolvable
/// preset or modular mix; joint width, thickness and waste apply to every
/// room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct GroutSpec {
    #[serde(deserialize_with = "lenient::number")]
    pub tile_length: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub tile_width: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub tile_thickness: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub joint_width: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub waste_percent: f64,
}

impl Default for GroutSpec {
    fn default() -> Self {
        GroutSpec {
            tile_length: 600.0,
            tile_width: 300.0,
            tile_thickness: 10.0,
            joint_width: 2.0,
            waste_percent: 10.0,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// Who the quote is for. Every field is optional; blank means absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerInfo {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl CustomerInfo {
    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn address(&self) -> Option<&str> {
        non_blank(&self.address)
    }

    pub fn email(&self) -> Option<&str> {
        non_blank(&self.email)
    }

    pub fn phone(&self) -> Option<&str> {
        non_blank(&self.phone)
    }
}

// =============================================================================
// Rate Preset
// =============================================================================

/// A named rate sheet the trader can switch between (e.g. "Trade", "Retail").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RatePreset {
    pub name: String,
    pub rates: RateSheet,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_segment_clamps_at_zero() {
        let wall = WallSegment::new(1.0, 2.0, 5.0);
        assert_eq!(wall.area(), 0.0);

        let wall = WallSegment::new(3.0, 2.4, 1.2);
        assert!((wall.area() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_new_room_defaults() {
        let room = RoomSpec::new("Kitchen");
        assert_eq!(room.tile_type, TileType::Floor);
        assert_eq!(room.room_height, 2.4);
        assert!(!room.use_modular_pattern);
        assert_eq!(room.modular_tiles.len(), 3);
        assert_eq!(room.modular_tiles[1].preset, "600×300");
        assert_eq!(room.modular_tiles[1].proportion, 50.0);
        assert!(room.options.is_empty());
    }

    #[test]
    fn test_enable_replaces_same_kind() {
        let mut room = RoomSpec::new("Bathroom");
        room.enable(RoomOption::Trim { length_m: 2.0 });
        room.enable(RoomOption::Trim { length_m: 5.0 });
        room.enable(RoomOption::TankingWalls);

        assert_eq!(room.options.len(), 2);
        assert_eq!(
            room.option(OptionKind::Trim),
            Some(&RoomOption::Trim { length_m: 5.0 })
        );

        assert!(room.disable(OptionKind::Trim).is_some());
        assert!(!room.has(OptionKind::Trim));
        assert!(room.disable(OptionKind::Trim).is_none());
    }

    #[test]
    fn test_wall_height_helpers() {
        let mut room = RoomSpec::new("Hall");
        room.add_wall(3.0);
        assert!(room.set_half_height(0));
        assert_eq!(room.walls[0].height, 1.2);
        assert!(room.reset_wall_height(0));
        assert_eq!(room.walls[0].height, 2.4);
        assert!(!room.set_half_height(5));
    }

    #[test]
    fn test_room_option_json_shape() {
        let json = serde_json::to_string(&RoomOption::underfloor_heating()).unwrap();
        assert_eq!(json, r#"{"kind":"underfloor_heating","wattsPerM2":150}"#);

        let opt: RoomOption =
            serde_json::from_str(r#"{"kind":"levelling_compound","depth":"2mm"}"#).unwrap();
        assert_eq!(
            opt,
            RoomOption::LevellingCompound {
                depth: LevellingDepth::TwoMm
            }
        );

        let opt: RoomOption = serde_json::from_str(r#"{"kind":"underfloor_heating"}"#).unwrap();
        assert_eq!(opt, RoomOption::underfloor_heating());
    }

    #[test]
    fn test_rate_sheet_partial_json_fills_defaults() {
        let rates: RateSheet =
            serde_json::from_str(r#"{"labourMode":"day","dayRate":"300","vatEnabled":true}"#)
                .unwrap();
        assert_eq!(rates.labour_mode, LabourMode::DayRate);
        assert_eq!(rates.day_rate, Money::new(300.0));
        assert_eq!(rates.floor_rate, Money::new(45.0));
        assert_eq!(rates.vat(), Some(Percent::new(20.0)));
    }

    #[test]
    fn test_room_missing_height_defaults() {
        let room: RoomSpec =
            serde_json::from_str(r#"{"name":"Utility","roomLength":"3","tileSizePreset":""}"#)
                .unwrap();
        assert_eq!(room.room_height, 2.4);
        assert_eq!(room.room_length, 3.0);
        assert_eq!(room.tile_size_preset, None);
    }

    #[test]
    fn test_customer_blank_fields_are_absent() {
        let customer = CustomerInfo {
            name: "  ".to_string(),
            address: "1 High St".to_string(),
            ..Default::default()
        };
        assert_eq!(customer.name(), None);
        assert_eq!(customer.address(), Some("1 High St"));
    }
}
