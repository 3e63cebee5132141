//! # Validation Module
//!
//! Checks applied before a document, preset or quote is persisted.
//!
//! ## Where Validation Sits
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (lenient)                                     │
//! │  └── junk numbers read as 0, missing fields take defaults               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE (before saving)                                   │
//! │  ├── names present and short enough                                     │
//! │  ├── VAT rate within 0-100                                              │
//! │  └── UFH wattage, tile mix, measurements sane                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  └── NOT NULL / PRIMARY KEY constraints                                 │
//! │                                                                         │
//! │  The calculator never calls this: it prices whatever it is given.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tilequote_core::validation::{validate_preset_name, validate_ufh_watts};
//!
//! assert!(validate_preset_name("Trade rates").is_ok());
//! assert!(validate_ufh_watts(150).is_ok());
//! assert!(validate_ufh_watts(175).is_err());
//! ```

use crate::document::QuoteDocument;
use crate::error::ValidationError;
use crate::money::Percent;
use crate::types::{ModularTile, RoomOption, RoomSpec};
use crate::{MAX_NAME_LEN, UFH_WATT_OPTIONS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a room name.
///
/// ## Rules
/// - Must not be blank
/// - At most 50 characters
pub fn validate_room_name(name: &str) -> ValidationResult<()> {
    validate_name("room name", name)
}

/// Validates a rate preset name.
///
/// ## Example
/// ```rust
/// use tilequote_core::validation::validate_preset_name;
///
/// assert!(validate_preset_name("Retail").is_ok());
/// assert!(validate_preset_name("   ").is_err());
/// assert!(validate_preset_name(&"A".repeat(51)).is_err());
/// ```
pub fn validate_preset_name(name: &str) -> ValidationResult<()> {
    validate_name("preset name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// VAT rate must be between 0% and 100%.
pub fn validate_vat_rate(rate: Percent) -> ValidationResult<()> {
    let value = rate.value();
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field: "VAT rate".to_string(),
            min: 0.0,
            max: 100.0,
        });
    }
    Ok(())
}

/// Underfloor heating mats come in 100, 150 and 200 W/m².
pub fn validate_ufh_watts(watts_per_m2: u32) -> ValidationResult<()> {
    if !UFH_WATT_OPTIONS.contains(&watts_per_m2) {
        return Err(ValidationError::NotAllowed {
            field: "UFH watts per m²".to_string(),
            allowed: UFH_WATT_OPTIONS.iter().map(|w| w.to_string()).collect(),
        });
    }
    Ok(())
}

/// A modular mix may not contain negative proportions.
///
/// Proportions need not sum to 100; the calculator normalises them.
pub fn validate_modular_mix(tiles: &[ModularTile]) -> ValidationResult<()> {
    if tiles.iter().any(|t| t.proportion < 0.0) {
        return Err(ValidationError::MustBePositive {
            field: "tile mix proportion".to_string(),
        });
    }
    Ok(())
}

fn validate_measurement(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Aggregate Validators
// =============================================================================

/// Validates one room: name, measurements, mix and option parameters.
pub fn validate_room(room: &RoomSpec) -> ValidationResult<()> {
    validate_room_name(&room.name)?;

    for area in &room.floor_areas {
        validate_measurement("floor length", area.length)?;
        validate_measurement("floor width", area.width)?;
    }
    for wall in &room.walls {
        validate_measurement("wall length", wall.length)?;
        validate_measurement("wall height", wall.height)?;
        validate_measurement("wall deduction", wall.deduct)?;
    }
    if room.use_four_wall_calc {
        validate_measurement("room length", room.room_length)?;
        validate_measurement("room width", room.room_width)?;
        validate_measurement("room height", room.room_height)?;
        validate_measurement("wall deduction", room.four_wall_deduct)?;
    }
    if room.use_modular_pattern {
        validate_modular_mix(&room.modular_tiles)?;
    }

    for option in &room.options {
        match option {
            RoomOption::UnderfloorHeating { watts_per_m2 } => validate_ufh_watts(*watts_per_m2)?,
            RoomOption::Trim { length_m } => validate_measurement("trim length", *length_m)?,
            RoomOption::LevellingClips { manual_quantity } => {
                validate_measurement("clip quantity", *manual_quantity)?
            }
            _ => {}
        }
    }

    Ok(())
}

/// Validates a whole document before saving it.
pub fn validate_document(doc: &QuoteDocument) -> ValidationResult<()> {
    for room in &doc.rooms {
        validate_room(room)?;
    }
    if doc.rates.vat_enabled {
        validate_vat_rate(doc.rates.vat_rate)?;
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WallSegment;

    #[test]
    fn test_validate_names() {
        assert!(validate_room_name("Kitchen").is_ok());
        assert!(validate_room_name("").is_err());
        assert!(validate_preset_name(&"A".repeat(50)).is_ok());
        assert_eq!(
            validate_preset_name(&"A".repeat(51)),
            Err(ValidationError::TooLong {
                field: "preset name".to_string(),
                max: 50
            })
        );
    }

    #[test]
    fn test_validate_vat_rate() {
        assert!(validate_vat_rate(Percent::new(0.0)).is_ok());
        assert!(validate_vat_rate(Percent::new(20.0)).is_ok());
        assert!(validate_vat_rate(Percent::new(100.0)).is_ok());
        assert!(validate_vat_rate(Percent::new(-1.0)).is_err());
        assert!(validate_vat_rate(Percent::new(120.0)).is_err());
    }

    #[test]
    fn test_validate_ufh_watts() {
        assert!(validate_ufh_watts(100).is_ok());
        assert!(validate_ufh_watts(200).is_ok());
        assert!(validate_ufh_watts(0).is_err());
    }

    #[test]
    fn test_validate_modular_mix() {
        assert!(validate_modular_mix(&[ModularTile::new("600×600", 30.0)]).is_ok());
        assert!(validate_modular_mix(&[]).is_ok());
        assert!(validate_modular_mix(&[ModularTile::new("600×600", -1.0)]).is_err());
    }

    #[test]
    fn test_validate_room_measurements() {
        let mut room = RoomSpec::new("Hall");
        room.walls.push(WallSegment::new(3.0, 2.4, 0.0));
        assert!(validate_room(&room).is_ok());

        room.walls[0].length = -3.0;
        assert!(matches!(
            validate_room(&room),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_validate_room_options() {
        let room = RoomSpec::new("Hall").with(RoomOption::UnderfloorHeating { watts_per_m2: 90 });
        assert!(matches!(
            validate_room(&room),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_validate_document() {
        let mut doc = QuoteDocument::default();
        doc.add_room();
        assert!(validate_document(&doc).is_ok());

        doc.rates.vat_enabled = true;
        doc.rates.vat_rate = Percent::new(150.0);
        assert!(validate_document(&doc).is_err());

        doc.rates.vat_enabled = false;
        doc.rooms[0].name = " ".to_string();
        assert!(validate_document(&doc).is_err());
    }
}
