//! End-to-end quote scenarios through the public API.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use tilequote_core::materials::{grout_kg_per_m2, MaterialItem};
use tilequote_core::message::format_quote_message;
use tilequote_core::{
    compute_quote, CustomerInfo, GroutSpec, LabourMode, Money, QuoteDocument, RateSheet,
    RoomOption, RoomSpec, SavedQuote, TileType, WallSegment,
};

fn kitchen() -> RoomSpec {
    let mut room = RoomSpec::new("Kitchen");
    room.tile_type = TileType::Floor;
    room.add_floor_area(4.0, 3.0);
    room.tile_size_preset = Some("600×600".to_string());
    room
}

#[test]
fn test_single_floor_room_600_square() {
    let rates = RateSheet {
        labour_mode: LabourMode::PerSquareMetre,
        floor_rate: Money::new(45.0),
        ..RateSheet::default()
    };
    let grout = GroutSpec {
        joint_width: 2.0,
        tile_thickness: 10.0,
        waste_percent: 10.0,
        ..GroutSpec::default()
    };

    let result = compute_quote(&[kitchen()], &rates, &grout);

    assert_eq!(result.floor_area, 12.0);
    assert_eq!(result.wall_area, 0.0);
    assert_eq!(result.labour_cost, Money::new(540.0));

    // 12 m² at 4 m² per bag
    let adhesive = result.material(MaterialItem::Adhesive).unwrap();
    assert_eq!(adhesive.packs, Some(3));

    // (1200 / 360000) × 2 × 10 × 1.7 = 0.11333 kg/m²
    let kg_per_m2 = grout_kg_per_m2(600.0, 600.0, 2.0, 10.0);
    assert!((kg_per_m2 - 0.113_333_333).abs() < 1e-6);
    assert!((result.rooms[0].grout_kg_per_m2 - kg_per_m2).abs() < 1e-12);

    // × 12 m² × 1.1 waste = 1.496 kg → one 2.5 kg bag
    let grout_line = result.material(MaterialItem::Grout).unwrap();
    assert!((grout_line.quantity - 1.496).abs() < 1e-9);
    assert_eq!(grout_line.packs, Some((1.496f64 / 2.5).ceil() as u64));
    assert_eq!(grout_line.packs, Some(1));

    assert!(result.has_calculations());
}

#[test]
fn test_bathroom_with_every_option() {
    let mut room = RoomSpec::new("Bathroom")
        .with(RoomOption::CementBoard)
        .with(RoomOption::AntiCrackMembrane)
        .with(RoomOption::levelling_compound())
        .with(RoomOption::LevellingClips { manual_quantity: 0.0 })
        .with(RoomOption::NaturalStoneSealer)
        .with(RoomOption::TankingWalls)
        .with(RoomOption::TankingFloor)
        .with(RoomOption::underfloor_heating())
        .with(RoomOption::Trim { length_m: 5.0 });
    room.add_floor_area(2.5, 2.0);
    room.walls.push(WallSegment::new(2.5, 2.4, 0.0));
    room.walls.push(WallSegment::new(2.0, 2.4, 1.6));
    room.tile_size_preset = Some("600×300".to_string());

    let result = compute_quote(&[room], &RateSheet::default(), &GroutSpec::default());

    assert_eq!(result.floor_area, 5.0);
    assert!((result.wall_area - 9.2).abs() < 1e-9);

    for item in [
        MaterialItem::Adhesive,
        MaterialItem::Grout,
        MaterialItem::CementBoard,
        MaterialItem::CementBoardAdhesive,
        MaterialItem::AntiCrackMembrane,
        MaterialItem::AntiCrackAdhesive,
        MaterialItem::LevellingCompound,
        MaterialItem::LevellingClips,
        MaterialItem::TankingWalls,
        MaterialItem::TankingFloor,
        MaterialItem::Sealer,
        MaterialItem::Trim,
        MaterialItem::UfhMat,
        MaterialItem::UfhThermostat,
    ] {
        assert!(result.material(item).is_some(), "missing {item:?}");
    }

    // 600×300: ceil(3 / 0.18) × 1.1 = 18.7 clips/m², × 5 m² = 93.5 → 94 clips
    let clips = result.material(MaterialItem::LevellingClips).unwrap();
    assert_eq!(clips.quantity, 94.0);
    assert_eq!(clips.packs, Some(1));

    // 5 m² heated at 3 m²/bag plus 9.2 m² walls at 4 m²/bag
    assert_eq!(result.material(MaterialItem::Adhesive).unwrap().packs, Some(2 + 3));

    assert_eq!(
        result.totals.sub_total,
        result.total_labour_cost + result.materials_total
    );
    assert_eq!(
        result.totals.grand_total,
        result.totals.total_with_margin + result.totals.vat_amount
    );
}

#[test]
fn test_day_rate_job_message() {
    let mut doc = QuoteDocument::with_rooms(1);
    doc.customer = CustomerInfo {
        name: "Sam Patel".to_string(),
        ..CustomerInfo::default()
    };
    doc.rates.labour_mode = LabourMode::DayRate;
    doc.rates.days_estimate = 2.0;
    doc.rates.vat_enabled = true;
    doc.rooms[0].add_wall(3.0);

    let result = doc.quote();
    assert_eq!(result.labour_cost, Money::new(500.0));

    let date = Utc
        .with_ymd_and_hms(2026, 10, 19, 8, 0, 0)
        .unwrap()
        .date_naive();
    let text = format_quote_message(&result, &doc.customer, date);
    assert!(text.contains("Customer: Sam Patel"));
    assert!(!text.contains("Address:"));
    assert!(text.contains("Wall area: 7.20 m²"));
    assert!(!text.contains("Floor area"));
    assert!(text.contains("VAT (20%)"));
    assert!(text.ends_with("This quote is valid for 30 days."));
}

#[test]
fn test_saved_quote_round_trip_recomputes_identically() {
    let mut doc = QuoteDocument::with_rooms(2);
    doc.rooms[0] = kitchen().with(RoomOption::underfloor_heating());
    doc.rooms[1].use_four_wall_calc = true;
    doc.rooms[1].room_length = 2.2;
    doc.rooms[1].room_width = 1.7;
    doc.rooms[1].four_wall_deduct = 1.8;
    doc.rooms[1].use_modular_pattern = true;
    doc.rooms[1].tile_type = TileType::Wall;
    doc.rooms[1].enable(RoomOption::TankingWalls);
    doc.rooms[1].enable(RoomOption::LevellingClips { manual_quantity: 40.0 });
    doc.rates.vat_enabled = true;

    let saved_at = Utc.with_ymd_and_hms(2026, 10, 19, 10, 30, 0).unwrap();
    let saved = SavedQuote::new(doc, saved_at, None);

    let json = serde_json::to_string(&saved).unwrap();
    let restored: SavedQuote = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, saved);
    assert_eq!(restored.recompute(), saved.recompute());
}

proptest! {
    #[test]
    fn prop_saved_quote_round_trip_is_exact(
        length in 0.01f64..20.0,
        width in 0.01f64..20.0,
        wall in 0.01f64..10.0,
        height in 0.5f64..4.0,
        floor_rate in 0.0f64..200.0,
        wall_rate in 0.0f64..200.0,
        proportion in 0.01f64..100.0,
    ) {
        let mut doc = QuoteDocument::with_rooms(2);
        doc.rooms[0].add_floor_area(length, width);
        doc.rooms[0].add_floor_area(width, 3.0);
        doc.rooms[1].tile_type = TileType::Wall;
        doc.rooms[1].walls.push(WallSegment::new(wall, height, 0.0));
        doc.rooms[1].use_modular_pattern = true;
        doc.rooms[1].modular_tiles[0].proportion = proportion;
        doc.rates.floor_rate = Money::new(floor_rate);
        doc.rates.wall_rate = Money::new(wall_rate);

        let saved_at = Utc.with_ymd_and_hms(2026, 10, 19, 10, 30, 0).unwrap();
        let saved = SavedQuote::new(doc, saved_at, Some(7));

        let json = serde_json::to_string(&saved).unwrap();
        let restored: SavedQuote = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&restored, &saved);
        prop_assert_eq!(restored.recompute(), saved.recompute());

        // Rate presets are stored as a bare sheet.
        let rates_json = serde_json::to_string(&saved.document.rates).unwrap();
        let rates: RateSheet = serde_json::from_str(&rates_json).unwrap();
        prop_assert_eq!(rates, saved.document.rates);
    }
}

#[test]
fn test_floor_area_reloads_bit_for_bit() {
    let mut doc = QuoteDocument::with_rooms(1);
    doc.rooms[0].add_floor_area(1.9497932028647402, 3.0);

    let json = serde_json::to_string(&doc).unwrap();
    let restored: QuoteDocument = serde_json::from_str(&json).unwrap();

    assert_eq!(
        restored.rooms[0].floor_areas[0].length.to_bits(),
        1.9497932028647402f64.to_bits()
    );
    assert_eq!(restored.quote(), doc.quote());
}

#[test]
fn test_legacy_style_strings_still_price() {
    let json = r#"{
        "customer": {"name": "Alex"},
        "rooms": [{
            "name": "Hall",
            "floorAreas": [{"length": "4", "width": "2.5"}],
            "walls": [{"length": "", "height": null}],
            "tileSizePreset": "",
            "options": [{"kind": "trim", "lengthM": "3"}]
        }],
        "rates": {"floorRate": "50", "vatEnabled": "false"}
    }"#;
    let doc = QuoteDocument::from_json(json).unwrap();
    let result = doc.quote();

    assert_eq!(result.floor_area, 10.0);
    assert_eq!(result.wall_area, 0.0);
    assert_eq!(result.labour_cost, Money::new(500.0));
    assert_eq!(result.material(MaterialItem::Trim).unwrap().packs, Some(2));
    assert!(result.totals.vat.is_none());
}
