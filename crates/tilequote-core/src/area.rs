//! # Area Aggregator
//!
//! Floor and wall area, per room and in total.
//!
//! ```text
//! floor = Σ length × width                      (over floor_areas)
//!
//! wall  = four-wall shortcut:
//!           max(0, 2 × (L + W) × H − deduct)
//!         otherwise:
//!           Σ max(0, length × height − deduct)  (over walls)
//! ```
//!
//! [`room_areas`] is the only place these formulas live. The totals and the
//! per-room cost pass both call it, so they can never disagree.

use serde::{Deserialize, Serialize};
use std::ops::Add;
use ts_rs::TS;

use crate::types::RoomSpec;

/// Floor and wall area in m².
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Areas {
    pub floor_area: f64,
    pub wall_area: f64,
}

impl Areas {
    /// Floor plus wall.
    #[inline]
    pub fn total(&self) -> f64 {
        self.floor_area + self.wall_area
    }
}

impl Add for Areas {
    type Output = Areas;

    fn add(self, other: Areas) -> Areas {
        Areas {
            floor_area: self.floor_area + other.floor_area,
            wall_area: self.wall_area + other.wall_area,
        }
    }
}

/// Floor area of one room.
pub fn floor_area(room: &RoomSpec) -> f64 {
    room.floor_areas.iter().map(|a| a.area()).sum()
}

/// Wall area of one room, via the four-wall shortcut or the wall list.
pub fn wall_area(room: &RoomSpec) -> f64 {
    if room.use_four_wall_calc {
        let perimeter = 2.0 * (room.room_length + room.room_width);
        (perimeter * room.room_height - room.four_wall_deduct).max(0.0)
    } else {
        room.walls.iter().map(|w| w.area()).sum()
    }
}

/// Floor and wall area of one room.
pub fn room_areas(room: &RoomSpec) -> Areas {
    Areas {
        floor_area: floor_area(room),
        wall_area: wall_area(room),
    }
}

/// Total floor and wall area across all rooms.
///
/// ## Example
/// ```rust
/// use tilequote_core::area::compute_areas;
/// use tilequote_core::types::RoomSpec;
///
/// let mut room = RoomSpec::new("Kitchen");
/// room.add_floor_area(4.0, 3.0);
/// let areas = compute_areas(&[room]);
/// assert_eq!(areas.floor_area, 12.0);
/// assert_eq!(areas.wall_area, 0.0);
/// ```
pub fn compute_areas(rooms: &[RoomSpec]) -> Areas {
    rooms
        .iter()
        .map(room_areas)
        .fold(Areas::default(), Add::add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WallSegment;
    use proptest::prelude::*;

    fn four_wall_room(length: f64, width: f64, height: f64, deduct: f64) -> RoomSpec {
        RoomSpec {
            use_four_wall_calc: true,
            room_length: length,
            room_width: width,
            room_height: height,
            four_wall_deduct: deduct,
            ..RoomSpec::new("Bathroom")
        }
    }

    #[test]
    fn test_floor_area_sums_entries() {
        let mut room = RoomSpec::new("L-shaped");
        room.add_floor_area(4.0, 3.0);
        room.add_floor_area(2.0, 1.5);
        assert_eq!(floor_area(&room), 15.0);
    }

    #[test]
    fn test_wall_list_clamps_each_segment() {
        let mut room = RoomSpec::new("Kitchen");
        room.walls.push(WallSegment::new(3.0, 2.0, 0.0));
        // The oversized deduction only zeroes its own wall.
        room.walls.push(WallSegment::new(1.0, 1.0, 10.0));
        assert_eq!(wall_area(&room), 6.0);
    }

    #[test]
    fn test_four_wall_shortcut() {
        let room = four_wall_room(2.0, 1.5, 2.4, 1.6);
        // 2 × 3.5 × 2.4 − 1.6
        assert!((wall_area(&room) - 15.2).abs() < 1e-9);
    }

    #[test]
    fn test_four_wall_ignores_wall_list() {
        let mut room = four_wall_room(1.0, 1.0, 2.0, 0.0);
        room.add_wall(10.0);
        assert_eq!(wall_area(&room), 8.0);
    }

    #[test]
    fn test_four_wall_deduct_clamps() {
        let room = four_wall_room(1.0, 1.0, 1.0, 100.0);
        assert_eq!(wall_area(&room), 0.0);
    }

    #[test]
    fn test_totals_match_per_room_sum() {
        let mut a = RoomSpec::new("A");
        a.add_floor_area(2.0, 2.0);
        a.add_wall(3.0);
        let b = four_wall_room(2.0, 2.0, 2.0, 0.0);

        let total = compute_areas(&[a.clone(), b.clone()]);
        let by_room = room_areas(&a) + room_areas(&b);
        assert_eq!(total, by_room);
        assert_eq!(total.floor_area, 4.0);
        assert!((total.wall_area - (7.2 + 16.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_rooms_have_no_area() {
        assert_eq!(compute_areas(&[]), Areas::default());
        assert_eq!(compute_areas(&[RoomSpec::new("Empty")]).total(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_floor_sum_is_order_independent(
            dims in prop::collection::vec((0u32..2000, 0u32..2000), 0..8)
        ) {
            // Centimetre inputs keep products exactly representable.
            let mut room = RoomSpec::new("Any");
            for (l, w) in &dims {
                room.add_floor_area(*l as f64 / 100.0, *w as f64 / 100.0);
            }
            let mut reversed = room.clone();
            reversed.floor_areas.reverse();

            let expected: f64 = dims
                .iter()
                .map(|(l, w)| (*l as f64 / 100.0) * (*w as f64 / 100.0))
                .sum();
            prop_assert!((floor_area(&room) - expected).abs() < 1e-6);
            prop_assert!((floor_area(&room) - floor_area(&reversed)).abs() < 1e-6);
        }

        #[test]
        fn prop_wall_segment_never_negative(
            length in -50.0f64..50.0,
            height in -5.0f64..5.0,
            deduct in -20.0f64..200.0,
        ) {
            let wall = WallSegment::new(length, height, deduct);
            prop_assert!(wall.area() >= 0.0);
            prop_assert_eq!(wall.area(), (length * height - deduct).max(0.0));
        }
    }
}
