use std::ops::RangeInclusive;
use std::time::Duration;

use crate::domain::dice::Face;

pub const DICE_COUNT: usize = 6;
pub const MIN_FACE: Face = 1;
pub const MAX_FACE: Face = 6;

pub const PLAYER_COUNT_RANGE: RangeInclusive<u8> = 2..=5;
pub const TARGET_SCORE_RANGE: RangeInclusive<u32> = 1_000..=100_000;
pub const DEFAULT_TARGET_SCORE: u32 = 10_000;

/// Target scores outside this band are legal but flagged.
pub const COMFORTABLE_TARGET_RANGE: RangeInclusive<u32> = 5_000..=50_000;

/// Player-vs-computer games always seat exactly this many.
pub const PVE_PLAYERS: u8 = 2;

/// How long the dice tumble before a roll settles.
pub const ROLL_SETTLE: Duration = Duration::from_millis(600);

// Point values.
pub const FULL_STRAIGHT_POINTS: u32 = 1_500;
pub const LOW_STRAIGHT_POINTS: u32 = 500;
pub const HIGH_STRAIGHT_POINTS: u32 = 750;
pub const SINGLE_ONE_POINTS: u32 = 100;
pub const SINGLE_FIVE_POINTS: u32 = 50;

/// Minimum count of one face that scores as a multiple.
pub const MULTIPLE_MIN: usize = 3;
/// From this count on, a multiple is worth double.
pub const MULTIPLE_DOUBLE_AT: usize = 4;

/// Base value of three of a kind.
pub fn multiple_base(face: Face) -> u32 {
    if face == 1 {
        1_000
    } else {
        u32::from(face) * 100
    }
}

/// Value of `count` dice showing `face`, or 0 below three of a kind.
pub fn multiple_points(face: Face, count: usize) -> u32 {
    match count {
        c if c >= MULTIPLE_DOUBLE_AT => multiple_base(face) * 2,
        c if c >= MULTIPLE_MIN => multiple_base(face),
        _ => 0,
    }
}
