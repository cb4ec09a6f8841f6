//! Dice primitives shared by scoring, the turn machine, and the AI views.

use serde::{Deserialize, Serialize};

use crate::domain::dice_source::DiceSource;
use crate::domain::rules::DICE_COUNT;

pub type DieId = u8; // 0..=5
pub type Face = u8; // 1..=6

/// One of the six dice on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Die {
    pub id: DieId,
    pub value: Face,
    /// Selected after a roll; reversible until the next roll.
    pub is_held: bool,
    /// Committed by a roll; keeps its face until the turn ends.
    pub is_locked: bool,
    /// Display hint: contributed points on the latest roll.
    pub is_scoring: bool,
}

impl Die {
    pub const fn new(id: DieId, value: Face) -> Self {
        Self {
            id,
            value,
            is_held: false,
            is_locked: false,
            is_scoring: false,
        }
    }

    /// Free to be re-rolled or selected.
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.is_held && !self.is_locked
    }

    /// Counts toward the turn score.
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.is_held || self.is_locked
    }
}

pub type DiceSet = [Die; DICE_COUNT];

/// Six unlocked dice with fresh faces drawn from `source`.
pub fn fresh_dice(source: &mut dyn DiceSource) -> DiceSet {
    std::array::from_fn(|i| Die::new(i as DieId, source.next_face()))
}

/// Dice that are neither held nor locked.
pub fn available(dice: &[Die]) -> Vec<Die> {
    dice.iter().copied().filter(Die::is_available).collect()
}

/// Dice that are held or locked.
pub fn held_or_locked(dice: &[Die]) -> Vec<Die> {
    dice.iter().copied().filter(Die::is_committed).collect()
}

pub fn unlocked(dice: &[Die]) -> Vec<Die> {
    dice.iter().copied().filter(|d| !d.is_locked).collect()
}

/// Build plain dice from faces, ids assigned positionally.
///
/// Handy for scoring arbitrary subsets; does not enforce the six-dice table rule.
pub fn dice_from_faces(faces: &[Face]) -> Vec<Die> {
    faces
        .iter()
        .enumerate()
        .map(|(i, &f)| Die::new(i as DieId, f))
        .collect()
}
