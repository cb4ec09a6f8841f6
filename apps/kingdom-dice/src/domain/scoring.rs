//! Pure scoring of a set of dice.
//!
//! Rules are applied in priority order and each rule consumes the dice it
//! matches, so no die contributes to two combinations.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::dice::{Die, DieId, Face};
use crate::domain::rules::{
    multiple_points, FULL_STRAIGHT_POINTS, HIGH_STRAIGHT_POINTS, LOW_STRAIGHT_POINTS,
    MULTIPLE_MIN, SINGLE_FIVE_POINTS, SINGLE_ONE_POINTS,
};

const FULL_STRAIGHT: [Face; 6] = [1, 2, 3, 4, 5, 6];
const LOW_STRAIGHT: [Face; 5] = [1, 2, 3, 4, 5];
const HIGH_STRAIGHT: [Face; 5] = [2, 3, 4, 5, 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CombinationKind {
    FullStraight,
    LowStraight,
    HighStraight,
    Multiple { face: Face, count: u8 },
    SingleOnes { count: u8 },
    SingleFives { count: u8 },
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinationKind::FullStraight => write!(f, "Full Straight (1-6)"),
            CombinationKind::LowStraight => write!(f, "Partial Straight (1-5)"),
            CombinationKind::HighStraight => write!(f, "Partial Straight (2-6)"),
            CombinationKind::Multiple { face, count } => write!(f, "{count} {face}s"),
            CombinationKind::SingleOnes { count } => write_singles(f, *count, 1),
            CombinationKind::SingleFives { count } => write_singles(f, *count, 5),
        }
    }
}

fn write_singles(f: &mut fmt::Formatter<'_>, count: u8, face: Face) -> fmt::Result {
    let plural = if count > 1 { "s" } else { "" };
    write!(f, "{count} single {face}{plural}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringCombination {
    pub kind: CombinationKind,
    /// Ascending ids of the dice this combination consumed.
    pub dice_ids: Vec<DieId>,
    pub points: u32,
    pub label: String,
}

impl ScoringCombination {
    fn new(kind: CombinationKind, mut dice_ids: Vec<DieId>, points: u32) -> Self {
        dice_ids.sort_unstable();
        Self {
            kind,
            dice_ids,
            points,
            label: kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub combinations: Vec<ScoringCombination>,
    pub total: u32,
}

impl ScoreBreakdown {
    fn single(combination: ScoringCombination) -> Self {
        Self {
            total: combination.points,
            combinations: vec![combination],
        }
    }

    fn push(&mut self, combination: ScoringCombination) {
        self.total += combination.points;
        self.combinations.push(combination);
    }
}

/// Score a set of dice. Order of `dice` does not matter.
pub fn score(dice: &[Die]) -> ScoreBreakdown {
    let mut faces: Vec<Face> = dice.iter().map(|d| d.value).collect();
    faces.sort_unstable();
    let all_ids = || dice.iter().map(|d| d.id).collect::<Vec<_>>();

    if faces == FULL_STRAIGHT {
        return ScoreBreakdown::single(ScoringCombination::new(
            CombinationKind::FullStraight,
            all_ids(),
            FULL_STRAIGHT_POINTS,
        ));
    }
    if faces == LOW_STRAIGHT {
        return ScoreBreakdown::single(ScoringCombination::new(
            CombinationKind::LowStraight,
            all_ids(),
            LOW_STRAIGHT_POINTS,
        ));
    }
    if faces == HIGH_STRAIGHT {
        return ScoreBreakdown::single(ScoringCombination::new(
            CombinationKind::HighStraight,
            all_ids(),
            HIGH_STRAIGHT_POINTS,
        ));
    }

    let ids_showing = |face: Face| -> Vec<DieId> {
        dice.iter()
            .filter(|d| d.value == face)
            .map(|d| d.id)
            .collect()
    };

    let mut breakdown = ScoreBreakdown::default();

    for face in 1..=6u8 {
        let ids = ids_showing(face);
        if ids.len() >= MULTIPLE_MIN {
            let kind = CombinationKind::Multiple {
                face,
                count: ids.len() as u8,
            };
            let points = multiple_points(face, ids.len());
            breakdown.push(ScoringCombination::new(kind, ids, points));
        }
    }

    // Singles only when the face did not form a multiple.
    let ones = ids_showing(1);
    if !ones.is_empty() && ones.len() < MULTIPLE_MIN {
        let count = ones.len() as u8;
        breakdown.push(ScoringCombination::new(
            CombinationKind::SingleOnes { count },
            ones,
            SINGLE_ONE_POINTS * u32::from(count),
        ));
    }
    let fives = ids_showing(5);
    if !fives.is_empty() && fives.len() < MULTIPLE_MIN {
        let count = fives.len() as u8;
        breakdown.push(ScoringCombination::new(
            CombinationKind::SingleFives { count },
            fives,
            SINGLE_FIVE_POINTS * u32::from(count),
        ));
    }

    breakdown
}

/// True when at least one combination scores.
pub fn has_any_score(dice: &[Die]) -> bool {
    score(dice).total > 0
}

/// Union of the ids of every scoring die, ascending.
///
/// This is the "select everything that scores" rule, not a best-subset search.
pub fn scorable_dice_ids(dice: &[Die]) -> Vec<DieId> {
    score(dice)
        .combinations
        .iter()
        .flat_map(|c| c.dice_ids.iter().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
