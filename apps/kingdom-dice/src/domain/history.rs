//! Per-player record of settled turns.

use serde::{Deserialize, Serialize};

use crate::domain::scoring::ScoringCombination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnOutcome {
    /// Player ended the turn and kept the points.
    Banked,
    /// Roll without a scoring die; points forfeited.
    Busted,
    /// All six dice locked; points banked mid-turn.
    HotDice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnRecord {
    /// 1-based, counted per player.
    pub turn_number: u32,
    pub points: u32,
    pub total_after: u32,
    pub outcome: TurnOutcome,
    pub combinations: Vec<ScoringCombination>,
}

/// Summary figures over a history, as shown on the score board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryStats {
    /// Distinct turns played; a hot-dice bank is part of its turn.
    pub turns: usize,
    /// Most points banked over a whole turn, hot-dice banks included.
    pub best_turn: u32,
    pub busts: usize,
    /// Hot-dice banks, counted individually.
    pub hot_dice: usize,
}

/// Points banked per turn, in turn order.
pub fn points_per_turn(history: &[TurnRecord]) -> Vec<(u32, u32)> {
    let mut turns: Vec<(u32, u32)> = Vec::new();
    for record in history {
        match turns.last_mut() {
            Some((number, points)) if *number == record.turn_number => *points += record.points,
            _ => turns.push((record.turn_number, record.points)),
        }
    }
    turns
}

pub fn stats(history: &[TurnRecord]) -> HistoryStats {
    let per_turn = points_per_turn(history);
    HistoryStats {
        turns: per_turn.len(),
        best_turn: per_turn.iter().map(|&(_, p)| p).max().unwrap_or(0),
        busts: history
            .iter()
            .filter(|t| t.outcome == TurnOutcome::Busted)
            .count(),
        hot_dice: history
            .iter()
            .filter(|t| t.outcome == TurnOutcome::HotDice)
            .count(),
    }
}
