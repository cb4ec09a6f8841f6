//! Public snapshot API for observing a session without exposing internals.

use serde::{Deserialize, Serialize};

use crate::domain::dice::{available, Die, DieId};
use crate::domain::scoring::{scorable_dice_ids, score, ScoringCombination};
use crate::domain::state::{GameSession, Player, TurnPhase};

/// Read-only view of a session, suitable for rendering or serialization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub dice: Vec<Die>,
    pub is_rolling: bool,
    pub can_roll: bool,
    pub has_rolled_this_turn: bool,
    pub is_busted: bool,
    pub target_score: u32,
    pub winner: Option<Player>,
    pub phase: TurnPhase,
    pub roll_generation: u64,
    /// Combinations formed by the held and locked dice this turn.
    pub turn_combinations: Vec<ScoringCombination>,
    /// Available dice that would score if held.
    pub selectable: Vec<DieId>,
}

impl GameSnapshot {
    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }
}

/// Produce a snapshot of the current session. Never panics.
pub fn snapshot(session: &GameSession) -> GameSnapshot {
    let committed: Vec<Die> = session
        .dice
        .iter()
        .filter(|d| d.is_committed())
        .copied()
        .collect();
    let turn_combinations = if session.is_busted {
        Vec::new()
    } else {
        score(&committed).combinations
    };
    let selectable = if session.has_rolled_this_turn && !session.is_busted && !session.is_rolling
    {
        scorable_dice_ids(&available(&session.dice))
    } else {
        Vec::new()
    };

    GameSnapshot {
        players: session.players.clone(),
        current_player_index: session.current_player_index,
        dice: session.dice.to_vec(),
        is_rolling: session.is_rolling,
        can_roll: session.can_roll,
        has_rolled_this_turn: session.has_rolled_this_turn,
        is_busted: session.is_busted,
        target_score: session.target_score,
        winner: session.winner_player().cloned(),
        phase: session.phase(),
        roll_generation: session.roll_generation,
        turn_combinations,
        selectable,
    }
}
