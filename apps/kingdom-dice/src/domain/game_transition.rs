//! Edge-triggered events derived by comparing two snapshots.

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{PlayerId, TurnPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// The turn passed to a different player.
    TurnBecame { player_id: PlayerId },

    /// The current turn busted.
    Busted { player_id: PlayerId },

    /// All six dice were committed and the turn continues with fresh dice.
    HotDice { player_id: PlayerId, banked: u32 },

    /// A player's total changed.
    Banked { player_id: PlayerId, total: u32 },

    /// The session became terminal.
    GameEnded { winner: PlayerId },
}

fn current_id(snap: &GameSnapshot) -> Option<PlayerId> {
    snap.current_player().map(|p| p.id)
}

/// Derive transitions from a before/after pair of snapshots of one session.
pub fn derive_game_transitions(before: &GameSnapshot, after: &GameSnapshot) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Totals that moved
    for p in &after.players {
        let prev = before
            .players
            .iter()
            .find(|b| b.id == p.id)
            .map(|b| b.total_score)
            .unwrap_or(0);
        if p.total_score != prev {
            transitions.push(GameTransition::Banked {
                player_id: p.id,
                total: p.total_score,
            });
        }
    }

    // 2. Bust (edge: not busted -> busted)
    if !before.is_busted && after.is_busted {
        if let Some(player_id) = current_id(after) {
            transitions.push(GameTransition::Busted { player_id });
        }
    }

    // 3. Hot dice: same player, still mid-turn, total grew, and nothing committed
    if let (Some(b), Some(a)) = (current_id(before), current_id(after)) {
        let still_mid_turn = a == b && after.has_rolled_this_turn;
        let fresh = after.dice.iter().all(|d| !d.is_locked && !d.is_held);
        let before_total = before.current_player().map(|p| p.total_score).unwrap_or(0);
        let after_total = after.current_player().map(|p| p.total_score).unwrap_or(0);
        if still_mid_turn && fresh && after_total > before_total {
            transitions.push(GameTransition::HotDice {
                player_id: a,
                banked: after_total - before_total,
            });
        }

        // 4. Turn change
        if a != b {
            transitions.push(GameTransition::TurnBecame { player_id: a });
        }
    }

    // 5. Game end (!Won -> Won)
    if before.phase != TurnPhase::Won && after.phase == TurnPhase::Won {
        if let Some(winner) = after.winner.as_ref().map(|p| p.id) {
            transitions.push(GameTransition::GameEnded { winner });
        }
    }

    transitions
}
