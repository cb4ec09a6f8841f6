//! What a computer player can see at a decision point.
//!
//! [`TurnView`] is the only input an [`crate::ai::AiPlayer`] receives. It is
//! built fresh for every decision and never aliases the session, so a policy
//! cannot mutate authoritative state.
//!
//! # For AI developers
//!
//! Use the helper methods instead of re-deriving the rules:
//!
//! - [`available()`](TurnView::available): dice neither held nor locked
//! - [`scorable_available()`](TurnView::scorable_available): ids among those that score
//! - [`turn_score()`](TurnView::turn_score): what ending the turn now would bank
//! - [`points_needed()`](TurnView::points_needed): distance to the target

use crate::domain::dice::{available, Die, DieId};
use crate::domain::scoring::scorable_dice_ids;
use crate::domain::state::{GameSession, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub dice: Vec<Die>,
    pub has_rolled_this_turn: bool,
    pub target_score: u32,
    /// Best total among the other seats.
    pub opponent_best_total: u32,
    /// The deciding player's own record.
    pub me: Player,
}

impl TurnView {
    /// View for whoever is currently on turn.
    pub fn for_current_player(session: &GameSession) -> Self {
        let index = session.current_player_index;
        Self {
            dice: session.dice.to_vec(),
            has_rolled_this_turn: session.has_rolled_this_turn,
            target_score: session.target_score,
            opponent_best_total: session.opponent_best_total(index),
            me: session.current_player().clone(),
        }
    }

    pub fn available(&self) -> Vec<Die> {
        available(&self.dice)
    }

    pub fn scorable_available(&self) -> Vec<DieId> {
        scorable_dice_ids(&self.available())
    }

    pub fn turn_score(&self) -> u32 {
        self.me.turn_score
    }

    /// Points still missing to reach the target, saturating at zero.
    pub fn points_needed(&self) -> u32 {
        self.target_score.saturating_sub(self.me.total_score)
    }

    pub fn would_win_if_ended(&self) -> bool {
        self.me.total_score + self.me.turn_score >= self.target_score
    }

    pub fn opponent_points_needed(&self) -> u32 {
        self.target_score.saturating_sub(self.opponent_best_total)
    }
}
