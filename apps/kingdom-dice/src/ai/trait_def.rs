//! AI player trait definition.

use std::fmt;
use std::time::Duration;

use crate::domain::dice::DieId;
use crate::domain::player_view::TurnView;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an action the turn machine cannot apply
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// One move a computer player can make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiAction {
    Roll,
    EndTurn,
    /// Hold these available dice.
    SelectDice(Vec<DieId>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiDecision {
    pub action: AiAction,
    /// Short human-readable note for logs.
    pub reasoning: &'static str,
}

impl AiDecision {
    pub fn roll(reasoning: &'static str) -> Self {
        Self {
            action: AiAction::Roll,
            reasoning,
        }
    }

    pub fn end_turn(reasoning: &'static str) -> Self {
        Self {
            action: AiAction::EndTurn,
            reasoning,
        }
    }

    pub fn select(ids: Vec<DieId>, reasoning: &'static str) -> Self {
        Self {
            action: AiAction::SelectDice(ids),
            reasoning,
        }
    }
}

/// Figures a roll-or-end policy works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskInputs {
    pub turn_score: u32,
    pub would_win_if_ended: bool,
    pub points_needed: u32,
    pub near_win: bool,
    pub opponent_near_win: bool,
}

/// Distance to the target under which a player counts as close to winning.
pub const NEAR_WIN_MARGIN: u32 = 1000;

impl RiskInputs {
    pub fn from_view(view: &TurnView) -> Self {
        let points_needed = view.points_needed();
        Self {
            turn_score: view.turn_score(),
            would_win_if_ended: view.would_win_if_ended(),
            points_needed,
            near_win: points_needed <= NEAR_WIN_MARGIN,
            opponent_near_win: view.opponent_points_needed() <= NEAR_WIN_MARGIN,
        }
    }
}

/// Trait for AI players.
///
/// Implementations receive a fresh [`TurnView`] per call and return one
/// decision. They never touch the session directly; the coordinator applies
/// the action through the same operations a human uses.
pub trait AiPlayer: Send + Sync {
    /// Choose which of the scorable available dice to hold.
    ///
    /// `scorable` is non-empty and ascending.
    fn select_dice(&self, view: &TurnView, scorable: &[DieId]) -> Result<AiDecision, AiError>;

    /// Decide between rolling again and banking the turn.
    fn roll_or_end(&self, view: &TurnView) -> Result<AiDecision, AiError>;

    /// Advisory thinking time before the next action is applied.
    fn action_delay(&self) -> Duration;

    /// Top-level decision for the current point of the turn.
    fn decide(&self, view: &TurnView) -> Result<AiDecision, AiError> {
        if !view.has_rolled_this_turn {
            return Ok(AiDecision::roll("Starting turn with a roll"));
        }
        if view.available().is_empty() {
            return self.roll_or_end(view);
        }
        let scorable = view.scorable_available();
        if scorable.is_empty() {
            return Ok(AiDecision::end_turn("No scoring dice available"));
        }
        self.select_dice(view, &scorable)
    }
}
