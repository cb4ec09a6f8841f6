use serde::{Deserialize, Serialize};

use crate::domain::dice::{fresh_dice, DiceSet};
use crate::domain::dice_source::DiceSource;
use crate::domain::history::{TurnOutcome, TurnRecord};
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 1-based, stable for the session

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    Easy,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Only grows, and only when points are banked.
    pub total_score: u32,
    /// Derived from held and locked dice; zero between turns.
    pub turn_score: u32,
    pub is_ai: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_difficulty: Option<AiDifficulty>,
    pub score_history: Vec<TurnRecord>,
}

impl Player {
    pub fn human(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            total_score: 0,
            turn_score: 0,
            is_ai: false,
            ai_difficulty: None,
            score_history: Vec::new(),
        }
    }

    pub fn computer(id: PlayerId, name: impl Into<String>, difficulty: AiDifficulty) -> Self {
        Self {
            is_ai: true,
            ai_difficulty: Some(difficulty),
            ..Self::human(id, name)
        }
    }

    /// Number of the turn this player is playing or about to play.
    ///
    /// A hot-dice bank does not settle the turn, so the records that follow it
    /// in the same turn share its number.
    pub fn current_turn_number(&self) -> u32 {
        match self.score_history.last() {
            Some(r) if r.outcome == TurnOutcome::HotDice => r.turn_number,
            Some(r) => r.turn_number + 1,
            None => 1,
        }
    }
}

/// Where the current turn stands. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TurnPhase {
    AwaitingFirstRoll,
    /// Dice are tumbling; the roll completion is pending.
    Rolling,
    /// Rolled, nothing held yet.
    AwaitingSelection,
    /// At least one die held; a roll is allowed.
    ReadyToRoll,
    /// Only `end_turn` is legal.
    Busted,
    Won,
}

/// Authoritative state of one game.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    pub dice: DiceSet,
    pub is_rolling: bool,
    pub can_roll: bool,
    pub has_rolled_this_turn: bool,
    /// The current turn busted and awaits `end_turn`.
    pub is_busted: bool,
    pub target_score: u32,
    pub winner: Option<PlayerId>,
    /// Bumped by every roll start and every settlement.
    pub roll_generation: u64,
}

impl GameSession {
    pub fn new(
        players: Vec<Player>,
        target_score: u32,
        source: &mut dyn DiceSource,
    ) -> Result<Self, DomainError> {
        if players.len() < 2 {
            return Err(DomainError::validation(format!(
                "a session needs at least 2 players, got {}",
                players.len()
            )));
        }
        if target_score == 0 {
            return Err(DomainError::validation("target score must be positive"));
        }
        Ok(Self {
            players,
            current_player_index: 0,
            dice: fresh_dice(source),
            is_rolling: false,
            can_roll: true,
            has_rolled_this_turn: false,
            is_busted: false,
            target_score,
            winner: None,
            roll_generation: 0,
        })
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.current_player_index]
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn winner_player(&self) -> Option<&Player> {
        self.winner.and_then(|id| self.player(id))
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.current_player().is_ai
    }

    /// Highest total among everyone except the player at `index`.
    pub fn opponent_best_total(&self, index: usize) -> u32 {
        self.players
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, p)| p.total_score)
            .max()
            .unwrap_or(0)
    }

    pub fn phase(&self) -> TurnPhase {
        if self.is_over() {
            TurnPhase::Won
        } else if self.is_rolling {
            TurnPhase::Rolling
        } else if !self.has_rolled_this_turn {
            TurnPhase::AwaitingFirstRoll
        } else if self.is_busted {
            TurnPhase::Busted
        } else if self.dice.iter().any(|d| d.is_held) {
            TurnPhase::ReadyToRoll
        } else {
            TurnPhase::AwaitingSelection
        }
    }
}

/// Index of the seat after `index`, wrapping.
#[inline]
pub fn next_player_index(index: usize, player_count: usize) -> usize {
    (index + 1) % player_count.max(1)
}
