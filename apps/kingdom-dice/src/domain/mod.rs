//! Domain layer: pure game logic types and helpers.

pub mod dice;
pub mod dice_source;
pub mod game_transition;
pub mod history;
pub mod integrity;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod setup;
pub mod snapshot;
pub mod state;
pub mod turn;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_turn;

// Re-exports for ergonomics
pub use dice::{Die, DieId, Face};
pub use dice_source::{DiceSource, ScriptedDice, SeededDice};
pub use integrity::verify_session;
pub use player_view::TurnView;
pub use scoring::{has_any_score, scorable_dice_ids, score, ScoreBreakdown, ScoringCombination};
pub use seed_derivation::{derive_ai_seed, derive_dice_seed, derive_game_seed};
pub use setup::start_game;
pub use snapshot::{snapshot, GameSnapshot};
pub use state::{AiDifficulty, GameSession, Player, PlayerId, TurnPhase};
pub use turn::{Actor, RollOutcome, RollTicket, TurnSettlement};
