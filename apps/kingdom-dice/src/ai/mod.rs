//! AI player module - computer opponents for the dice game.
//!
//! This module provides:
//! - the `AiPlayer` trait every policy implements
//! - `EasyAi` and `HardAi`, seedable for tests and simulations
//! - a static registry and JSON config for choosing a policy

pub mod config;
mod easy;
mod hard;
pub mod registry;
mod trait_def;

pub use config::AiConfig;
pub use easy::EasyAi;
pub use hard::{bust_risk, HardAi};
use serde_json::Value as JsonValue;
pub use trait_def::{AiAction, AiDecision, AiError, AiPlayer, RiskInputs, NEAR_WIN_MARGIN};

use crate::domain::state::AiDifficulty;

/// AI failure mode - how the coordinator handles AI errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiFailureMode {
    /// Panic on errors (for tests)
    Panic,
    /// Bank whatever the turn holds and move on (for production)
    FallbackEndTurn,
}

impl AiFailureMode {
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::FallbackEndTurn
        }
    }
}

/// Create the policy for `difficulty`, seeded when `seed` is given.
pub fn create_ai(difficulty: AiDifficulty, seed: Option<u64>) -> Box<dyn AiPlayer> {
    match difficulty {
        AiDifficulty::Easy => Box::new(EasyAi::new(seed)),
        AiDifficulty::Hard => Box::new(HardAi::new(seed)),
    }
}

/// Create a policy from a JSON config such as `{"seed": 7, "difficulty": "hard"}`.
pub fn create_ai_from_config(config: Option<&JsonValue>) -> Box<dyn AiPlayer> {
    let config = AiConfig::from_json(config);
    create_ai(config.difficulty(), config.seed())
}
