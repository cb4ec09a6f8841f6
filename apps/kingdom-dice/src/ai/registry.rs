//! How to register your AI
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with stable `name` and `version`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: same seed ⇒ same behavior.

use crate::ai::{AiPlayer, EasyAi, HardAi};
use crate::domain::state::AiDifficulty;

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub difficulty: AiDifficulty,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: EasyAi::NAME,
        version: EasyAi::VERSION,
        difficulty: AiDifficulty::Easy,
        make: make_easy,
    },
    AiFactory {
        name: HardAi::NAME,
        version: HardAi::VERSION,
        difficulty: AiDifficulty::Hard,
        make: make_hard,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

/// The factory that plays at `difficulty`.
pub fn by_difficulty(difficulty: AiDifficulty) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.difficulty == difficulty)
}

fn make_easy(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(EasyAi::new(seed))
}

fn make_hard(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(HardAi::new(seed))
}
