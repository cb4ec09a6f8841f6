//! Game-flow services wired for deterministic tests.

use kingdom_dice::ai::AiFailureMode;
use kingdom_dice::config::engine::{EngineSettings, IntegrityPolicy};
use kingdom_dice::domain::dice::Face;
use kingdom_dice::domain::dice_source::ScriptedDice;
use kingdom_dice::GameFlowService;

/// Real delays (run under a paused clock), strict failure handling.
pub fn strict_settings() -> EngineSettings {
    EngineSettings {
        integrity: IntegrityPolicy::Panic,
        ai_failure: AiFailureMode::Panic,
        ..EngineSettings::default()
    }
}

/// Service whose dice replay `faces` in a loop.
pub fn scripted_service(faces: &[Face]) -> GameFlowService {
    let dice = ScriptedDice::new(faces.to_vec()).expect("script faces are 1..=6");
    GameFlowService::with_dice_source(strict_settings(), Box::new(dice), Some(7))
}

pub fn seeded_service(seed: u64) -> GameFlowService {
    GameFlowService::with_seed(strict_settings(), seed)
}
