//! Hard computer opponent: keeps every scoring die and weighs bust risk.

use std::sync::Mutex;
use std::time::Duration;

use rand::prelude::*;

use super::trait_def::{AiDecision, AiError, AiPlayer, RiskInputs};
use crate::domain::dice::DieId;
use crate::domain::player_view::TurnView;

/// Estimated chance that pushing on loses the turn, by turn score.
pub fn bust_risk(turn_score: u32) -> f64 {
    match turn_score {
        0..=199 => 0.2,
        200..=399 => 0.35,
        400..=599 => 0.5,
        600..=799 => 0.65,
        _ => 0.8,
    }
}

pub struct HardAi {
    rng: Mutex<StdRng>,
}

impl HardAi {
    pub const NAME: &'static str = "HardAi";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn chance(&self, p: f64) -> Result<bool, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(rng.random_bool(p))
    }
}

impl AiPlayer for HardAi {
    fn select_dice(&self, _view: &TurnView, scorable: &[DieId]) -> Result<AiDecision, AiError> {
        if scorable.is_empty() {
            return Err(AiError::InvalidMove("no scorable dice to select".into()));
        }
        Ok(AiDecision::select(
            scorable.to_vec(),
            "Hard AI selecting all scoring dice for optimal play",
        ))
    }

    fn roll_or_end(&self, view: &TurnView) -> Result<AiDecision, AiError> {
        let inputs = RiskInputs::from_view(view);
        let turn = inputs.turn_score;

        if inputs.would_win_if_ended {
            return Ok(AiDecision::end_turn("Hard AI can win this turn"));
        }
        // Compare doubled to keep the half-way mark exact.
        if inputs.near_win && turn * 2 >= inputs.points_needed && self.chance(0.7)? {
            return Ok(AiDecision::roll("Hard AI being aggressive near victory"));
        }
        if inputs.opponent_near_win && turn < 600 {
            return Ok(AiDecision::roll(
                "Hard AI being aggressive due to opponent threat",
            ));
        }

        let risk = bust_risk(turn);
        if turn >= 1000 {
            return Ok(AiDecision::end_turn("Hard AI satisfied with excellent score"));
        }
        if turn >= 600 && !self.chance(1.0 - risk)? {
            return Ok(AiDecision::end_turn("Hard AI managing risk with good score"));
        }
        if turn >= 300 && risk > 0.6 {
            return Ok(AiDecision::end_turn("Hard AI avoiding high bust risk"));
        }
        Ok(AiDecision::roll("Hard AI calculated risk as acceptable"))
    }

    fn action_delay(&self) -> Duration {
        let ms = self
            .rng
            .lock()
            .map(|mut rng| rng.random_range(1500..=3500))
            .unwrap_or(1500);
        Duration::from_millis(ms)
    }
}
