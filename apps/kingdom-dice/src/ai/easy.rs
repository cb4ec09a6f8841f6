//! Easy computer opponent: cautious, and sloppy about which dice it keeps.

use std::sync::Mutex;
use std::time::Duration;

use rand::prelude::*;

use super::trait_def::{AiDecision, AiError, AiPlayer, RiskInputs};
use crate::domain::dice::DieId;
use crate::domain::player_view::TurnView;

const MISTAKE_CHANCE: f64 = 0.3;
const PARTIAL_SHARE: f64 = 0.6;

/// Conservative policy with some random caution and selection mistakes.
///
/// Decisions draw from a seeded `StdRng`; the same seed replays the same game.
pub struct EasyAi {
    rng: Mutex<StdRng>,
}

impl EasyAi {
    pub const NAME: &'static str = "EasyAi";
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

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(f(&mut rng))
    }
}

/// First ⌈60%⌉ of the scorable ids, at least one.
fn partial_selection(scorable: &[DieId]) -> Vec<DieId> {
    let take = ((scorable.len() as f64) * PARTIAL_SHARE).ceil() as usize;
    scorable[..take.clamp(1, scorable.len())].to_vec()
}

impl AiPlayer for EasyAi {
    fn select_dice(&self, _view: &TurnView, scorable: &[DieId]) -> Result<AiDecision, AiError> {
        if scorable.is_empty() {
            return Err(AiError::InvalidMove("no scorable dice to select".into()));
        }
        let mistake = self.with_rng(|rng| rng.random_bool(MISTAKE_CHANCE))?;
        if mistake {
            Ok(AiDecision::select(
                partial_selection(scorable),
                "Easy AI making conservative choice",
            ))
        } else {
            Ok(AiDecision::select(
                scorable.to_vec(),
                "Easy AI selecting available scoring dice",
            ))
        }
    }

    fn roll_or_end(&self, view: &TurnView) -> Result<AiDecision, AiError> {
        let inputs = RiskInputs::from_view(view);
        let turn = inputs.turn_score;

        if inputs.would_win_if_ended {
            return Ok(AiDecision::end_turn("Easy AI can win this turn"));
        }
        if turn >= 800 {
            return Ok(AiDecision::end_turn(
                "Easy AI being conservative with good score",
            ));
        }
        if turn >= 400 && self.with_rng(|rng| rng.random_bool(0.4))? {
            return Ok(AiDecision::end_turn("Easy AI randomly being cautious"));
        }
        if turn >= 200 && self.with_rng(|rng| rng.random_bool(0.2))? {
            return Ok(AiDecision::end_turn(
                "Easy AI making overly conservative choice",
            ));
        }
        Ok(AiDecision::roll("Easy AI continuing to roll"))
    }

    fn action_delay(&self) -> Duration {
        let ms = self
            .with_rng(|rng| rng.random_range(1000..=2500))
            .unwrap_or(1000);
        Duration::from_millis(ms)
    }
}
