use tracing::info;

use super::{FlowState, GameFlowService};
use crate::ai::{create_ai, AiPlayer};
use crate::config::game::GameConfig;
use crate::domain::seed_derivation::{derive_ai_seed, derive_game_seed};
use crate::domain::setup::start_game;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::GameSession;
use crate::error::EngineError;

fn seat_policies(session: &GameSession, seed: Option<u64>) -> Vec<Option<Box<dyn AiPlayer>>> {
    session
        .players
        .iter()
        .enumerate()
        .map(|(index, p)| {
            p.ai_difficulty
                .filter(|_| p.is_ai)
                .map(|d| create_ai(d, seed.map(|s| derive_ai_seed(s, index))))
        })
        .collect()
}

impl GameFlowService {
    /// Validate `config` and replace any current session with a fresh one.
    pub fn start_game(&self, config: GameConfig) -> Result<GameSnapshot, EngineError> {
        let mut guard = self.state.lock();
        self.install(&mut guard, config)
    }

    /// Start over with the same setup as the current session.
    pub fn start_new_game(&self) -> Result<GameSnapshot, EngineError> {
        let mut guard = self.state.lock();
        let config = guard.config.clone().ok_or(EngineError::NoActiveSession)?;
        self.install(&mut guard, config)
    }

    /// Drop the session; the host goes back to its setup screen.
    pub fn return_to_menu(&self) {
        let mut state = self.state.lock();
        if state.session.take().is_some() {
            info!("returned to menu, session discarded");
        }
        state.ais.clear();
        state.transitions.clear();
        state.epoch += 1;
    }

    fn install(&self, state: &mut FlowState, config: GameConfig) -> Result<GameSnapshot, EngineError> {
        let session = start_game(&config, state.dice.as_mut())?;
        state.epoch += 1;
        let game_seed = state.seed.map(|s| derive_game_seed(s, state.epoch));
        state.ais = seat_policies(&session, game_seed);
        state.session = Some(session);
        state.config = Some(config);
        state.transitions.clear();
        self.enforce_integrity(state)?;

        state
            .session
            .as_ref()
            .map(snapshot)
            .ok_or(EngineError::NoActiveSession)
    }
}
