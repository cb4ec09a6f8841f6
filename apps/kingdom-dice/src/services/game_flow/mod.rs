//! Game flow orchestration service - owns one session and drives it.
//!
//! Every command locks the session, applies one domain operation, checks the
//! result for integrity, and records the transitions it caused. Illegal
//! commands are no-ops: they come back as `Ok(None)` and are logged at debug.

mod ai_coordinator;
mod mutation;
mod player_actions;
mod session_lifecycle;

use std::sync::Arc;

use parking_lot::Mutex;

pub use ai_coordinator::AiStep;

use crate::ai::AiPlayer;
use crate::config::engine::EngineSettings;
use crate::config::game::GameConfig;
use crate::domain::dice_source::{DiceSource, SeededDice};
use crate::domain::game_transition::GameTransition;
use crate::domain::seed_derivation::derive_dice_seed;
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::GameSession;

pub(super) struct FlowState {
    pub(super) session: Option<GameSession>,
    /// Setup of the current session, reused by `start_new_game`.
    pub(super) config: Option<GameConfig>,
    /// Bumped whenever the session is replaced or dropped.
    pub(super) epoch: u64,
    pub(super) dice: Box<dyn DiceSource>,
    /// Policies by seat index; `None` for human seats.
    pub(super) ais: Vec<Option<Box<dyn AiPlayer>>>,
    pub(super) seed: Option<u64>,
    pub(super) transitions: Vec<GameTransition>,
}

/// Single-session game driver. Cheap to clone; clones share the session.
#[derive(Clone)]
pub struct GameFlowService {
    state: Arc<Mutex<FlowState>>,
    settings: EngineSettings,
}

impl GameFlowService {
    /// Service with OS-seeded dice and AIs.
    pub fn new(settings: EngineSettings) -> Self {
        Self::build(settings, Box::new(SeededDice::from_entropy()), None)
    }

    /// Fully reproducible service: dice and every AI derive from `seed`.
    pub fn with_seed(settings: EngineSettings, seed: u64) -> Self {
        Self::build(
            settings,
            Box::new(SeededDice::new(derive_dice_seed(seed))),
            Some(seed),
        )
    }

    /// Service with a caller-supplied dice source (scripted tests).
    ///
    /// `ai_seed` seeds the computer players when given.
    pub fn with_dice_source(
        settings: EngineSettings,
        dice: Box<dyn DiceSource>,
        ai_seed: Option<u64>,
    ) -> Self {
        Self::build(settings, dice, ai_seed)
    }

    fn build(settings: EngineSettings, dice: Box<dyn DiceSource>, seed: Option<u64>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FlowState {
                session: None,
                config: None,
                epoch: 0,
                dice,
                ais: Vec::new(),
                seed,
                transitions: Vec::new(),
            })),
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Read-only view of the active session, if any.
    pub fn snapshot(&self) -> Option<GameSnapshot> {
        self.state.lock().session.as_ref().map(snapshot)
    }

    pub fn has_session(&self) -> bool {
        self.state.lock().session.is_some()
    }

    /// True when a computer player is on turn in a live session.
    pub fn is_ai_turn(&self) -> bool {
        self.state
            .lock()
            .session
            .as_ref()
            .is_some_and(GameSession::is_ai_turn)
    }

    /// Transitions recorded since the last call, oldest first.
    pub fn drain_transitions(&self) -> Vec<GameTransition> {
        std::mem::take(&mut self.state.lock().transitions)
    }
}
