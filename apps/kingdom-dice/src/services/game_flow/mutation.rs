use tracing::{debug, error, warn};

use super::{FlowState, GameFlowService};
use crate::config::engine::IntegrityPolicy;
use crate::domain::dice_source::DiceSource;
use crate::domain::game_transition::derive_game_transitions;
use crate::domain::integrity::verify_session;
use crate::domain::snapshot::snapshot;
use crate::domain::state::GameSession;
use crate::error::EngineError;
use crate::errors::domain::{DomainError, RejectKind};

impl GameFlowService {
    /// Apply `mutation` to the active session under the lock.
    ///
    /// Rejections become `Ok(None)`. Successful mutations are checked for
    /// integrity and their transitions are queued for `drain_transitions`.
    pub(super) fn run_mutation<T, F>(&self, mutation: F) -> Result<Option<T>, EngineError>
    where
        F: FnOnce(&mut GameSession, &mut dyn DiceSource) -> Result<T, DomainError>,
    {
        Ok(self.run_mutation_in_epoch(None, mutation)?.map(|(value, _)| value))
    }

    /// Like `run_mutation`, but only while the session epoch equals
    /// `expected_epoch` (when given). Returns the epoch the mutation ran in.
    pub(super) fn run_mutation_in_epoch<T, F>(
        &self,
        expected_epoch: Option<u64>,
        mutation: F,
    ) -> Result<Option<(T, u64)>, EngineError>
    where
        F: FnOnce(&mut GameSession, &mut dyn DiceSource) -> Result<T, DomainError>,
    {
        let mut guard = self.state.lock();
        let state = &mut *guard;
        let epoch = state.epoch;
        if expected_epoch.is_some_and(|e| e != epoch) {
            warn!(expected = ?expected_epoch, epoch, "dropping completion from a replaced session");
            return Ok(None);
        }
        let Some(session) = state.session.as_mut() else {
            return Err(EngineError::NoActiveSession);
        };

        let before = snapshot(session);
        let value = match mutation(session, state.dice.as_mut()) {
            Ok(value) => value,
            Err(DomainError::Rejected(RejectKind::StaleRoll)) => {
                warn!(epoch, "dropping stale roll completion");
                return Ok(None);
            }
            Err(DomainError::Rejected(kind)) => {
                debug!(reason = ?kind, "operation rejected");
                return Ok(None);
            }
            Err(other) => return Err(other.into()),
        };
        let after = snapshot(session);

        self.enforce_integrity(state)?;

        let transitions = derive_game_transitions(&before, &after);
        for t in &transitions {
            debug!(transition = ?t, "game transition");
        }
        state.transitions.extend(transitions);
        Ok(Some((value, epoch)))
    }

    /// Verify the active session, applying the configured policy on failure.
    pub(super) fn enforce_integrity(&self, state: &mut FlowState) -> Result<(), EngineError> {
        let Some(session) = state.session.as_ref() else {
            return Ok(());
        };
        let Err(err) = verify_session(session) else {
            return Ok(());
        };

        error!(error = %err, policy = ?self.settings.integrity, "session failed integrity check");
        match self.settings.integrity {
            IntegrityPolicy::Panic => panic!("session integrity violated: {err}"),
            IntegrityPolicy::DiscardSession => {
                state.session = None;
                state.ais.clear();
                state.epoch += 1;
                Err(err.into())
            }
        }
    }
}
