use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::GameFlowService;
use crate::ai::{AiAction, AiDecision, AiError, AiFailureMode};
use crate::domain::dice::DieId;
use crate::domain::player_view::TurnView;
use crate::domain::state::PlayerId;
use crate::domain::turn::{toggle_hold, Actor};
use crate::error::EngineError;
use crate::errors::domain::DomainError;

/// Upper bound on actions in one computer turn; a policy that never stops
/// is reported as an AI failure.
const MAX_AI_STEPS: usize = 500;

/// One applied AI action and, after a selection, the follow-up decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiStep {
    pub player_id: PlayerId,
    pub decision: AiDecision,
    pub follow_up: Option<AiDecision>,
}

struct Pending {
    epoch: u64,
    player_id: PlayerId,
    decision: AiDecision,
    delay: Duration,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Ask {
    Decide,
    RollOrEnd,
}

impl GameFlowService {
    /// Consult the policy of the computer player on turn, under the lock.
    fn consult(&self, ask: Ask) -> Result<Option<Pending>, EngineError> {
        let state = self.state.lock();
        let Some(session) = state.session.as_ref() else {
            return Err(EngineError::NoActiveSession);
        };
        if !session.is_ai_turn() || session.is_rolling {
            return Ok(None);
        }
        let index = session.current_player_index;
        let Some(Some(ai)) = state.ais.get(index) else {
            return Err(AiError::Internal(format!("no policy seated at index {index}")).into());
        };

        let view = TurnView::for_current_player(session);
        let decision = match ask {
            Ask::Decide => ai.decide(&view)?,
            Ask::RollOrEnd => ai.roll_or_end(&view)?,
        };
        debug!(
            player = view.me.id,
            action = ?decision.action,
            reasoning = decision.reasoning,
            "AI decided"
        );
        Ok(Some(Pending {
            epoch: state.epoch,
            player_id: view.me.id,
            decision,
            delay: ai.action_delay(),
        }))
    }

    /// Wait out the AI's thinking time. False if the session changed meanwhile.
    async fn pace(&self, pending: &Pending) -> bool {
        if self.settings.ai_pacing && !pending.delay.is_zero() {
            sleep(pending.delay).await;
        }
        self.state.lock().epoch == pending.epoch
    }

    /// Hold `ids` for the computer player; every id must be available.
    fn apply_selection(&self, ids: &[DieId]) -> Result<(), EngineError> {
        let applied = self.run_mutation(|session, _| {
            let all_available = ids
                .iter()
                .all(|&id| session.dice.iter().any(|d| d.id == id && d.is_available()));
            if ids.is_empty() || !all_available {
                return Err(DomainError::validation(format!(
                    "dice {ids:?} are not all available"
                )));
            }
            for &id in ids {
                toggle_hold(session, id, Actor::Ai)?;
            }
            Ok(())
        });
        match applied {
            Ok(Some(())) => Ok(()),
            Ok(None) => Err(AiError::InvalidMove(format!("selection {ids:?} was refused")).into()),
            Err(EngineError::Domain(DomainError::Validation(msg))) => {
                Err(AiError::InvalidMove(msg).into())
            }
            Err(e) => Err(e),
        }
    }

    async fn apply(&self, action: &AiAction) -> Result<(), EngineError> {
        let applied = match action {
            AiAction::SelectDice(ids) => return self.apply_selection(ids),
            AiAction::Roll => self.roll().await?.is_some(),
            AiAction::EndTurn => self.end_turn()?.is_some(),
        };
        if applied {
            Ok(())
        } else {
            Err(AiError::InvalidMove(format!("{action:?} was refused")).into())
        }
    }

    /// AI errors follow the failure mode; anything else propagates.
    fn recover(&self, err: EngineError) -> Result<(), EngineError> {
        if !matches!(err, EngineError::Ai(_)) {
            return Err(err);
        }
        match self.settings.ai_failure {
            AiFailureMode::Panic => panic!("{err}"),
            AiFailureMode::FallbackEndTurn => {
                warn!(error = %err, "AI failed, ending its turn");
                self.end_turn()?;
                Ok(())
            }
        }
    }

    /// Let the computer player on turn make one move.
    ///
    /// A selection is followed at once by the same policy's roll-or-end
    /// decision, so one step always leaves the turn able to progress.
    /// Returns `None` when no computer player is on turn.
    pub async fn play_ai_step(&self) -> Result<Option<AiStep>, EngineError> {
        let pending = match self.consult(Ask::Decide) {
            Ok(Some(p)) => p,
            Ok(None) => return Ok(None),
            Err(e) => {
                self.recover(e)?;
                return Ok(None);
            }
        };
        if !self.pace(&pending).await {
            debug!("session replaced while the AI was thinking");
            return Ok(None);
        }
        if let Err(e) = self.apply(&pending.decision.action).await {
            self.recover(e)?;
            return Ok(None);
        }

        let mut follow_up = None;
        if matches!(pending.decision.action, AiAction::SelectDice(_)) {
            let next = match self.consult(Ask::RollOrEnd) {
                Ok(next) => next,
                Err(e) => {
                    self.recover(e)?;
                    None
                }
            };
            if let Some(next) = next {
                if !self.pace(&next).await {
                    return Ok(None);
                }
                if let Err(e) = self.apply(&next.decision.action).await {
                    self.recover(e)?;
                }
                follow_up = Some(next.decision);
            }
        }

        Ok(Some(AiStep {
            player_id: pending.player_id,
            decision: pending.decision,
            follow_up,
        }))
    }

    /// Play computer moves until a human is on turn or the game ends.
    pub async fn play_ai_turn(&self) -> Result<Vec<AiStep>, EngineError> {
        let mut steps = Vec::new();
        while let Some(step) = self.play_ai_step().await? {
            steps.push(step);
            if steps.len() >= MAX_AI_STEPS {
                return Err(AiError::Internal(format!(
                    "AI still on turn after {MAX_AI_STEPS} actions"
                ))
                .into());
            }
        }
        if let Some(last) = steps.last() {
            info!(player = last.player_id, actions = steps.len(), "AI turn finished");
        }
        Ok(steps)
    }
}
