use tokio::time::sleep;

use super::GameFlowService;
use crate::domain::dice::DieId;
use crate::domain::turn::{
    auto_select_scoring, begin_roll, complete_roll, end_turn, toggle_hold, Actor, RollOutcome,
    TurnSettlement,
};
use crate::error::EngineError;

impl GameFlowService {
    /// Roll the unheld dice after the settle delay.
    ///
    /// `Ok(None)` when the roll is not legal now, or when the session was
    /// replaced while the dice were settling.
    pub async fn roll(&self) -> Result<Option<RollOutcome>, EngineError> {
        let Some((ticket, epoch)) = self.run_mutation_in_epoch(None, |s, _| begin_roll(s))? else {
            return Ok(None);
        };

        if !self.settings.roll_settle.is_zero() {
            sleep(self.settings.roll_settle).await;
        }

        Ok(self
            .run_mutation_in_epoch(Some(epoch), |s, dice| complete_roll(s, ticket, dice))?
            .map(|(outcome, _)| outcome))
    }

    /// Flip one die's hold flag from the human input path.
    ///
    /// Returns the die's new hold state, or `None` if the toggle was refused.
    pub fn toggle_hold(&self, die_id: DieId) -> Result<Option<bool>, EngineError> {
        self.run_mutation(|s, _| toggle_hold(s, die_id, Actor::Human))
    }

    /// Hold every scoring die that is still available.
    pub fn auto_select_scoring(&self) -> Result<Option<Vec<DieId>>, EngineError> {
        self.run_mutation(|s, _| auto_select_scoring(s, Actor::Human))
    }

    /// Bank the turn and pass play on.
    pub fn end_turn(&self) -> Result<Option<TurnSettlement>, EngineError> {
        self.run_mutation(end_turn)
    }
}
