//! In-memory game simulator for AI evaluation.
//!
//! Drives the turn state machine directly, without the game-flow service,
//! its pacing delays, or its settle delay. Every seat is a computer player.

use kingdom_dice::ai::{create_ai, AiAction, AiError, AiPlayer};
use kingdom_dice::domain::dice_source::SeededDice;
use kingdom_dice::domain::history::TurnOutcome;
use kingdom_dice::domain::player_view::TurnView;
use kingdom_dice::domain::seed_derivation::{derive_ai_seed, derive_dice_seed};
use kingdom_dice::domain::state::{AiDifficulty, GameSession, Player, PlayerId};
use kingdom_dice::domain::turn::{end_turn, roll, toggle_hold, Actor, RollOutcome};
use kingdom_dice::domain::verify_session;
use kingdom_dice::errors::domain::DomainError;
use kingdom_dice::GameConfig;

/// Upper bound on AI actions in one game.
const MAX_ACTIONS: usize = 100_000;

/// One whole turn as the simulator saw it, hot-dice banks included.
#[derive(Debug, Clone)]
pub struct TurnLog {
    pub seat: usize,
    pub rolls: u32,
    pub selections: u32,
    /// Everything banked during the turn.
    pub points: u32,
    pub hot_dice: u32,
    /// `HotDice` only when a hot-dice bank won the game.
    pub outcome: TurnOutcome,
}

#[derive(Debug, Clone)]
pub struct GameResult {
    pub players: Vec<Player>,
    pub winner: usize,
    pub turns: Vec<TurnLog>,
    pub actions: usize,
}

impl GameResult {
    pub fn final_scores(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.total_score).collect()
    }
}

pub struct Simulator {
    session: GameSession,
    dice: SeededDice,
    ais: Vec<Box<dyn AiPlayer>>,
    turns: Vec<TurnLog>,
    current: TurnLog,
}

fn fresh_log(seat: usize) -> TurnLog {
    TurnLog {
        seat,
        rolls: 0,
        selections: 0,
        points: 0,
        hot_dice: 0,
        outcome: TurnOutcome::Banked,
    }
}

fn seat_name(seat: usize, difficulty: AiDifficulty) -> String {
    match difficulty {
        AiDifficulty::Easy => format!("Seat {} (Easy)", seat + 1),
        AiDifficulty::Hard => format!("Seat {} (Hard)", seat + 1),
    }
}

impl Simulator {
    /// Seat one computer player per entry of `seats`.
    ///
    /// Dice and every AI derive their seeds from `game_seed`.
    pub fn new(
        game_seed: u64,
        seats: &[AiDifficulty],
        target_score: u32,
    ) -> Result<Self, SimulatorError> {
        let player_count = u8::try_from(seats.len())
            .map_err(|_| SimulatorError::Setup(format!("{} seats", seats.len())))?;
        GameConfig::pvp(player_count, target_score)
            .check()
            .map_err(|e| SimulatorError::Setup(e.to_string()))?;

        let players = seats
            .iter()
            .enumerate()
            .map(|(seat, &d)| Player::computer(seat as PlayerId + 1, seat_name(seat, d), d))
            .collect();
        let mut dice = SeededDice::new(derive_dice_seed(game_seed));
        let session = GameSession::new(players, target_score, &mut dice)?;
        let ais = seats
            .iter()
            .enumerate()
            .map(|(seat, &d)| create_ai(d, Some(derive_ai_seed(game_seed, seat))))
            .collect();

        Ok(Self {
            session,
            dice,
            ais,
            turns: Vec::new(),
            current: fresh_log(0),
        })
    }

    /// Play until someone reaches the target.
    pub fn simulate_game(mut self) -> Result<GameResult, SimulatorError> {
        let mut actions = 0;
        while !self.session.is_over() {
            if actions >= MAX_ACTIONS {
                return Err(SimulatorError::Stalled(actions));
            }
            actions += self.step()?;
            verify_session(&self.session)?;
        }

        let winner = self.session.current_player_index;
        Ok(GameResult {
            players: self.session.players,
            winner,
            turns: self.turns,
            actions,
        })
    }

    /// One top-level decision, plus the roll-or-end follow-up after a selection.
    fn step(&mut self) -> Result<usize, SimulatorError> {
        let seat = self.session.current_player_index;
        let view = TurnView::for_current_player(&self.session);
        let decision = self.ais[seat]
            .decide(&view)
            .map_err(|e| SimulatorError::Ai(seat, "decide", e))?;

        match decision.action {
            AiAction::SelectDice(ids) => {
                self.select(seat, &ids)?;
                let view = TurnView::for_current_player(&self.session);
                let follow_up = self.ais[seat]
                    .roll_or_end(&view)
                    .map_err(|e| SimulatorError::Ai(seat, "roll_or_end", e))?;
                self.apply(seat, follow_up.action)?;
                Ok(2)
            }
            action => {
                self.apply(seat, action)?;
                Ok(1)
            }
        }
    }

    fn select(&mut self, seat: usize, ids: &[u8]) -> Result<(), SimulatorError> {
        for &id in ids {
            toggle_hold(&mut self.session, id, Actor::Ai).map_err(|e| {
                SimulatorError::Ai(seat, "select_dice", AiError::InvalidMove(e.to_string()))
            })?;
        }
        self.current.selections += 1;
        Ok(())
    }

    fn apply(&mut self, seat: usize, action: AiAction) -> Result<(), SimulatorError> {
        let invalid =
            |e: DomainError| SimulatorError::Ai(seat, "apply", AiError::InvalidMove(e.to_string()));
        match action {
            AiAction::Roll => {
                let outcome = roll(&mut self.session, &mut self.dice).map_err(invalid)?;
                self.current.rolls += 1;
                if let RollOutcome::HotDice { banked, won } = outcome {
                    self.current.points += banked;
                    self.current.hot_dice += 1;
                    if won {
                        self.turns.push(TurnLog {
                            outcome: TurnOutcome::HotDice,
                            ..self.current.clone()
                        });
                    }
                }
            }
            AiAction::EndTurn => {
                let settlement = end_turn(&mut self.session, &mut self.dice).map_err(invalid)?;
                self.turns.push(TurnLog {
                    points: self.current.points + settlement.banked,
                    outcome: if settlement.busted {
                        TurnOutcome::Busted
                    } else {
                        TurnOutcome::Banked
                    },
                    ..self.current.clone()
                });
                self.current = fresh_log(settlement.next_player_index);
            }
            AiAction::SelectDice(ids) => {
                return Err(SimulatorError::Ai(
                    seat,
                    "roll_or_end",
                    AiError::InvalidMove(format!("selection {ids:?} where roll or end was due")),
                ));
            }
        }
        Ok(())
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// Seats or target rejected by setup validation
    Setup(String),
    /// AI returned an error or an action the turn machine refused
    Ai(usize, &'static str, AiError),
    /// Domain logic error
    Domain(DomainError),
    /// No winner after this many actions
    Stalled(usize),
}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::Setup(msg) => write!(f, "Invalid setup: {msg}"),
            SimulatorError::Ai(seat, action, err) => {
                write!(f, "AI error (seat {seat}, {action}): {err}")
            }
            SimulatorError::Domain(err) => write!(f, "Domain error: {err}"),
            SimulatorError::Stalled(n) => write!(f, "No winner after {n} actions"),
        }
    }
}

impl std::error::Error for SimulatorError {}
