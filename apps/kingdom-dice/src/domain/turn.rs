//! Turn state machine: rolling, holding, busting, hot dice, and settlement.
//!
//! Every function here mutates a `GameSession` in place and either applies its
//! whole effect or returns `DomainError::Rejected` without touching anything.

use tracing::{debug, info};

use crate::domain::dice::{available, fresh_dice, held_or_locked, unlocked, DieId};
use crate::domain::dice_source::DiceSource;
use crate::domain::history::{TurnOutcome, TurnRecord};
use crate::domain::scoring::{has_any_score, scorable_dice_ids, score};
use crate::domain::state::{next_player_index, GameSession, PlayerId};
use crate::errors::domain::{DomainError, RejectKind};

/// Who is asking for a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    /// Input from the human-facing command surface.
    Human,
    /// The AI coordinator acting for the current computer player.
    Ai,
}

/// Proof that a roll was started; required to apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollTicket {
    pub generation: u64,
    pub player_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// Unlocked dice contain points; the player selects next.
    Scored { scorable: Vec<DieId> },
    /// No scoring die among the unlocked dice; turn score lost.
    Busted,
    /// All six dice locked: points banked and six fresh dice dealt.
    HotDice { banked: u32, won: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSettlement {
    pub player_id: PlayerId,
    pub banked: u32,
    pub total_after: u32,
    pub busted: bool,
    pub won: bool,
    /// Seat now to act; unchanged when the game was won.
    pub next_player_index: usize,
}

fn reject<T>(kind: RejectKind) -> Result<T, DomainError> {
    Err(DomainError::rejected(kind))
}

/// Start a roll: checks legality and enters the `Rolling` phase.
pub fn begin_roll(session: &mut GameSession) -> Result<RollTicket, DomainError> {
    if session.is_over() {
        return reject(RejectKind::GameOver);
    }
    if session.is_rolling {
        return reject(RejectKind::RollInProgress);
    }
    if !session.can_roll {
        return reject(if session.is_busted {
            RejectKind::Busted
        } else {
            RejectKind::CannotRoll
        });
    }
    session.is_rolling = true;
    session.roll_generation += 1;
    Ok(RollTicket {
        generation: session.roll_generation,
        player_index: session.current_player_index,
    })
}

/// Apply the result of the roll identified by `ticket`.
pub fn complete_roll(
    session: &mut GameSession,
    ticket: RollTicket,
    source: &mut dyn DiceSource,
) -> Result<RollOutcome, DomainError> {
    if !session.is_rolling
        || ticket.generation != session.roll_generation
        || ticket.player_index != session.current_player_index
    {
        return reject(RejectKind::StaleRoll);
    }

    session.is_rolling = false;
    session.has_rolled_this_turn = true;
    session.can_roll = false;

    for die in session.dice.iter_mut() {
        die.is_scoring = false;
        if die.is_held {
            die.is_held = false;
            die.is_locked = true;
        } else if !die.is_locked {
            die.value = source.next_face();
        }
    }

    let rollable = unlocked(&session.dice);

    if rollable.is_empty() {
        return Ok(bank_hot_dice(session, source));
    }

    if !has_any_score(&rollable) {
        session.is_busted = true;
        session.current_player_mut().turn_score = 0;
        debug!(
            player = session.current_player().id,
            "roll busted, turn score forfeited"
        );
        return Ok(RollOutcome::Busted);
    }

    let scorable = scorable_dice_ids(&rollable);
    mark_scoring(session, &scorable);
    recompute_turn_score(session);
    Ok(RollOutcome::Scored { scorable })
}

/// Start and complete a roll in one step, for drivers without a settle delay.
pub fn roll(
    session: &mut GameSession,
    source: &mut dyn DiceSource,
) -> Result<RollOutcome, DomainError> {
    let ticket = begin_roll(session)?;
    complete_roll(session, ticket, source)
}

fn bank_hot_dice(session: &mut GameSession, source: &mut dyn DiceSource) -> RollOutcome {
    let breakdown = score(&held_or_locked(&session.dice));
    let banked = breakdown.total;
    let target = session.target_score;

    let player = session.current_player_mut();
    player.total_score += banked;
    player.turn_score = 0;
    let record = TurnRecord {
        turn_number: player.current_turn_number(),
        points: banked,
        total_after: player.total_score,
        outcome: TurnOutcome::HotDice,
        combinations: breakdown.combinations,
    };
    player.score_history.push(record);
    let (player_id, total) = (player.id, player.total_score);

    let won = total >= target;
    if won {
        session.winner = Some(player_id);
    }

    session.dice = fresh_dice(source);
    session.is_busted = false;
    let scorable = scorable_dice_ids(&session.dice);
    mark_scoring(session, &scorable);

    info!(player = player_id, banked, total, won, "hot dice banked");
    RollOutcome::HotDice { banked, won }
}

fn mark_scoring(session: &mut GameSession, scorable: &[DieId]) {
    for die in session.dice.iter_mut() {
        die.is_scoring = scorable.contains(&die.id);
    }
}

fn ensure_selectable(session: &GameSession, actor: Actor) -> Result<(), DomainError> {
    if session.is_over() {
        return reject(RejectKind::GameOver);
    }
    if session.is_rolling {
        return reject(RejectKind::RollInProgress);
    }
    if !session.has_rolled_this_turn {
        return reject(RejectKind::NotRolledYet);
    }
    if session.is_busted {
        return reject(RejectKind::Busted);
    }
    if actor == Actor::Human && session.current_player().is_ai {
        return reject(RejectKind::AiTurn);
    }
    Ok(())
}

/// Flip the hold flag of one die. Returns the new hold state.
pub fn toggle_hold(
    session: &mut GameSession,
    die_id: DieId,
    actor: Actor,
) -> Result<bool, DomainError> {
    ensure_selectable(session, actor)?;
    let Some(die) = session.dice.iter_mut().find(|d| d.id == die_id) else {
        return reject(RejectKind::UnknownDie(die_id));
    };
    if die.is_locked {
        return reject(RejectKind::DieLocked(die_id));
    }
    die.is_held = !die.is_held;
    let held = die.is_held;

    session.can_roll = session.dice.iter().any(|d| d.is_held);
    recompute_turn_score(session);
    Ok(held)
}

/// Hold every available die that scores. Returns the ids newly held.
pub fn auto_select_scoring(
    session: &mut GameSession,
    actor: Actor,
) -> Result<Vec<DieId>, DomainError> {
    ensure_selectable(session, actor)?;
    let ids = scorable_dice_ids(&available(&session.dice));
    for &id in &ids {
        toggle_hold(session, id, actor)?;
    }
    Ok(ids)
}

/// Recompute the current player's turn score from held and locked dice.
///
/// Idempotent. A busted turn always recomputes to zero.
pub fn recompute_turn_score(session: &mut GameSession) -> u32 {
    let points = if session.is_busted {
        0
    } else {
        score(&held_or_locked(&session.dice)).total
    };
    session.current_player_mut().turn_score = points;
    points
}

/// Bank the turn score, check for a winner, and pass the dice on.
pub fn end_turn(
    session: &mut GameSession,
    source: &mut dyn DiceSource,
) -> Result<TurnSettlement, DomainError> {
    if session.is_over() {
        return reject(RejectKind::GameOver);
    }
    if session.is_rolling {
        return reject(RejectKind::RollInProgress);
    }

    let busted = session.is_busted;
    let banked = recompute_turn_score(session);
    let combinations = if busted {
        Vec::new()
    } else {
        score(&held_or_locked(&session.dice)).combinations
    };
    let target = session.target_score;

    let player = session.current_player_mut();
    player.total_score += banked;
    player.turn_score = 0;
    let record = TurnRecord {
        turn_number: player.current_turn_number(),
        points: banked,
        total_after: player.total_score,
        outcome: if busted {
            TurnOutcome::Busted
        } else {
            TurnOutcome::Banked
        },
        combinations,
    };
    player.score_history.push(record);
    let (player_id, total_after) = (player.id, player.total_score);

    let won = total_after >= target;
    session.dice = fresh_dice(source);
    session.is_busted = false;
    session.has_rolled_this_turn = false;
    session.roll_generation += 1;

    if won {
        session.winner = Some(player_id);
        session.can_roll = false;
        info!(player = player_id, total = total_after, "game won");
    } else {
        session.current_player_index =
            next_player_index(session.current_player_index, session.players.len());
        session.can_roll = true;
        info!(player = player_id, banked, total = total_after, busted, "turn settled");
    }

    Ok(TurnSettlement {
        player_id,
        banked,
        total_after,
        busted,
        won,
        next_player_index: session.current_player_index,
    })
}
