//! End-to-end invariant checks a host may run after every mutation.
//!
//! A violation means an engine bug. Nothing here repairs state.

use std::collections::BTreeSet;

use crate::domain::rules::{DICE_COUNT, MAX_FACE, MIN_FACE};
use crate::domain::state::GameSession;
use crate::errors::domain::DomainError;

/// Every invariant violation found in `session`, in a stable order.
pub fn violations(session: &GameSession) -> Vec<String> {
    let mut out = Vec::new();

    if session.players.len() < 2 {
        out.push(format!(
            "expected at least 2 players, found {}",
            session.players.len()
        ));
    }
    if session.current_player_index >= session.players.len() {
        out.push(format!(
            "current player index {} out of bounds for {} players",
            session.current_player_index,
            session.players.len()
        ));
    }
    if session.target_score == 0 {
        out.push("target score must be positive".to_string());
    }

    let ids: BTreeSet<_> = session.dice.iter().map(|d| d.id as usize).collect();
    if ids.len() != DICE_COUNT || ids.iter().any(|&id| id >= DICE_COUNT) {
        out.push(format!("die ids must be 0..{DICE_COUNT}, found {ids:?}"));
    }
    for die in &session.dice {
        if !(MIN_FACE..=MAX_FACE).contains(&die.value) {
            out.push(format!("die {} has invalid face {}", die.id, die.value));
        }
        if die.is_held && die.is_locked {
            out.push(format!("die {} is both held and locked", die.id));
        }
    }

    let player_ids: BTreeSet<_> = session.players.iter().map(|p| p.id).collect();
    if player_ids.len() != session.players.len() {
        out.push("player ids must be unique".to_string());
    }

    let reached = session
        .players
        .iter()
        .any(|p| p.total_score >= session.target_score);
    match session.winner {
        Some(id) => match session.player(id) {
            Some(p) if p.total_score >= session.target_score => {}
            Some(p) => out.push(format!(
                "winner {} has {} points, below target {}",
                id, p.total_score, session.target_score
            )),
            None => out.push(format!("winner {id} is not seated")),
        },
        None if reached => out.push("a player reached the target but no winner is set".into()),
        None => {}
    }

    if session.is_busted && session.can_roll {
        out.push("busted turn must not allow rolling".to_string());
    }
    if !session.has_rolled_this_turn && session.dice.iter().any(|d| d.is_committed()) {
        out.push("dice committed before the first roll of the turn".to_string());
    }

    out
}

/// `Ok` when the session satisfies every invariant.
pub fn verify_session(session: &GameSession) -> Result<(), DomainError> {
    let found = violations(session);
    if found.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Corrupted(found))
    }
}
