//! Domain-level error type used by the rules engine and the game-flow service.
//!
//! This error type knows nothing about drivers or rendering. The command
//! surface in `services::game_flow` turns `Rejected` into a silent no-op;
//! everything else is surfaced to the host through `crate::error::EngineError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::dice::DieId;

/// Why an operation was refused by the turn state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RejectKind {
    /// The session already has a winner.
    GameOver,
    /// A roll is in flight; its completion has not been applied yet.
    RollInProgress,
    /// `roll` while `can_roll` is false.
    CannotRoll,
    /// Selection before the first roll of the turn.
    NotRolledYet,
    /// The turn busted; only ending it is allowed.
    Busted,
    /// Human input while a computer player owns the turn.
    AiTurn,
    /// The targeted die was committed by an earlier roll.
    DieLocked(DieId),
    /// No die with this id exists.
    UnknownDie(DieId),
    /// Completion stamped for an older roll or an earlier session.
    StaleRoll,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Illegal operation for the current state; callers treat it as a no-op.
    Rejected(RejectKind),
    /// Input validation or business rule violation.
    Validation(String),
    /// End-to-end invariant check failed; the session must not be used further.
    Corrupted(Vec<String>),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Rejected(kind) => write!(f, "rejected {kind:?}"),
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
            DomainError::Corrupted(v) => write!(f, "corrupted session: {}", v.join("; ")),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn rejected(kind: RejectKind) -> Self {
        Self::Rejected(kind)
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, DomainError::Rejected(_))
    }
}
