//! The single source of randomness for die faces.
//!
//! Scoring and transitions stay deterministic; only this module draws faces.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::dice::Face;
use crate::domain::rules::{MAX_FACE, MIN_FACE};
use crate::errors::domain::DomainError;

/// Produces uniformly distributed faces in `1..=6`.
pub trait DiceSource: Send {
    fn next_face(&mut self) -> Face;
}

/// Pseudorandom faces from a ChaCha8 stream.
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy via the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl DiceSource for SeededDice {
    fn next_face(&mut self) -> Face {
        self.rng.random_range(MIN_FACE..=MAX_FACE)
    }
}

/// Replays a fixed list of faces, starting over when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: Vec<Face>,
    pending: VecDeque<Face>,
}

impl ScriptedDice {
    pub fn new(script: Vec<Face>) -> Result<Self, DomainError> {
        if script.is_empty() {
            return Err(DomainError::validation("dice script must not be empty"));
        }
        if let Some(bad) = script.iter().find(|f| !(MIN_FACE..=MAX_FACE).contains(*f)) {
            return Err(DomainError::validation(format!(
                "dice script face {bad} outside {MIN_FACE}..={MAX_FACE}"
            )));
        }
        Ok(Self {
            pending: script.iter().copied().collect(),
            script,
        })
    }

    /// Queue more faces ahead of the remaining script.
    pub fn push_front(&mut self, faces: &[Face]) {
        for &f in faces.iter().rev() {
            self.pending.push_front(f.clamp(MIN_FACE, MAX_FACE));
        }
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl DiceSource for ScriptedDice {
    fn next_face(&mut self) -> Face {
        if self.pending.is_empty() {
            self.pending.extend(self.script.iter().copied());
        }
        self.pending.pop_front().unwrap_or(MIN_FACE)
    }
}
