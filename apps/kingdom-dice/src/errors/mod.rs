//! Error handling for the Kingdom Dice engine.

pub mod domain;

pub use domain::{DomainError, RejectKind};
