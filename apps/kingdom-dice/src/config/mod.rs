//! Session setup and engine settings.

pub mod engine;
pub mod game;

pub use engine::{EngineSettings, IntegrityPolicy};
pub use game::{ConfigError, GameConfig, GameMode, ValidationReport};
