//! Runtime knobs for the game-flow service, read from the environment.

use std::env;
use std::time::Duration;

use crate::ai::AiFailureMode;
use crate::config::game::ConfigError;
use crate::domain::rules::ROLL_SETTLE;

pub const ROLL_SETTLE_ENV: &str = "KINGDOM_DICE_ROLL_SETTLE_MS";
pub const AI_PACING_ENV: &str = "KINGDOM_DICE_AI_PACING";
pub const INTEGRITY_ENV: &str = "KINGDOM_DICE_INTEGRITY";
pub const AI_FAILURE_ENV: &str = "KINGDOM_DICE_AI_FAILURE";

/// What the service does when a session fails its invariant check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityPolicy {
    /// Panic on violations (development and tests)
    Panic,
    /// Drop the session and report the error (production)
    DiscardSession,
}

impl IntegrityPolicy {
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::DiscardSession
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Delay between starting a roll and applying its faces.
    pub roll_settle: Duration,
    /// Whether the AI coordinator waits out the AI's thinking delay.
    pub ai_pacing: bool,
    pub integrity: IntegrityPolicy,
    pub ai_failure: AiFailureMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            roll_settle: ROLL_SETTLE,
            ai_pacing: true,
            integrity: IntegrityPolicy::for_build(),
            ai_failure: AiFailureMode::for_build(),
        }
    }
}

impl EngineSettings {
    /// Settings with no artificial delays, for simulations and tests.
    pub fn instant() -> Self {
        Self {
            roll_settle: Duration::ZERO,
            ai_pacing: false,
            ..Self::default()
        }
    }

    /// Read overrides from the environment; unset variables keep defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            roll_settle: roll_settle()?.unwrap_or(defaults.roll_settle),
            ai_pacing: ai_pacing()?.unwrap_or(defaults.ai_pacing),
            integrity: integrity()?.unwrap_or(defaults.integrity),
            ai_failure: ai_failure()?.unwrap_or(defaults.ai_failure),
        })
    }
}

fn roll_settle() -> Result<Option<Duration>, ConfigError> {
    optional_var(ROLL_SETTLE_ENV)
        .map(|raw| {
            raw.parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| invalid(ROLL_SETTLE_ENV, &raw, "milliseconds"))
        })
        .transpose()
}

fn ai_pacing() -> Result<Option<bool>, ConfigError> {
    optional_var(AI_PACING_ENV)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(invalid(AI_PACING_ENV, &raw, "a boolean")),
        })
        .transpose()
}

fn integrity() -> Result<Option<IntegrityPolicy>, ConfigError> {
    optional_var(INTEGRITY_ENV)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "panic" => Ok(IntegrityPolicy::Panic),
            "discard" => Ok(IntegrityPolicy::DiscardSession),
            _ => Err(invalid(INTEGRITY_ENV, &raw, "'panic' or 'discard'")),
        })
        .transpose()
}

fn ai_failure() -> Result<Option<AiFailureMode>, ConfigError> {
    optional_var(AI_FAILURE_ENV)
        .map(|raw| match raw.to_ascii_lowercase().as_str() {
            "panic" => Ok(AiFailureMode::Panic),
            "end-turn" | "end_turn" => Ok(AiFailureMode::FallbackEndTurn),
            _ => Err(invalid(AI_FAILURE_ENV, &raw, "'panic' or 'end-turn'")),
        })
        .transpose()
}

/// Get an environment variable, treating empty as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn invalid(name: &str, raw: &str, expected: &str) -> ConfigError {
    ConfigError::new(vec![format!(
        "Environment variable '{name}' must be {expected}, got '{raw}'"
    )])
}
