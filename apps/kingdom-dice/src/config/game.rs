//! Validation of the setup record handed over by the menu collaborator.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::rules::{
    COMFORTABLE_TARGET_RANGE, DEFAULT_TARGET_SCORE, PLAYER_COUNT_RANGE, PVE_PLAYERS,
    TARGET_SCORE_RANGE,
};
use crate::domain::state::AiDifficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Humans only, sharing one device.
    Pvp,
    /// One human against one computer player.
    Pve,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    pub player_count: u8,
    pub target_score: u32,
    pub mode: GameMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_difficulty: Option<AiDifficulty>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            target_score: DEFAULT_TARGET_SCORE,
            mode: GameMode::Pvp,
            ai_difficulty: None,
        }
    }
}

impl GameConfig {
    pub fn pvp(player_count: u8, target_score: u32) -> Self {
        Self {
            player_count,
            target_score,
            mode: GameMode::Pvp,
            ai_difficulty: None,
        }
    }

    pub fn pve(target_score: u32, difficulty: AiDifficulty) -> Self {
        Self {
            player_count: PVE_PLAYERS,
            target_score,
            mode: GameMode::Pve,
            ai_difficulty: Some(difficulty),
        }
    }

    /// Seats actually created for this configuration.
    pub fn seat_count(&self) -> u8 {
        match self.mode {
            GameMode::Pvp => self.player_count,
            GameMode::Pve => PVE_PLAYERS,
        }
    }

    /// Difficulty of the computer seat; easy when the menu left it unset.
    pub fn effective_difficulty(&self) -> AiDifficulty {
        self.ai_difficulty.unwrap_or(AiDifficulty::Easy)
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if !PLAYER_COUNT_RANGE.contains(&self.player_count) {
            if self.player_count < *PLAYER_COUNT_RANGE.start() {
                report.errors.push(format!(
                    "At least {} players are required",
                    PLAYER_COUNT_RANGE.start()
                ));
            } else {
                report.errors.push(format!(
                    "Maximum {} players allowed",
                    PLAYER_COUNT_RANGE.end()
                ));
            }
        }

        if self.target_score < *TARGET_SCORE_RANGE.start() {
            report.errors.push(format!(
                "Target score must be at least {} points",
                TARGET_SCORE_RANGE.start()
            ));
        } else if self.target_score > *TARGET_SCORE_RANGE.end() {
            report.errors.push(format!(
                "Target score cannot exceed {} points",
                TARGET_SCORE_RANGE.end()
            ));
        } else if self.target_score < *COMFORTABLE_TARGET_RANGE.start() {
            report.warnings.push(format!(
                "Games with target scores below {} may be very short",
                COMFORTABLE_TARGET_RANGE.start()
            ));
        } else if self.target_score > *COMFORTABLE_TARGET_RANGE.end() {
            report.warnings.push(format!(
                "Games with target scores above {} may take a very long time",
                COMFORTABLE_TARGET_RANGE.end()
            ));
        }

        if self.mode == GameMode::Pve && self.player_count != PVE_PLAYERS {
            report.warnings.push(format!(
                "Player vs AI mode only supports {PVE_PLAYERS} players"
            ));
        }

        report
    }

    /// Validate and keep the warnings, or fail with every error message.
    pub fn check(&self) -> Result<ValidationReport, ConfigError> {
        let report = self.validate();
        if report.is_valid() {
            Ok(report)
        } else {
            Err(ConfigError::new(report.errors))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Setup rejected before any session was created.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid game configuration: {}", messages.join("; "))]
pub struct ConfigError {
    pub messages: Vec<String>,
}

impl ConfigError {
    pub fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }
}
