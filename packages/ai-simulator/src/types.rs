//! Shared types for the simulator.

use clap::ValueEnum;
use kingdom_dice::domain::state::AiDifficulty;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per game plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Easy,
    Hard,
}

impl AiType {
    pub fn difficulty(self) -> AiDifficulty {
        match self {
            AiType::Easy => AiDifficulty::Easy,
            AiType::Hard => AiDifficulty::Hard,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AiType::Easy => "easy",
            AiType::Hard => "hard",
        }
    }
}
