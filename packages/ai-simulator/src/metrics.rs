//! Metrics collection and output for AI simulation results.

use kingdom_dice::domain::history::{stats, TurnOutcome};
use serde::Serialize;

use crate::simulator::{GameResult, TurnLog};
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: SimConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub turns: Vec<TurnMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimConfig {
    pub seats: Vec<String>,
    pub target_score: u32,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: Vec<u32>,
    pub winner: usize,
    pub turns_played: usize,
    pub actions: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TurnMetrics {
    pub seat: usize,
    pub rolls: u32,
    pub selections: u32,
    pub points: u32,
    pub hot_dice: u32,
    pub outcome: TurnOutcome,
}

impl From<&TurnLog> for TurnMetrics {
    fn from(log: &TurnLog) -> Self {
        Self {
            seat: log.seat,
            rolls: log.rolls,
            selections: log.selections,
            points: log.points,
            hot_dice: log.hot_dice,
            outcome: log.outcome,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: usize,
    pub ai_type: String,
    pub total_score: u32,
    pub turns: usize,
    pub busts: usize,
    pub hot_dice: usize,
    pub best_turn: u32,
    pub bust_pct: f64,
    pub avg_points_per_turn: f64,
    pub avg_rolls_per_turn: f64,
}

pub struct GameMetricsInput<'a> {
    pub game_id: u32,
    pub seed: u64,
    pub seats: &'a [String],
    pub target_score: u32,
    pub total_games: u32,
    pub duration_ms: f64,
    pub level: &'a MetricsLevel,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(input: GameMetricsInput<'_>, result: &GameResult) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let turns = match input.level {
        MetricsLevel::Detailed => result.turns.iter().map(TurnMetrics::from).collect(),
        MetricsLevel::Basic => Vec::new(),
    };

    let player_metrics = input
        .seats
        .iter()
        .enumerate()
        .map(|(seat, ai_type)| build_player_metrics(seat, ai_type, result))
        .collect();

    GameMetrics {
        game_id: input.game_id,
        seed: input.seed,
        timestamp,
        config: SimConfig {
            seats: input.seats.to_vec(),
            target_score: input.target_score,
            total_games: input.total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores(),
            winner: result.winner,
            turns_played: result.turns.len(),
            actions: result.actions,
            duration_ms: input.duration_ms,
        },
        turns,
        player_metrics,
    }
}

fn ratio(part: f64, whole: usize) -> f64 {
    if whole > 0 {
        part / whole as f64
    } else {
        0.0
    }
}

fn build_player_metrics(seat: usize, ai_type: &str, result: &GameResult) -> PlayerMetrics {
    let Some(player) = result.players.get(seat) else {
        return PlayerMetrics {
            seat,
            ai_type: ai_type.to_string(),
            total_score: 0,
            turns: 0,
            busts: 0,
            hot_dice: 0,
            best_turn: 0,
            bust_pct: 0.0,
            avg_points_per_turn: 0.0,
            avg_rolls_per_turn: 0.0,
        };
    };
    let summary = stats(&player.score_history);

    let turns_played = summary.turns;
    let rolls: u32 = result
        .turns
        .iter()
        .filter(|t| t.seat == seat)
        .map(|t| t.rolls)
        .sum();
    let busts = result
        .turns
        .iter()
        .filter(|t| t.seat == seat && t.outcome == TurnOutcome::Busted)
        .count();

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        total_score: player.total_score,
        turns: turns_played,
        busts,
        hot_dice: summary.hot_dice,
        best_turn: summary.best_turn,
        bust_pct: ratio(busts as f64 * 100.0, turns_played),
        avg_points_per_turn: ratio(f64::from(player.total_score), turns_played),
        avg_rolls_per_turn: ratio(f64::from(rolls), turns_played),
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: usize,
    pub target_score: u32,
    pub turns_played: usize,
    /// Final totals by seat, `;`-separated.
    pub scores: String,
    /// Difficulty by seat, `;`-separated.
    pub seats: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            target_score: metrics.config.target_score,
            turns_played: metrics.result.turns_played,
            scores: metrics
                .result
                .final_scores
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            seats: metrics.config.seats.join(";"),
        }
    }
}
