//! Building a fresh session from a validated setup record.

use tracing::{info, warn};

use crate::config::game::{ConfigError, GameConfig, GameMode};
use crate::domain::dice_source::DiceSource;
use crate::domain::state::{AiDifficulty, GameSession, Player, PlayerId};

pub fn computer_name(difficulty: AiDifficulty) -> &'static str {
    match difficulty {
        AiDifficulty::Easy => "Computer (Easy)",
        AiDifficulty::Hard => "Computer (Hard)",
    }
}

/// Seats for `config`, in turn order.
pub fn seat_players(config: &GameConfig) -> Vec<Player> {
    match config.mode {
        GameMode::Pvp => (1..=config.player_count)
            .map(|id| Player::human(id as PlayerId, format!("Player {id}")))
            .collect(),
        GameMode::Pve => {
            let difficulty = config.effective_difficulty();
            vec![
                Player::human(1, "Player 1"),
                Player::computer(2, computer_name(difficulty), difficulty),
            ]
        }
    }
}

/// Validate `config` and create a session with fresh players and dice.
pub fn start_game(
    config: &GameConfig,
    source: &mut dyn DiceSource,
) -> Result<GameSession, ConfigError> {
    let report = config.check()?;
    for warning in &report.warnings {
        warn!(%warning, "game configuration warning");
    }
    let session = GameSession::new(seat_players(config), config.target_score, source)
        .map_err(|e| ConfigError::new(vec![e.to_string()]))?;
    info!(
        players = session.players.len(),
        target = session.target_score,
        mode = ?config.mode,
        "game started"
    );
    Ok(session)
}
