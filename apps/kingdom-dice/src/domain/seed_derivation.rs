//! RNG seed derivation for deterministic sessions.
//!
//! A single session seed fans out into independent streams for the dice and
//! for each computer seat, so replaying a seed replays the whole game.

/// Seed for the session's dice source.
pub fn derive_dice_seed(session_seed: u64) -> u64 {
    session_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1)
}

/// Seed for the AI seated at `player_index`.
///
/// Same session + seat = same decisions; different seats never share a stream.
pub fn derive_ai_seed(session_seed: u64, player_index: usize) -> u64 {
    session_seed
        .wrapping_add((player_index as u64).wrapping_mul(10_000))
        .wrapping_add(2) // offset from the dice stream
}

/// Seed for game `game_index` of a batch run.
pub fn derive_game_seed(batch_seed: u64, game_index: u64) -> u64 {
    batch_seed.wrapping_add(game_index.wrapping_mul(1_000_000))
}
