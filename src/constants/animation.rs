//! Animation pacing and frame-count tables.
//!
//! Frame counts are static data indexed by enum discriminant so adding a
//! state or kind is a table edit, not new control flow. States outside the
//! tables fall back to a single frame.

use crate::components::{EnemyKind, EnemyState, PlayerState};

/// Ticks between animation frame advances (8 fps at 200 UPS)
pub const ANI_SPEED: u32 = 25;

/// Frames in each player animation, indexed by `PlayerState as usize`
pub const PLAYER_FRAME_COUNTS: [u32; 8] = [
    6, // Idle
    8, // Running
    4, // JumpStart
    2, // Fall
    8, // Draw
    4, // Dash
    4, // Damage
    8, // Die
];

/// Frames in each enemy animation, indexed by
/// `[EnemyKind as usize][EnemyState as usize]`
pub const ENEMY_FRAME_COUNTS: [[u32; 5]; 2] = [
    // Skeleton: Idle, Running, Attack, Hit, Dead
    [4, 6, 8, 4, 8],
    // Skeleton King
    [6, 6, 11, 4, 10],
];

/// Frames in the arrow's spin cycle
pub const ARROW_FRAME_COUNT: u32 = 4;

/// Frame count for a player state (never 0)
pub fn player_frame_count(state: PlayerState) -> u32 {
    PLAYER_FRAME_COUNTS
        .get(state as usize)
        .copied()
        .unwrap_or(1)
        .max(1)
}

/// Frame count for an enemy kind/state pair (never 0)
pub fn enemy_frame_count(kind: EnemyKind, state: EnemyState) -> u32 {
    ENEMY_FRAME_COUNTS
        .get(kind as usize)
        .and_then(|row| row.get(state as usize))
        .copied()
        .unwrap_or(1)
        .max(1)
}
