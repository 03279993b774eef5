//! Scoring and level-roster constants.

/// Bonus awarded once when every enemy in a level is gone
pub const LEVEL_CLEAR_BONUS: u32 = 500;

/// Spawn-layer code for a basic skeleton
pub const SKELETON_SPAWN_CODE: i32 = 1;
/// Spawn-layer code for a skeleton king
pub const SKELETON_KING_SPAWN_CODE: i32 = 2;
/// Spawn-layer code for the player start position
pub const PLAYER_SPAWN_CODE: i32 = 9;
