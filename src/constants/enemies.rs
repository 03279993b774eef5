//! Per-kind enemy tuning, as one static table.
//!
//! Everything that distinguishes the two enemy kinds is data here, not code:
//! behavior modules branch on these fields instead of on the kind itself.

use crate::components::EnemyKind;

use super::physics::TILE_SIZE;

/// All the data needed to drive one enemy kind
#[derive(Clone, Copy)]
pub struct EnemyStats {
    /// Display name (for logs)
    pub name: &'static str,
    /// Maximum health
    pub max_health: i32,
    /// Hitbox width in pixels
    pub width: f32,
    /// Hitbox height in pixels
    pub height: f32,
    /// Horizontal patrol speed, pixels per tick
    pub walk_speed: f32,
    /// Horizontal speed while the attack animation plays
    pub attack_walk_speed: f32,
    /// Horizontal perception radius in pixels
    pub eyesight: f32,
    /// Horizontal distance at which an attack starts, in pixels
    pub attack_distance: f32,
    /// Points awarded when killed
    pub score: u32,
    /// ATTACK animation frame on which the hit check runs
    pub attack_hit_frame: u32,
    /// Refuse to advance while attacking if the player is inside the attack box
    pub locks_move_while_attacking: bool,
}

pub const SKELETON: EnemyStats = EnemyStats {
    name: "Skeleton",
    max_health: 3,
    width: 22.0,
    height: 27.0,
    walk_speed: 0.5,
    // Slow enough that the swing connects before the skeleton walks
    // past its target
    attack_walk_speed: 0.1,
    eyesight: TILE_SIZE * 5.0,
    attack_distance: TILE_SIZE,
    score: 100,
    attack_hit_frame: 5,
    locks_move_while_attacking: false,
};

pub const SKELETON_KING: EnemyStats = EnemyStats {
    name: "Skeleton King",
    max_health: 8,
    width: 28.0,
    height: 34.0,
    walk_speed: 0.35,
    attack_walk_speed: 0.15,
    eyesight: TILE_SIZE * 7.0,
    attack_distance: TILE_SIZE * 1.25,
    score: 300,
    attack_hit_frame: 8,
    locks_move_while_attacking: true,
};

/// Stats lookup for an enemy kind
pub const fn enemy_stats(kind: EnemyKind) -> &'static EnemyStats {
    match kind {
        EnemyKind::Skeleton => &SKELETON,
        EnemyKind::SkeletonKing => &SKELETON_KING,
    }
}
