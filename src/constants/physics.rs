//! World geometry and integration constants.

/// Edge length of one grid tile in pixels
pub const TILE_SIZE: f32 = 32.0;

/// The single tile id that entities may pass through
pub const PASSABLE_TILE_ID: i32 = 11;
/// Ids at or above this bound are clamped to solid (defensive)
pub const TILE_ID_LIMIT: i32 = 48;

/// Downward acceleration added to `air_speed` every airborne tick
pub const GRAVITY: f32 = 0.04;
/// Vertical speed forced after bumping a ceiling, so the entity re-descends
pub const FALL_SPEED_AFTER_COLLISION: f32 = 0.5;
/// How far below the hitbox bottom the floor probes sample
pub const FLOOR_PROBE_OFFSET: f32 = 1.0;
