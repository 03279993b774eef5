//! Player tuning constants.

/// Player hitbox width in pixels
pub const PLAYER_WIDTH: f32 = 20.0;
/// Player hitbox height in pixels
pub const PLAYER_HEIGHT: f32 = 27.0;
/// Player maximum health
pub const PLAYER_MAX_HEALTH: i32 = 3;

/// Horizontal speed while running, pixels per tick
pub const PLAYER_WALK_SPEED: f32 = 1.0;
/// Initial (upward, so negative) vertical speed of a jump
pub const JUMP_SPEED: f32 = -2.25;
/// Jumps allowed before the player must touch the ground again
pub const MAX_JUMPS: u32 = 3;

/// Extra horizontal speed while dashing, on top of the walk speed
pub const DASH_BONUS_SPEED: f32 = 1.25;
/// Extra width added to the occupancy probe while dashing
pub const DASH_PROBE_MARGIN: f32 = 5.0;
/// Sub-steps of the backward bounce when a dash hits a wall
pub const DASH_BOUNCE_STEPS: u32 = 5;
/// Horizontal nudge per bounce sub-step
pub const DASH_BOUNCE_BACK_STEP: f32 = 2.0;
/// Peak vertical lift of the bounce (falls off quadratically per sub-step)
pub const DASH_BOUNCE_LIFT: f32 = 3.0;

/// DRAW animation frame on which the arrow leaves the bow
pub const ARROW_SPAWN_FRAME: u32 = 5;
/// Vertical offset of the muzzle point from the hitbox top
pub const MUZZLE_OFFSET_Y: f32 = 8.0;
/// Smallest horizontal aim delta used when solving the arrow slope
pub const MIN_AIM_DX: f32 = 1e-4;
