//! Arrow tuning constants.

/// Diagonal travel speed of an arrow, pixels per tick, constant for any slope
pub const PROJECTILE_SPEED: f32 = 4.0;
/// Damage dealt by one arrow hit
pub const ARROW_DAMAGE: i32 = 1;
/// Arrow hitbox width in pixels
pub const ARROW_WIDTH: f32 = 16.0;
/// Arrow hitbox height in pixels
pub const ARROW_HEIGHT: f32 = 4.0;
