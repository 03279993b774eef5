//! Per-tick simulation systems.

pub mod enemy;
pub mod movement;
pub mod player;
pub mod projectile;
pub mod snapshot;

pub use movement::VerticalEvent;
pub use snapshot::{HudSnapshot, RenderEntity, SpriteKind};
