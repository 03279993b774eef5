//! Game constants organized by domain.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.
//! Constants are split into submodules by domain for easier navigation.

mod animation;
mod enemies;
mod gameplay;
mod physics;
mod player;
mod projectile;
mod time;

// Re-export all constants at the module level
pub use animation::*;
pub use enemies::*;
pub use gameplay::*;
pub use physics::*;
pub use player::*;
pub use projectile::*;
pub use time::*;
