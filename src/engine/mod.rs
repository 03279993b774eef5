//! Play-state ownership and the per-tick simulation pipeline.

pub mod game_state;
pub mod simulation;

pub use game_state::PlayState;
pub use simulation::tick;
