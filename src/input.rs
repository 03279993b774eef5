//! Input intents consumed by the simulation.
//!
//! The window shell translates raw key/mouse events into this struct
//! between ticks; the core only ever reads already-captured booleans and
//! points. Held intents are plain fields, edge intents are queued and
//! consumed with `take_*` so a tick sees each press exactly once.

use glam::Vec2;

/// Captured input state for the current tick
#[derive(Debug, Default)]
pub struct InputState {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Jump held (the controller edges this itself)
    pub jump: bool,
    dash_queued: bool,
    pause_queued: bool,
    fire_held: bool,
    aim: Vec2,
    commit: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dash is a toggle: one queued press flips the dash flag once
    pub fn press_dash(&mut self) {
        self.dash_queued = true;
    }

    pub fn take_dash(&mut self) -> bool {
        std::mem::take(&mut self.dash_queued)
    }

    pub fn press_pause(&mut self) {
        self.pause_queued = true;
    }

    pub fn take_pause(&mut self) -> bool {
        std::mem::take(&mut self.pause_queued)
    }

    /// Primary fire pressed: start aiming at a world-space point
    pub fn press_fire(&mut self, at: Vec2) {
        self.fire_held = true;
        self.aim = at;
    }

    /// Aim point moved while fire is held
    pub fn drag_aim(&mut self, at: Vec2) {
        if self.fire_held {
            self.aim = at;
        }
    }

    /// Primary fire released: commit the shot at the last aimed point
    pub fn release_fire(&mut self) {
        if self.fire_held {
            self.fire_held = false;
            self.commit = Some(self.aim);
        }
    }

    /// Aim preview while fire is held (facing follows this immediately)
    pub fn aim_preview(&self) -> Option<Vec2> {
        self.fire_held.then_some(self.aim)
    }

    /// Take the committed shot target, if a release happened
    pub fn take_fire_commit(&mut self) -> Option<Vec2> {
        self.commit.take()
    }
}
