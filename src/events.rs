//! Game event system for decoupled communication between systems.
//!
//! Simulation systems emit events, collaborators (audio, VFX, UI) consume
//! them after the tick. Nothing in the core subscribes back.

use hecs::Entity;

use crate::components::EnemyKind;

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// The player released a shot and an arrow entered the world
    ArrowFired { x: f32, y: f32, slope: f32 },
    /// An arrow hit a wall or left the world
    ArrowBroke { x: f32, y: f32 },
    /// An arrow damaged an enemy
    ProjectileHit { enemy: Entity, damage: i32 },
    /// An enemy's melee attack connected with the player
    PlayerHurt { remaining: i32 },
    /// Player health reached zero
    PlayerDied,
    /// An enemy took damage but survived
    EnemyHurt { enemy: Entity, remaining: i32 },
    /// An enemy's health reached zero
    EnemyDied {
        enemy: Entity,
        kind: EnemyKind,
        score: u32,
        position: (f32, f32),
    },
    /// Every enemy in the level is gone; bonus awarded exactly once
    LevelCompleted { level: usize, bonus: u32 },
    /// The player's death animation finished (one-way latch upstream)
    GameOver,
}

/// Simple event queue - events are pushed during update, processed at end
/// of frame
#[derive(Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
