//! The top-level play state: one ECS world plus level and score
//! bookkeeping around it.

use hecs::{Entity, World};

use crate::events::EventQueue;
use crate::levels::LevelManager;
use crate::spawning::{spawn_enemies, spawn_player};

pub struct PlayState {
    pub world: World,
    pub player: Entity,
    pub levels: LevelManager,
    pub score: u32,
    pub events: EventQueue,
    /// Latched when the player's death animation finishes
    pub game_over: bool,
    pub paused: bool,
}

impl PlayState {
    pub fn new(levels: LevelManager) -> Self {
        let mut world = World::new();
        let player = load_level(&mut world, &levels);
        tracing::info!(level = levels.current_index(), "play state created");
        Self {
            world,
            player,
            levels,
            score: 0,
            events: EventQueue::new(),
            game_over: false,
            paused: false,
        }
    }

    /// Move to the next stage if it is unlocked, rebuilding the world
    pub fn next_level(&mut self) -> bool {
        if !self.levels.advance() {
            return false;
        }
        self.reload();
        true
    }

    /// Rebuild the current stage from scratch; score survives the retry
    pub fn restart_level(&mut self) {
        self.reload();
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    fn reload(&mut self) {
        self.world = World::new();
        self.player = load_level(&mut self.world, &self.levels);
        self.game_over = false;
        self.paused = false;
        tracing::info!(level = self.levels.current_index(), "level loaded");
    }
}

/// Populate a fresh world from the active level's spawn data
fn load_level(world: &mut World, levels: &LevelManager) -> Entity {
    let level = levels.current();
    let (x, y) = level.player_spawn;
    let player = spawn_player(world, x, y);
    spawn_enemies(world, &level.spawns);
    player
}
