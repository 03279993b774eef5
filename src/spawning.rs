//! Data-driven entity spawning.
//!
//! Component bundles for the three entity shapes live here so every caller
//! (level load, attack commits, tests) builds identical entities.

use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{
    AnimationClock, Arrow, AttackBox, EnemyKind, EnemyPawn, Health, Hitbox, Kinematics, PlayerPawn,
};
use crate::constants::*;
use crate::systems::projectile::solve_x_speed;

/// One enemy to create when a level loads, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub x: f32,
    pub y: f32,
}

/// Spawn the player at the given top-left pixel position
pub fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world.spawn((
        Hitbox::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
        Health::new(PLAYER_MAX_HEALTH),
        Kinematics::new(),
        AnimationClock::new(),
        PlayerPawn::new(),
    ))
}

/// Spawn one enemy; all the kind-specific numbers come from the stats table
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, x: f32, y: f32) -> Entity {
    let stats = enemy_stats(kind);
    world.spawn((
        Hitbox::new(x, y, stats.width, stats.height),
        // Attack box gets repositioned relative to the hitbox every tick
        AttackBox(Hitbox::new(x, y, stats.width, stats.height)),
        Health::new(stats.max_health),
        Kinematics::new(),
        AnimationClock::new(),
        EnemyPawn::new(kind),
    ))
}

/// Spawn a level's whole enemy roster
pub fn spawn_enemies(world: &mut World, spawns: &[EnemySpawn]) {
    for spawn in spawns {
        spawn_enemy(world, spawn.kind, spawn.x, spawn.y);
    }
}

/// Spawn an arrow centered on the muzzle point, traveling along `slope`
pub fn spawn_arrow(world: &mut World, muzzle: Vec2, slope: f32, left: bool) -> Entity {
    world.spawn((
        Hitbox::new(
            muzzle.x - ARROW_WIDTH * 0.5,
            muzzle.y - ARROW_HEIGHT * 0.5,
            ARROW_WIDTH,
            ARROW_HEIGHT,
        ),
        Arrow {
            slope,
            x_speed: solve_x_speed(slope, left),
        },
        AnimationClock::new(),
    ))
}
