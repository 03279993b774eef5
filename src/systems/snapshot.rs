//! Read-only views of the simulation for a presentation layer.
//!
//! The simulation never draws; a renderer polls these snapshots between
//! ticks and decides what sprites and HUD widgets mean on its own.

use hecs::World;

use crate::components::{
    AnimationClock, Arrow, EnemyKind, EnemyPawn, Hitbox, PlayerPawn,
};
use crate::engine::PlayState;

/// Which sprite sheet a render entity comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Player,
    Enemy(EnemyKind),
    Arrow,
}

/// One drawable entity, in pixel coordinates
#[derive(Debug, Clone, Copy)]
pub struct RenderEntity {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub kind: SpriteKind,
    /// Animation row, the state's discriminant
    pub state_id: u32,
    /// Current frame within that row
    pub frame: u32,
    /// -1.0 when facing left, 1.0 when facing right
    pub flip: f32,
}

/// Everything drawable this tick, in no particular order
pub fn collect_render_entities(world: &World) -> Vec<RenderEntity> {
    let mut out = Vec::new();

    for (_, (pawn, hitbox, clock)) in
        world.query::<(&PlayerPawn, &Hitbox, &AnimationClock)>().iter()
    {
        out.push(RenderEntity {
            x: hitbox.x,
            y: hitbox.y,
            w: hitbox.w,
            h: hitbox.h,
            kind: SpriteKind::Player,
            state_id: pawn.state as u32,
            frame: clock.index,
            flip: pawn.flip_w,
        });
    }

    for (_, (pawn, hitbox, clock)) in
        world.query::<(&EnemyPawn, &Hitbox, &AnimationClock)>().iter()
    {
        out.push(RenderEntity {
            x: hitbox.x,
            y: hitbox.y,
            w: hitbox.w,
            h: hitbox.h,
            kind: SpriteKind::Enemy(pawn.kind),
            state_id: pawn.state as u32,
            frame: clock.index,
            flip: pawn.walk_dir,
        });
    }

    for (_, (arrow, hitbox, clock)) in
        world.query::<(&Arrow, &Hitbox, &AnimationClock)>().iter()
    {
        out.push(RenderEntity {
            x: hitbox.x,
            y: hitbox.y,
            w: hitbox.w,
            h: hitbox.h,
            kind: SpriteKind::Arrow,
            state_id: 0,
            frame: clock.index,
            flip: if arrow.x_speed < 0.0 { -1.0 } else { 1.0 },
        });
    }

    out
}

/// HUD-relevant state for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSnapshot {
    pub health: i32,
    pub max_health: i32,
    pub score: u32,
    pub level_index: usize,
    pub level_completed: bool,
    pub level_hidden: bool,
    pub game_over: bool,
    pub paused: bool,
}

pub fn hud_snapshot(state: &PlayState) -> HudSnapshot {
    let (health, max_health) = state
        .world
        .get::<&crate::components::Health>(state.player)
        .map(|h| (h.current, h.max))
        .unwrap_or((0, 0));

    HudSnapshot {
        health,
        max_health,
        score: state.score,
        level_index: state.levels.current_index(),
        level_completed: state.levels.current().completed,
        level_hidden: state.levels.current().hidden,
        game_over: state.game_over,
        paused: state.paused,
    }
}
