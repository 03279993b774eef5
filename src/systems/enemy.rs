//! Enemy behavior: perception, patrol/attack state machine, attack-box
//! hit resolution.
//!
//! Both enemy kinds run the same code; everything kind-specific comes from
//! the stats table in `constants::enemies`.

use hecs::{Entity, World};

use crate::collision::{can_occupy, entity_on_floor, is_tile_walkable, sight_clear};
use crate::components::{
    AnimationClock, AttackBox, EnemyKind, EnemyPawn, EnemyState, Health, Hitbox, Kinematics,
    PlayerPawn,
};
use crate::constants::*;
use crate::events::EventQueue;
use crate::grid::TileGrid;
use crate::systems::movement::{self, VerticalEvent};
use crate::systems::player::hurt_player;

/// Read-only snapshot of the player, taken once before enemy iteration
#[derive(Debug, Clone, Copy)]
pub struct PlayerView {
    pub hitbox: Hitbox,
    pub alive: bool,
    pub floor_row: i32,
}

pub fn player_view(world: &World, player: Entity) -> Option<PlayerView> {
    let hitbox = *world.get::<&Hitbox>(player).ok()?;
    let pawn = world.get::<&PlayerPawn>(player).ok()?;
    Some(PlayerView {
        hitbox,
        alive: !pawn.killed,
        floor_row: hitbox.floor_row(),
    })
}

/// One tick of every enemy, plus removal of the ones whose death
/// animation finished.
pub fn update_enemies(world: &mut World, player: Entity, grid: &TileGrid, events: &mut EventQueue) {
    puffin::profile_function!();

    let Some(view) = player_view(world, player) else {
        return;
    };

    let mut player_hit = false;
    let mut retired: Vec<Entity> = Vec::new();

    for (id, (pawn, hitbox, attack_box, kin, clock)) in world.query_mut::<(
        &mut EnemyPawn,
        &mut Hitbox,
        &mut AttackBox,
        &mut Kinematics,
        &mut AnimationClock,
    )>() {
        update_enemy(pawn, hitbox, attack_box, kin, clock, grid, &view, &mut player_hit);
        if !pawn.active {
            retired.push(id);
        }
    }

    // Contact damage is applied after the enemy borrows end; the hurting
    // guard inside makes double contact per tick harmless anyway
    if player_hit {
        if let Ok((pawn, health)) = world.query_one_mut::<(&mut PlayerPawn, &mut Health)>(player) {
            hurt_player(pawn, health, events);
        }
    }

    for id in retired {
        let _ = world.despawn(id);
    }
}

#[allow(clippy::too_many_arguments)]
fn update_enemy(
    pawn: &mut EnemyPawn,
    hitbox: &mut Hitbox,
    attack_box: &mut AttackBox,
    kin: &mut Kinematics,
    clock: &mut AnimationClock,
    grid: &TileGrid,
    view: &PlayerView,
    player_hit: &mut bool,
) {
    let stats = enemy_stats(pawn.kind);

    // Floor probe right after spawn, so enemies dropped into the level
    // settle before they start steering
    if kin.first_update {
        if entity_on_floor(hitbox, grid) {
            pawn.grounded_row = hitbox.floor_row();
        } else {
            kin.in_air = true;
        }
        kin.first_update = false;
    }

    // Ledge probe every grounded tick, same as the shared integrator
    if !kin.in_air && !entity_on_floor(hitbox, grid) {
        kin.in_air = true;
    }

    if kin.in_air {
        // Gravity only; steering waits until the enemy has a floor row
        if movement::integrate(hitbox, kin, 0.0, grid) == VerticalEvent::Landed {
            pawn.grounded_row = hitbox.floor_row();
        }
    } else {
        match pawn.state {
            EnemyState::Idle => {
                // First grounded tick goes straight into patrol
                change_state(pawn, clock, EnemyState::Running);
                running_tick(pawn, hitbox, clock, grid, view, stats);
            }
            EnemyState::Running => running_tick(pawn, hitbox, clock, grid, view, stats),
            EnemyState::Attack => {
                attack_tick(pawn, hitbox, attack_box, clock, grid, view, stats, player_hit)
            }
            // Wait out the animation
            EnemyState::Hit | EnemyState::Dead => {}
        }
    }

    position_attack_box(attack_box, hitbox, pawn.walk_dir);

    if clock.advance(enemy_frame_count(pawn.kind, pawn.state)) {
        match pawn.state {
            EnemyState::Attack => {
                pawn.attack_checked = false;
                change_state(pawn, clock, EnemyState::Idle);
            }
            EnemyState::Hit => {
                if pawn.kind == EnemyKind::Skeleton {
                    pawn.hurting = false;
                }
                change_state(pawn, clock, EnemyState::Idle);
            }
            EnemyState::Dead => pawn.active = false,
            _ => {}
        }
    }
}

fn running_tick(
    pawn: &mut EnemyPawn,
    hitbox: &mut Hitbox,
    clock: &mut AnimationClock,
    grid: &TileGrid,
    view: &PlayerView,
    stats: &EnemyStats,
) {
    // The king regains vulnerability only here, a few ticks after a HIT
    // cycle ends; the skeleton already cleared it on the cycle itself
    if pawn.kind == EnemyKind::SkeletonKing {
        pawn.hurting = false;
    }

    let seen = can_see_player(pawn, hitbox, grid, view, stats);
    if seen {
        turn_towards(pawn, hitbox, view);
    }

    move_step(pawn, hitbox, grid, stats.walk_speed * pawn.walk_dir);

    if seen && in_attack_range(hitbox, &view.hitbox, stats) {
        pawn.attack_checked = false;
        change_state(pawn, clock, EnemyState::Attack);
    }
}

#[allow(clippy::too_many_arguments)]
fn attack_tick(
    pawn: &mut EnemyPawn,
    hitbox: &mut Hitbox,
    attack_box: &mut AttackBox,
    clock: &mut AnimationClock,
    grid: &TileGrid,
    view: &PlayerView,
    stats: &EnemyStats,
    player_hit: &mut bool,
) {
    // Re-perceiving mid-swing still turns the enemy
    if can_see_player(pawn, hitbox, grid, view, stats) {
        turn_towards(pawn, hitbox, view);
    }
    position_attack_box(attack_box, hitbox, pawn.walk_dir);

    if clock.index == 0 {
        pawn.attack_checked = false;
    }
    if clock.index == stats.attack_hit_frame && !pawn.attack_checked {
        if view.alive && attack_box.0.intersects(&view.hitbox) {
            *player_hit = true;
        }
        pawn.attack_checked = true;
    }

    // The king holds position while the player stays inside the box,
    // instead of oscillating into and out of range mid-swing
    let locked = stats.locks_move_while_attacking && attack_box.0.intersects(&view.hitbox);
    if !locked {
        move_step(pawn, hitbox, grid, stats.attack_walk_speed * pawn.walk_dir);
    }
}

/// Patrol step: full move if the destination is clear, walkable, and
/// still has floor under its leading edge; otherwise reverse facing
/// (no sliding, no partial move).
fn move_step(pawn: &mut EnemyPawn, hitbox: &mut Hitbox, grid: &TileGrid, speed: f32) {
    let next_x = hitbox.x + speed;
    let leading_x = if speed > 0.0 { next_x + hitbox.w } else { next_x };
    let floor_ahead = grid.is_solid_at(leading_x, hitbox.bottom() + FLOOR_PROBE_OFFSET);
    if floor_ahead
        && can_occupy(next_x, hitbox.y, hitbox.w, hitbox.h, grid)
        && is_tile_walkable(leading_x, hitbox.y + hitbox.h * 0.5, grid)
    {
        hitbox.x = next_x;
    } else {
        pawn.walk_dir = -pawn.walk_dir;
    }
}

/// Perception: alive player, on the enemy's grounded row, inside the
/// eyesight radius, with no solid tile between the two along that row.
pub fn can_see_player(
    pawn: &EnemyPawn,
    hitbox: &Hitbox,
    grid: &TileGrid,
    view: &PlayerView,
    stats: &EnemyStats,
) -> bool {
    view.alive
        && view.floor_row == pawn.grounded_row
        && (view.hitbox.center_x() - hitbox.center_x()).abs() <= stats.eyesight
        && sight_clear(grid, pawn.grounded_row, hitbox.tile_col(), view.hitbox.tile_col())
}

pub fn in_attack_range(hitbox: &Hitbox, player_hitbox: &Hitbox, stats: &EnemyStats) -> bool {
    (player_hitbox.center_x() - hitbox.center_x()).abs() <= stats.attack_distance
}

fn turn_towards(pawn: &mut EnemyPawn, hitbox: &Hitbox, view: &PlayerView) {
    pawn.walk_dir = if view.hitbox.center_x() > hitbox.center_x() {
        1.0
    } else {
        -1.0
    };
}

fn change_state(pawn: &mut EnemyPawn, clock: &mut AnimationClock, state: EnemyState) {
    if pawn.state != state {
        pawn.state = state;
        clock.reset();
    }
}

/// The damage box sits one hitbox-width ahead of the enemy, on its
/// facing side, and never moves independently.
fn position_attack_box(attack_box: &mut AttackBox, hitbox: &Hitbox, walk_dir: f32) {
    let b = &mut attack_box.0;
    b.w = hitbox.w;
    b.h = hitbox.h;
    b.y = hitbox.y;
    b.x = if walk_dir > 0.0 {
        hitbox.right()
    } else {
        hitbox.x - hitbox.w
    };
}

/// Apply projectile or other damage. Forces HIT, or DEAD (and `killed`)
/// when health runs out. Returns true when this call killed the enemy.
pub fn hurt_enemy(
    pawn: &mut EnemyPawn,
    health: &mut Health,
    clock: &mut AnimationClock,
    amount: i32,
) -> bool {
    health.current -= amount;
    pawn.hurting = true;
    if health.current <= 0 {
        if !pawn.killed {
            pawn.killed = true;
            change_state_raw(pawn, clock, EnemyState::Dead);
            return true;
        }
        return false;
    }
    change_state_raw(pawn, clock, EnemyState::Hit);
    false
}

fn change_state_raw(pawn: &mut EnemyPawn, clock: &mut AnimationClock, state: EnemyState) {
    pawn.state = state;
    clock.reset();
}
