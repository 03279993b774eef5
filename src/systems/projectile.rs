//! Arrow flight, termination, and enemy-hit resolution.
//!
//! Arrows fly in a straight line along a slope fixed at spawn. The
//! horizontal speed is solved so the diagonal travel speed stays at
//! `PROJECTILE_SPEED` for every angle.

use hecs::{Entity, World};

use crate::collision::can_occupy;
use crate::components::{AnimationClock, Arrow, EnemyPawn, Health, Hitbox};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::grid::TileGrid;
use crate::systems::enemy::hurt_enemy;

/// Signed horizontal speed for an arrow flying along `slope`, chosen so
/// `sqrt(x² + (x·slope)²) == PROJECTILE_SPEED`.
pub fn solve_x_speed(slope: f32, left: bool) -> f32 {
    let x = (PROJECTILE_SPEED * PROJECTILE_SPEED / (1.0 + slope * slope)).sqrt();
    if left {
        -x
    } else {
        x
    }
}

/// Advance every arrow one tick; despawn the ones that leave the world
/// or run into a solid tile.
pub fn update_projectiles(world: &mut World, grid: &TileGrid, events: &mut EventQueue) {
    puffin::profile_function!();

    let mut broken: Vec<Entity> = Vec::new();

    for (id, (arrow, hitbox, clock)) in
        world.query_mut::<(&Arrow, &mut Hitbox, &mut AnimationClock)>()
    {
        clock.advance(ARROW_FRAME_COUNT);

        let next_x = hitbox.x + arrow.x_speed;
        let next_y = hitbox.y + arrow.x_speed * arrow.slope;
        if terminates(hitbox, next_x, next_y, arrow, grid) {
            events.push(GameEvent::ArrowBroke {
                x: hitbox.x,
                y: hitbox.y,
            });
            broken.push(id);
        } else {
            hitbox.x = next_x;
            hitbox.y = next_y;
        }
    }

    for id in broken {
        let _ = world.despawn(id);
    }
}

/// True when the next step leaves the playable area or either axis of
/// the move is blocked by a solid tile.
fn terminates(hitbox: &Hitbox, next_x: f32, next_y: f32, arrow: &Arrow, grid: &TileGrid) -> bool {
    if next_x < 0.0
        || next_y < 0.0
        || next_x + hitbox.w > grid.pixel_width()
        || next_y + hitbox.h > grid.pixel_height()
    {
        return true;
    }
    // Each axis probed separately so a shallow graze still breaks the arrow
    !can_occupy(hitbox.x + arrow.x_speed, hitbox.y, hitbox.w, hitbox.h, grid)
        || !can_occupy(hitbox.x, hitbox.y + arrow.x_speed * arrow.slope, hitbox.w, hitbox.h, grid)
}

/// Resolve arrow-versus-enemy contact. Each arrow damages at most one
/// enemy and is consumed by the hit. Returns the score gained.
pub fn resolve_arrow_hits(world: &mut World, events: &mut EventQueue) -> u32 {
    puffin::profile_function!();

    let arrows: Vec<(Entity, Hitbox)> = world
        .query_mut::<(&Arrow, &Hitbox)>()
        .into_iter()
        .map(|(id, (_, hitbox))| (id, *hitbox))
        .collect();

    let mut gained = 0;
    let mut spent: Vec<Entity> = Vec::new();

    for (arrow_id, arrow_box) in arrows {
        let mut hit: Option<Entity> = None;

        for (enemy_id, (pawn, hitbox, health, clock)) in world.query_mut::<(
            &mut EnemyPawn,
            &Hitbox,
            &mut Health,
            &mut AnimationClock,
        )>() {
            // Enemies mid-HIT (or already dead) shrug off further arrows
            if !pawn.active || pawn.killed || pawn.hurting {
                continue;
            }
            if !arrow_box.intersects(hitbox) {
                continue;
            }

            let killed = hurt_enemy(pawn, health, clock, ARROW_DAMAGE);
            events.push(GameEvent::ProjectileHit {
                enemy: enemy_id,
                damage: ARROW_DAMAGE,
            });
            if killed {
                let stats = enemy_stats(pawn.kind);
                gained += stats.score;
                events.push(GameEvent::EnemyDied {
                    enemy: enemy_id,
                    kind: pawn.kind,
                    score: stats.score,
                    position: (hitbox.x, hitbox.y),
                });
            } else {
                events.push(GameEvent::EnemyHurt {
                    enemy: enemy_id,
                    remaining: health.current,
                });
            }
            hit = Some(enemy_id);
            break;
        }

        if hit.is_some() {
            spent.push(arrow_id);
        }
    }

    for id in spent {
        let _ = world.despawn(id);
    }
    gained
}
