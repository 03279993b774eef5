//! Player controller: input-to-motion mapping, jump/dash special moves,
//! attack aiming with deferred arrow spawning, hurt/death sequencing.

use glam::Vec2;
use hecs::{Entity, World};
use tracing::warn;

use crate::collision::can_occupy;
use crate::components::{AnimationClock, Health, Hitbox, Kinematics, PlayerPawn, PlayerState};
use crate::constants::*;
use crate::events::{EventQueue, GameEvent};
use crate::grid::TileGrid;
use crate::input::InputState;
use crate::systems::movement::{self, VerticalEvent};

/// A shot committed this tick, to be spawned by the simulation after the
/// player borrow ends
#[derive(Debug, Clone, Copy)]
pub struct ArrowRequest {
    pub muzzle: Vec2,
    pub slope: f32,
    pub left: bool,
}

/// What this tick of the player controller produced
#[derive(Debug, Default)]
pub struct PlayerTick {
    pub arrow: Option<ArrowRequest>,
    /// The death animation finished this tick (signalled exactly once)
    pub game_over: bool,
}

/// One full update of the player entity.
pub fn update_player(
    world: &mut World,
    player: Entity,
    grid: &TileGrid,
    input: &mut InputState,
    events: &mut EventQueue,
) -> PlayerTick {
    puffin::profile_function!();

    let mut out = PlayerTick::default();
    let Ok((pawn, hitbox, kin, clock)) = world.query_one_mut::<(
        &mut PlayerPawn,
        &mut Hitbox,
        &mut Kinematics,
        &mut AnimationClock,
    )>(player) else {
        return out;
    };

    // Death sequencing: freeze everything, play the cycle out, signal once
    if pawn.state == PlayerState::Die {
        if !pawn.death_done && clock.advance(player_frame_count(PlayerState::Die)) {
            pawn.death_done = true;
            events.push(GameEvent::GameOver);
            out.game_over = true;
        }
        return out;
    }
    // A kill landed since the last tick: enter DIE before anything else
    // runs, so a dead player cannot move, jump, or loose an arrow
    if pawn.killed {
        pawn.state = PlayerState::Die;
        clock.reset();
        return out;
    }
    kin.first_update = false;

    // Facing follows the aim point the instant one is set, fired or not
    let muzzle = muzzle_point(hitbox);
    if let Some(aim) = input.aim_preview() {
        pawn.flip_w = if aim.x >= muzzle.x { 1.0 } else { -1.0 };
    }
    if let Some(target) = input.take_fire_commit() {
        pawn.flip_w = if target.x >= muzzle.x { 1.0 } else { -1.0 };
        pawn.aim = Some(target);
        pawn.attacking = true;
    }

    // Dash is press-toggled, on or off
    if input.take_dash() {
        pawn.dashing = !pawn.dashing;
    }

    // Jump on press edge; count resets only on landing
    let jump_pressed = input.jump && !pawn.jump_was_down;
    pawn.jump_was_down = input.jump;
    if jump_pressed && pawn.jumps_used < MAX_JUMPS {
        if !can_occupy(hitbox.x, hitbox.y - TILE_SIZE, hitbox.w, hitbox.h, grid) {
            // Diagnostic only, never blocks the jump
            warn!(x = hitbox.x, y = hitbox.y, "jump started under a low ceiling");
        }
        kin.in_air = true;
        kin.air_speed = JUMP_SPEED;
        pawn.jumps_used += 1;
    }

    let mut x_speed = 0.0;
    if input.left {
        x_speed -= PLAYER_WALK_SPEED;
    }
    if input.right {
        x_speed += PLAYER_WALK_SPEED;
    }

    if pawn.dashing {
        let dash_speed = (PLAYER_WALK_SPEED + DASH_BONUS_SPEED) * pawn.flip_w;
        let clear = can_occupy(
            hitbox.x + dash_speed,
            hitbox.y,
            hitbox.w + DASH_PROBE_MARGIN,
            hitbox.h,
            grid,
        );
        if clear {
            hitbox.x += dash_speed;
        } else {
            pawn.dashing = false;
            dash_bounce(hitbox, pawn.flip_w, grid);
            kin.in_air = true;
            kin.air_speed = 0.0;
        }
        x_speed = 0.0;
    }
    if movement::integrate(hitbox, kin, x_speed, grid) == VerticalEvent::Landed {
        pawn.jumps_used = 0;
    }

    // Deferred arrow spawn: one shot per DRAW cycle, on the spawn frame
    if pawn.state == PlayerState::Draw
        && pawn.attacking
        && !pawn.attack_checked
        && clock.index == ARROW_SPAWN_FRAME
    {
        if let Some(target) = pawn.aim {
            let muzzle = muzzle_point(hitbox);
            let mut dx = target.x - muzzle.x;
            if dx.abs() < MIN_AIM_DX {
                dx = MIN_AIM_DX * pawn.flip_w;
            }
            out.arrow = Some(ArrowRequest {
                muzzle,
                slope: (target.y - muzzle.y) / dx,
                left: dx < 0.0,
            });
            pawn.attack_checked = true;
        }
    }

    // State selection: highest priority wins, top to bottom
    let prev = pawn.state;
    pawn.state = if pawn.dashing {
        PlayerState::Dash
    } else if pawn.hurting {
        PlayerState::Damage
    } else if kin.in_air {
        if input.jump {
            PlayerState::JumpStart
        } else {
            PlayerState::Fall
        }
    } else if pawn.attacking {
        PlayerState::Draw
    } else if input.left != input.right {
        PlayerState::Running
    } else {
        PlayerState::Idle
    };

    if pawn.state != prev {
        if prev == PlayerState::Draw {
            // Interrupted mid-draw: the pending shot is dropped
            pawn.attacking = false;
            pawn.attack_checked = false;
            pawn.aim = None;
        }
        if pawn.state == PlayerState::Draw {
            // Skip the redundant wind-up frame
            clock.reset_to(1);
        } else {
            clock.reset();
        }
    }

    // Animation advance; cycle completion drives the state side effects
    if clock.advance(player_frame_count(pawn.state)) {
        match pawn.state {
            PlayerState::Draw => {
                pawn.attacking = false;
                pawn.attack_checked = false;
                pawn.aim = None;
            }
            PlayerState::Damage => pawn.hurting = false,
            _ => {}
        }
    }

    out
}

/// Apply one point of contact damage. No-op inside the hurting cooldown
/// window, so one contact cannot hit more than once.
pub fn hurt_player(pawn: &mut PlayerPawn, health: &mut Health, events: &mut EventQueue) {
    if pawn.hurting || pawn.killed {
        return;
    }
    health.current -= 1;
    pawn.hurting = true;
    if health.current <= 0 {
        pawn.killed = true;
        events.push(GameEvent::PlayerDied);
    } else {
        events.push(GameEvent::PlayerHurt {
            remaining: health.current,
        });
    }
}

/// Fixed arrow origin relative to the hitbox
fn muzzle_point(hitbox: &Hitbox) -> Vec2 {
    Vec2::new(hitbox.center_x(), hitbox.y + MUZZLE_OFFSET_Y)
}

/// Backward/upward nudge after a dash hits a wall: five sub-steps with
/// quadratic vertical falloff.
fn dash_bounce(hitbox: &mut Hitbox, flip_w: f32, grid: &TileGrid) {
    for step in 0..DASH_BOUNCE_STEPS {
        let remaining = (DASH_BOUNCE_STEPS - step) as f32 / DASH_BOUNCE_STEPS as f32;
        let dx = -flip_w * DASH_BOUNCE_BACK_STEP;
        let dy = -DASH_BOUNCE_LIFT * remaining * remaining;
        if can_occupy(hitbox.x + dx, hitbox.y + dy, hitbox.w, hitbox.h, grid) {
            hitbox.x += dx;
            hitbox.y += dy;
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawning::spawn_player;

    fn make_grid(width: usize, height: usize, solid: &[(i32, i32)]) -> TileGrid {
        let mut rows = vec![vec![PASSABLE_TILE_ID; width]; height];
        for &(col, row) in solid {
            rows[row as usize][col as usize] = 0;
        }
        TileGrid::from_rows(&rows).unwrap()
    }

    /// 20x10 room: floor on row 8, walls on columns 0 and 19
    fn room() -> TileGrid {
        let mut solid: Vec<(i32, i32)> = (0..20).map(|c| (c, 8)).collect();
        for row in 0..10 {
            solid.push((0, row));
            solid.push((19, row));
        }
        make_grid(20, 10, &solid)
    }

    fn standing_player(world: &mut World, grid: &TileGrid) -> Entity {
        let _ = grid;
        // Resting one pixel above the row-8 floor
        spawn_player(world, 5.0 * TILE_SIZE, 8.0 * TILE_SIZE - PLAYER_HEIGHT - 1.0)
    }

    fn tick(world: &mut World, player: Entity, grid: &TileGrid, input: &mut InputState) -> PlayerTick {
        let mut events = EventQueue::new();
        update_player(world, player, grid, input, &mut events)
    }

    #[test]
    fn test_jump_cap_and_reset_on_landing() {
        let grid = room();
        let mut world = World::new();
        let player = standing_player(&mut world, &grid);
        let mut input = InputState::new();

        for press in 0u32..5 {
            input.jump = true;
            tick(&mut world, player, &grid, &mut input);
            input.jump = false;
            tick(&mut world, player, &grid, &mut input);
            let used = world.get::<&PlayerPawn>(player).unwrap().jumps_used;
            assert_eq!(used, (press + 1).min(MAX_JUMPS));
        }

        // Fall back down; landing resets the counter
        for _ in 0..2000 {
            tick(&mut world, player, &grid, &mut input);
        }
        let pawn = world.get::<&PlayerPawn>(player).unwrap();
        assert_eq!(pawn.jumps_used, 0);
    }

    #[test]
    fn test_state_priority_damage_over_air_over_attack() {
        let grid = room();
        let mut world = World::new();
        let player = standing_player(&mut world, &grid);
        let mut input = InputState::new();

        // Attacking on the ground draws the bow
        input.press_fire(Vec2::new(400.0, 100.0));
        input.release_fire();
        tick(&mut world, player, &grid, &mut input);
        assert_eq!(
            world.get::<&PlayerPawn>(player).unwrap().state,
            PlayerState::Draw
        );

        // Hurting outranks the draw
        {
            let mut pawn = world.get::<&mut PlayerPawn>(player).unwrap();
            pawn.hurting = true;
        }
        tick(&mut world, player, &grid, &mut input);
        assert_eq!(
            world.get::<&PlayerPawn>(player).unwrap().state,
            PlayerState::Damage
        );
    }

    #[test]
    fn test_airborne_state_follows_jump_intent() {
        let grid = room();
        let mut world = World::new();
        let player = standing_player(&mut world, &grid);
        let mut input = InputState::new();

        input.jump = true;
        tick(&mut world, player, &grid, &mut input);
        assert_eq!(
            world.get::<&PlayerPawn>(player).unwrap().state,
            PlayerState::JumpStart
        );
        input.jump = false;
        tick(&mut world, player, &grid, &mut input);
        assert_eq!(
            world.get::<&PlayerPawn>(player).unwrap().state,
            PlayerState::Fall
        );
    }

    #[test]
    fn test_arrow_spawns_once_on_spawn_frame() {
        let grid = room();
        let mut world = World::new();
        let player = standing_player(&mut world, &grid);
        let mut input = InputState::new();

        let target = Vec2::new(15.0 * TILE_SIZE, 5.0 * TILE_SIZE);
        input.press_fire(target);
        input.release_fire();

        let mut spawned = Vec::new();
        // One full draw cycle and change
        for _ in 0..(ANI_SPEED * player_frame_count(PlayerState::Draw) * 2) {
            let out = tick(&mut world, player, &grid, &mut input);
            if let Some(arrow) = out.arrow {
                spawned.push(arrow);
            }
        }
        assert_eq!(spawned.len(), 1, "exactly one arrow per attack");
        let arrow = spawned[0];
        assert!(!arrow.left);
        // Slope matches the aim geometry
        let expected = (target.y - arrow.muzzle.y) / (target.x - arrow.muzzle.x);
        assert!((arrow.slope - expected).abs() < 1e-6);
        // Attack flags cleared after the cycle
        let pawn = world.get::<&PlayerPawn>(player).unwrap();
        assert!(!pawn.attacking);
        assert!(!pawn.attack_checked);
    }

    #[test]
    fn test_aim_left_flips_facing_before_shot_fires() {
        let grid = room();
        let mut world = World::new();
        let player = standing_player(&mut world, &grid);
        let mut input = InputState::new();

        input.press_fire(Vec2::new(0.0, 100.0));
        tick(&mut world, player, &grid, &mut input);
        // Still aiming (no release), but facing already flipped
        let pawn = world.get::<&PlayerPawn>(player).unwrap();
        assert_eq!(pawn.flip_w, -1.0);
        assert!(!pawn.attacking);
    }

    #[test]
    fn test_dash_toggle_and_wall_bounce() {
        let grid = room();
        let mut world = World::new();
        // Start one tile away from the right wall
        let player = spawn_player(
            &mut world,
            18.0 * TILE_SIZE - PLAYER_WIDTH - 8.0,
            8.0 * TILE_SIZE - PLAYER_HEIGHT - 1.0,
        );
        let mut input = InputState::new();

        input.press_dash();
        tick(&mut world, player, &grid, &mut input);
        assert!(world.get::<&PlayerPawn>(player).unwrap().dashing);
        assert_eq!(
            world.get::<&PlayerPawn>(player).unwrap().state,
            PlayerState::Dash
        );

        // A second press while dashing toggles it off
        input.press_dash();
        tick(&mut world, player, &grid, &mut input);
        assert!(!world.get::<&PlayerPawn>(player).unwrap().dashing);

        // Dash into the wall: the dash ends on its own with a bounce
        input.press_dash();
        let x_before = world.get::<&Hitbox>(player).unwrap().x;
        let mut ended_at_x = None;
        for _ in 0..200 {
            tick(&mut world, player, &grid, &mut input);
            let pawn = world.get::<&PlayerPawn>(player).unwrap();
            if !pawn.dashing {
                ended_at_x = Some(world.get::<&Hitbox>(player).unwrap().x);
                break;
            }
        }
        let ended_at_x = ended_at_x.expect("dash never hit the wall");
        // Bounced backward from the wall, not through it
        assert!(ended_at_x < 19.0 * TILE_SIZE - PLAYER_WIDTH);
        assert!(ended_at_x > x_before - 20.0 * TILE_SIZE);
        assert!(world.get::<&Kinematics>(player).unwrap().in_air);
    }

    #[test]
    fn test_hurt_cooldown_and_kill_at_zero() {
        let mut pawn = PlayerPawn::new();
        let mut health = Health::new(2);
        let mut events = EventQueue::new();

        hurt_player(&mut pawn, &mut health, &mut events);
        assert_eq!(health.current, 1);
        // Second contact during the cooldown is ignored
        hurt_player(&mut pawn, &mut health, &mut events);
        assert_eq!(health.current, 1);
        assert!(!pawn.killed);

        pawn.hurting = false;
        hurt_player(&mut pawn, &mut health, &mut events);
        assert_eq!(health.current, 0);
        assert!(pawn.killed);
    }

    #[test]
    fn test_kill_halts_the_alive_path_immediately() {
        let grid = room();
        let mut world = World::new();
        let player = standing_player(&mut world, &grid);
        let mut input = InputState::new();
        input.right = true;
        input.jump = true;
        {
            let mut pawn = world.get::<&mut PlayerPawn>(player).unwrap();
            pawn.killed = true;
        }

        let x_before = world.get::<&Hitbox>(player).unwrap().x;
        tick(&mut world, player, &grid, &mut input);

        // The very first update after the kill is already DIE: no
        // movement, no jump, held input ignored
        let pawn = world.get::<&PlayerPawn>(player).unwrap();
        assert_eq!(pawn.state, PlayerState::Die);
        assert_eq!(pawn.jumps_used, 0);
        assert!(!world.get::<&Kinematics>(player).unwrap().in_air);
        assert_eq!(world.get::<&Hitbox>(player).unwrap().x, x_before);
    }

    #[test]
    fn test_death_cycle_signals_game_over_once() {
        let grid = room();
        let mut world = World::new();
        let player = standing_player(&mut world, &grid);
        let mut input = InputState::new();
        {
            let mut pawn = world.get::<&mut PlayerPawn>(player).unwrap();
            pawn.killed = true;
        }

        let mut signals = 0;
        for _ in 0..(ANI_SPEED * player_frame_count(PlayerState::Die) * 3) {
            if tick(&mut world, player, &grid, &mut input).game_over {
                signals += 1;
            }
        }
        assert_eq!(signals, 1, "game-over is a one-way latch");
        assert_eq!(
            world.get::<&PlayerPawn>(player).unwrap().state,
            PlayerState::Die
        );
    }
}
