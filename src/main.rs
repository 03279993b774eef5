#![allow(dead_code)]

mod collision;
mod components;
mod constants;
mod engine;
mod events;
mod game_loop;
mod grid;
mod input;
mod levels;
mod spawning;
mod systems;

use std::cell::RefCell;

use tracing_subscriber::EnvFilter;

use constants::*;
use engine::PlayState;
use events::GameEvent;
use input::InputState;
use levels::{Level, LevelManager};
use systems::snapshot;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let state = RefCell::new(PlayState::new(LevelManager::new(demo_levels()?)));
    let input = RefCell::new(InputState::new());

    // Headless demo run: scripted input, log-only rendering. A windowed
    // front end would poll real devices here instead.
    let mut scripted_tick = 0u64;
    game_loop::run(
        || {
            let mut input = input.borrow_mut();
            script_input(scripted_tick, &mut input);
            scripted_tick += 1;
            let state = state.borrow();
            !state.game_over && scripted_tick < (UPS_SET as u64) * 30
        },
        || {
            let mut state = state.borrow_mut();
            let mut input = input.borrow_mut();
            engine::tick(&mut state, &mut input);
            drain_events(&mut state);
        },
        || {
            let state = state.borrow();
            let hud = snapshot::hud_snapshot(&state);
            let drawn = snapshot::collect_render_entities(&state.world);
            tracing::trace!(?hud, entities = drawn.len(), "frame");
        },
    );

    let state = state.borrow();
    tracing::info!(
        score = state.score,
        level = state.levels.current_index(),
        game_over = state.game_over,
        "run finished"
    );
    Ok(())
}

/// Canned inputs for the headless demo: walk right, hop periodically,
/// loose one arrow early on.
fn script_input(tick: u64, input: &mut InputState) {
    input.right = true;
    input.jump = tick % 400 < 20;
    if tick == 100 {
        input.press_fire(glam::Vec2::new(600.0, 200.0));
        input.release_fire();
    }
}

fn drain_events(state: &mut PlayState) {
    let completed = state
        .events
        .drain()
        .inspect(|event| match event {
            GameEvent::PlayerHurt { remaining } => {
                tracing::info!(remaining, "player hurt");
            }
            GameEvent::EnemyDied { kind, score, .. } => {
                tracing::info!(?kind, score, "enemy killed");
            }
            GameEvent::GameOver => tracing::info!("game over"),
            _ => tracing::debug!(?event, "event"),
        })
        .any(|event| matches!(event, GameEvent::LevelCompleted { .. }));

    if completed && !state.next_level() {
        tracing::info!("all stages cleared");
    }
}

/// Two small stages built inline; a real front end would decode these
/// from level images.
fn demo_levels() -> Result<Vec<Level>, levels::LevelError> {
    const W: usize = 26;
    const H: usize = 14;

    let mut tiles = vec![vec![PASSABLE_TILE_ID; W]; H];
    for col in 0..W {
        tiles[H - 1][col] = 0;
        tiles[H - 2][col] = 0;
    }
    for row in 0..H {
        tiles[row][0] = 0;
        tiles[row][W - 1] = 0;
    }
    // A ledge halfway up
    for col in 8..13 {
        tiles[8][col] = 0;
    }

    let mut codes = vec![vec![0; W]; H];
    codes[H - 3][2] = PLAYER_SPAWN_CODE;
    codes[H - 3][14] = SKELETON_SPAWN_CODE;
    codes[H - 3][20] = SKELETON_SPAWN_CODE;

    let first = Level::from_data(&tiles, &codes)?;

    let mut boss_codes = vec![vec![0; W]; H];
    boss_codes[H - 3][2] = PLAYER_SPAWN_CODE;
    boss_codes[H - 3][18] = SKELETON_KING_SPAWN_CODE;
    let second = Level::from_data(&tiles, &boss_codes)?;

    Ok(vec![first, second])
}
