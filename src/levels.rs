//! Level roster: tile grids, spawn metadata, and stage progression.
//!
//! The collaborator that decodes level images hands this module two layers
//! of integers per stage - tile ids and spawn codes. Everything after that
//! decode happens here.

use thiserror::Error;

use crate::components::EnemyKind;
use crate::constants::*;
use crate::grid::{GridError, TileGrid};
use crate::spawning::EnemySpawn;

/// Malformed level data, rejected at the loading boundary
#[derive(Debug, Error)]
pub enum LevelError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("spawn layer is {got_rows}x{got_cols}, grid is {rows}x{cols}")]
    SpawnLayerMismatch {
        rows: usize,
        cols: usize,
        got_rows: usize,
        got_cols: usize,
    },
}

/// One stage: an immutable tile grid plus the entities it starts with
pub struct Level {
    pub grid: TileGrid,
    pub spawns: Vec<EnemySpawn>,
    pub player_spawn: (f32, f32),
    pub completed: bool,
    pub hidden: bool,
}

impl Level {
    /// Build a level from a tile layer and a same-shaped spawn-code layer.
    pub fn from_data(tiles: &[Vec<i32>], spawn_codes: &[Vec<i32>]) -> Result<Self, LevelError> {
        let grid = TileGrid::from_rows(tiles)?;
        if spawn_codes.len() != grid.height()
            || spawn_codes.iter().any(|r| r.len() != grid.width())
        {
            return Err(LevelError::SpawnLayerMismatch {
                rows: grid.height(),
                cols: grid.width(),
                got_rows: spawn_codes.len(),
                got_cols: spawn_codes.first().map(|r| r.len()).unwrap_or(0),
            });
        }
        let (spawns, player_spawn) = Self::scan_spawns(spawn_codes);
        Ok(Self {
            grid,
            spawns,
            player_spawn,
            completed: false,
            hidden: true,
        })
    }

    /// Convert spawn codes to pixel-space spawn points. Unknown codes are
    /// inert. A missing player code defaults to one tile in from the origin.
    fn scan_spawns(spawn_codes: &[Vec<i32>]) -> (Vec<EnemySpawn>, (f32, f32)) {
        let mut spawns = Vec::new();
        let mut player_spawn = (TILE_SIZE, TILE_SIZE);
        for (row, codes) in spawn_codes.iter().enumerate() {
            for (col, &code) in codes.iter().enumerate() {
                let x = col as f32 * TILE_SIZE;
                let y = row as f32 * TILE_SIZE;
                match code {
                    SKELETON_SPAWN_CODE => spawns.push(EnemySpawn {
                        kind: EnemyKind::Skeleton,
                        x,
                        y,
                    }),
                    SKELETON_KING_SPAWN_CODE => spawns.push(EnemySpawn {
                        kind: EnemyKind::SkeletonKing,
                        x,
                        y,
                    }),
                    PLAYER_SPAWN_CODE => player_spawn = (x, y),
                    _ => {}
                }
            }
        }
        (spawns, player_spawn)
    }
}

/// Owns the fixed stage roster. Levels are pre-allocated at startup and
/// indexed by stage number; only the first starts unhidden.
pub struct LevelManager {
    levels: Vec<Level>,
    current: usize,
}

impl LevelManager {
    pub fn new(mut levels: Vec<Level>) -> Self {
        if let Some(first) = levels.first_mut() {
            first.hidden = false;
        }
        Self { levels, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current(&self) -> &Level {
        &self.levels[self.current]
    }

    pub fn current_mut(&mut self) -> &mut Level {
        &mut self.levels[self.current]
    }

    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Mark the active level completed and cascade the unlock
    pub fn mark_completed(&mut self) {
        self.levels[self.current].completed = true;
        self.unhide_next_levels();
    }

    /// Unhide every level whose predecessors are all completed
    pub fn unhide_next_levels(&mut self) {
        let mut unlocked = true;
        for level in &mut self.levels {
            if unlocked {
                level.hidden = false;
            }
            unlocked = level.completed;
        }
    }

    /// Advance to the next stage if one exists and is unlocked
    pub fn advance(&mut self) -> bool {
        let next = self.current + 1;
        match self.levels.get(next) {
            Some(level) if !level.hidden => {
                self.current = next;
                true
            }
            _ => false,
        }
    }
}
