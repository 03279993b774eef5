use thiserror::Error;

use crate::constants::{PASSABLE_TILE_ID, TILE_ID_LIMIT, TILE_SIZE};

/// Malformed tile data, rejected at the loading boundary
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("tile grid is empty")]
    Empty,
    #[error("row {row} has {len} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Immutable tile grid for one level: one i32 tile id per cell, row-major.
/// Created once per level load and read-only for that level's lifetime.
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<i32>,
}

impl TileGrid {
    /// Build a grid from one row per vertical tile. Rows must be non-empty
    /// and all the same length.
    pub fn from_rows(rows: &[Vec<i32>]) -> Result<Self, GridError> {
        let expected = rows.first().map(|r| r.len()).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        for (row, r) in rows.iter().enumerate() {
            if r.len() != expected {
                return Err(GridError::RaggedRow {
                    row,
                    len: r.len(),
                    expected,
                });
            }
        }
        Ok(Self {
            width: expected,
            height: rows.len(),
            tiles: rows.iter().flatten().copied().collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// World width in pixels
    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * TILE_SIZE
    }

    /// World height in pixels
    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * TILE_SIZE
    }

    pub fn get(&self, col: i32, row: i32) -> Option<i32> {
        if col < 0 || row < 0 || col >= self.width as i32 || row >= self.height as i32 {
            return None;
        }
        Some(self.tiles[row as usize * self.width + col as usize])
    }

    /// Solidity of a raw tile id. Exactly one reserved id is passable;
    /// out-of-range ids are clamped to solid.
    pub fn is_solid_id(id: i32) -> bool {
        if id < 0 || id >= TILE_ID_LIMIT {
            return true;
        }
        id != PASSABLE_TILE_ID
    }

    /// Solidity of the tile containing a tile coordinate.
    /// Out-of-bounds cells are solid.
    pub fn is_solid_cell(&self, col: i32, row: i32) -> bool {
        self.get(col, row).map(Self::is_solid_id).unwrap_or(true)
    }

    /// Solidity of the tile under a pixel coordinate.
    /// Anything outside the world is solid (fail-safe, not an error).
    pub fn is_solid_at(&self, x: f32, y: f32) -> bool {
        if x < 0.0 || y < 0.0 || x >= self.pixel_width() || y >= self.pixel_height() {
            return true;
        }
        self.is_solid_cell((x / TILE_SIZE) as i32, (y / TILE_SIZE) as i32)
    }
}
