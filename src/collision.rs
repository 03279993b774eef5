//! Tile collision oracle: pure queries against the tile grid.
//!
//! Everything here is stateless. Out-of-bounds coordinates read as solid,
//! so a probe can never escape the world.

use crate::components::Hitbox;
use crate::constants::{FLOOR_PROBE_OFFSET, TILE_SIZE};
use crate::grid::TileGrid;

/// True only if all four corners of the rectangle sit on non-solid tiles.
/// Corner order is top-left, bottom-right, top-right, bottom-left as a
/// short-circuiting AND; order only affects speed, never the result.
pub fn can_occupy(x: f32, y: f32, w: f32, h: f32, grid: &TileGrid) -> bool {
    !grid.is_solid_at(x, y)
        && !grid.is_solid_at(x + w, y + h)
        && !grid.is_solid_at(x + w, y)
        && !grid.is_solid_at(x, y + h)
}

/// `can_occupy` for an existing hitbox at its current position
pub fn hitbox_can_occupy(hitbox: &Hitbox, grid: &TileGrid) -> bool {
    can_occupy(hitbox.x, hitbox.y, hitbox.w, hitbox.h, grid)
}

/// Floor probe just below the bottom-left and bottom-right corners.
/// The entity is on the floor iff either probe hits a solid tile.
pub fn entity_on_floor(hitbox: &Hitbox, grid: &TileGrid) -> bool {
    let probe_y = hitbox.bottom() + FLOOR_PROBE_OFFSET;
    grid.is_solid_at(hitbox.x, probe_y) || grid.is_solid_at(hitbox.right(), probe_y)
}

/// Tile-aligned x after a blocked horizontal move. A positive speed means
/// the right edge collided; the entity rests one pixel short of the next
/// tile. A negative speed snaps the left edge onto the tile boundary.
pub fn snap_to_wall(hitbox: &Hitbox, x_speed: f32) -> f32 {
    let tile = (hitbox.x / TILE_SIZE) as i32;
    if x_speed > 0.0 {
        tile as f32 * TILE_SIZE + (TILE_SIZE - hitbox.w) - 1.0
    } else {
        tile as f32 * TILE_SIZE
    }
}

/// Tile-aligned y after a blocked vertical move, branching on the sign of
/// the speed (falling lands on the tile top, rising stops at the ceiling).
/// `y_offset` shifts the reference row for entities with displaced anchors;
/// standard callers pass 0.0.
pub fn snap_to_floor_or_ceiling(hitbox: &Hitbox, air_speed: f32, y_offset: f32) -> f32 {
    let tile = ((hitbox.y + y_offset) / TILE_SIZE) as i32;
    if air_speed > 0.0 {
        tile as f32 * TILE_SIZE + (TILE_SIZE - hitbox.h) - 1.0
    } else {
        tile as f32 * TILE_SIZE
    }
}

/// Terrain gate for enemy patrol steps. Today this reduces to plain
/// solidity; it exists as the seam where terrain kinds would plug in.
pub fn is_tile_walkable(x: f32, y: f32, grid: &TileGrid) -> bool {
    !grid.is_solid_at(x, y)
}

/// True when every tile strictly between two columns on one row is
/// non-solid - the line-of-sight test enemies use along their floor row.
pub fn sight_clear(grid: &TileGrid, row: i32, col_a: i32, col_b: i32) -> bool {
    let (lo, hi) = if col_a <= col_b {
        (col_a, col_b)
    } else {
        (col_b, col_a)
    };
    for col in (lo + 1)..hi {
        if grid.is_solid_cell(col, row) {
            return false;
        }
    }
    true
}
