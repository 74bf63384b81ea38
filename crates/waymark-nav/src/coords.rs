//! World-space ↔ grid-space mapping.
//!
//! Callers bridge entity positions to [`crate::GridMap`] cells with these functions;
//! the grid itself never stores world coordinates. Round-trip stability: a
//! world point mapped to a cell and back lands at that cell's center, which
//! maps to the same cell again.

use crate::{Cell, Vec2};

/// Cell containing `world`, for a grid whose origin cell starts at `offset`.
pub fn world_to_grid_coords(world: Vec2, cell_size: f32, offset: Vec2) -> Cell {
    Cell::new(
        ((world.x - offset.x) / cell_size).floor() as i32,
        ((world.y - offset.y) / cell_size).floor() as i32,
    )
}

/// World-space center of `cell`.
pub fn cell_to_world_coords(cell: Cell, cell_size: f32, offset: Vec2) -> Vec2 {
    Vec2::new(
        offset.x + (cell.x as f32 + 0.5) * cell_size,
        offset.y + (cell.y as f32 + 0.5) * cell_size,
    )
}

/// Map each cell of a grid path to its world-space center.
pub fn path_to_world_coords(path: &[Cell], cell_size: f32, offset: Vec2) -> Vec<Vec2> {
    path.iter()
        .map(|&cell| cell_to_world_coords(cell, cell_size, offset))
        .collect()
}
