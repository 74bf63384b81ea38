#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Rectangular walkability grid.
///
/// Cells default to walkable; obstacles are toggled in place and every query
/// observes the latest mutation. Out-of-bounds coordinates are treated as
/// blocked rather than as errors, since world-space queries routinely land
/// past the map edge.
#[derive(Debug, Clone)]
pub struct GridMap {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
}

impl GridMap {
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            blocked: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn add_obstacle(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.idx(Cell::new(x, y)) {
            self.blocked[idx] = true;
        }
    }

    pub fn remove_obstacle(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.idx(Cell::new(x, y)) {
            self.blocked[idx] = false;
        }
    }

    pub fn clear_obstacles(&mut self) {
        self.blocked.fill(false);
    }

    /// `false` for out-of-bounds coordinates and obstacle cells.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.idx(Cell::new(x, y))
            .map(|idx| !self.blocked[idx])
            .unwrap_or(false)
    }

    /// Walkable cells adjacent to `(x, y)`.
    ///
    /// Cardinal neighbors come first in fixed N, E, S, W order, then the
    /// diagonals, so search expansion is deterministic. A diagonal neighbor is
    /// only included when both orthogonally adjacent cells are walkable too;
    /// paths may not cut the corner between two diagonally touching
    /// obstacles.
    pub fn get_neighbors(&self, x: i32, y: i32, allow_diagonal: bool) -> Vec<Cell> {
        const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
        const DIAGONAL: [(i32, i32); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

        let mut out = Vec::with_capacity(if allow_diagonal { 8 } else { 4 });

        for (dx, dy) in CARDINAL {
            if self.is_walkable(x + dx, y + dy) {
                out.push(Cell::new(x + dx, y + dy));
            }
        }

        if allow_diagonal {
            for (dx, dy) in DIAGONAL {
                if self.is_walkable(x + dx, y + dy)
                    && self.is_walkable(x + dx, y)
                    && self.is_walkable(x, y + dy)
                {
                    out.push(Cell::new(x + dx, y + dy));
                }
            }
        }

        out
    }

    pub(crate) fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    pub(crate) fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }

    pub(crate) fn cell_from_idx(&self, idx: usize) -> Cell {
        let idx = idx as i32;
        Cell::new(idx % self.width, idx / self.width)
    }

    pub(crate) fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }
}
