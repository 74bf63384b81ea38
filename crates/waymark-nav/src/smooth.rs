use crate::{Cell, GridMap};

/// `true` when a straight segment from `from` to `to` crosses only walkable
/// cells.
///
/// Supercover Bresenham walk: every cell the line visits is checked, and a
/// diagonal step additionally requires both orthogonally adjacent cells to be
/// walkable, matching the grid's corner-cutting rule.
pub fn line_of_sight(grid: &GridMap, from: Cell, to: Cell) -> bool {
    let mut x0 = from.x;
    let mut y0 = from.y;
    let x1 = to.x;
    let y1 = to.y;

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        if !grid.is_walkable(x0, y0) {
            return false;
        }

        if x0 == x1 && y0 == y1 {
            return true;
        }

        let e2 = 2 * err;
        let step_x = e2 > -dy;
        let step_y = e2 < dx;

        if step_x && step_y && (!grid.is_walkable(x0 + sx, y0) || !grid.is_walkable(x0, y0 + sy)) {
            return false;
        }

        if step_x {
            err -= dy;
            x0 += sx;
        }
        if step_y {
            err += dx;
            y0 += sy;
        }
    }
}

/// Drop redundant waypoints: greedily skip to the farthest cell reachable
/// from the current anchor with unobstructed line of sight.
///
/// The result is a subsequence of `path` with the same endpoints; every
/// consecutive output pair passes [`line_of_sight`]. Paths of length ≤ 2 come
/// back unchanged.
pub fn smooth_path(path: &[Cell], grid: &GridMap) -> Vec<Cell> {
    if path.len() <= 2 {
        return path.to_vec();
    }

    let mut out = vec![path[0]];
    let mut anchor = 0usize;

    while anchor < path.len() - 1 {
        let mut reach = anchor + 1;
        for j in (anchor + 2)..path.len() {
            if line_of_sight(grid, path[anchor], path[j]) {
                reach = j;
            }
        }
        out.push(path[reach]);
        anchor = reach;
    }

    out
}
