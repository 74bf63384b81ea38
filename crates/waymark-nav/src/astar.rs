use core::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::{Cell, GridMap, Heuristic};

/// Scaled integer costs keep the heap ordering total and deterministic.
/// Diagonal steps are rounded up so the truncated heuristic stays admissible
/// in the scaled space.
const COST_SCALE: f32 = 1024.0;
const CARDINAL_COST: u32 = 1024;
const DIAGONAL_COST: u32 = 1449;

#[derive(Debug)]
struct OpenNode {
    f: u32,
    g: u32,
    cell: Cell,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, Cell, u64) {
        (self.f, self.g, self.cell, self.tie)
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenNode {}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

/// Grid A* search engine.
///
/// Borrows the grid it searches and keeps no state between calls apart from
/// the statistics of the most recent search. Mutate the grid between
/// searches, not during them.
#[derive(Debug)]
pub struct AStar<'a> {
    grid: &'a GridMap,
    last_iterations: usize,
    last_path_length: usize,
}

impl<'a> AStar<'a> {
    pub fn new(grid: &'a GridMap) -> Self {
        Self {
            grid,
            last_iterations: 0,
            last_path_length: 0,
        }
    }

    /// Nodes popped from the open set during the most recent search.
    pub fn last_iterations(&self) -> usize {
        self.last_iterations
    }

    /// Waypoint count of the most recent result, 0 when no path was found.
    pub fn last_path_length(&self) -> usize {
        self.last_path_length
    }

    /// Shortest path from `start` to `goal`, inclusive of both endpoints.
    ///
    /// Cardinal steps cost 1, diagonal steps √2. Returns `None` when either
    /// endpoint is out of bounds or blocked, or when no walkable route
    /// connects them. `find_path(c, c, ..)` returns `[c]`.
    pub fn find_path(
        &mut self,
        start: Cell,
        goal: Cell,
        heuristic: Heuristic,
        allow_diagonal: bool,
    ) -> Option<Vec<Cell>> {
        self.last_iterations = 0;
        self.last_path_length = 0;

        if !self.grid.is_walkable(start.x, start.y) || !self.grid.is_walkable(goal.x, goal.y) {
            return None;
        }

        if start == goal {
            self.last_path_length = 1;
            return Some(vec![start]);
        }

        let start_idx = self.grid.idx(start)?;
        let goal_idx = self.grid.idx(goal)?;

        let quant = |d: f32| -> u32 { (d.max(0.0) * COST_SCALE) as u32 };

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;

        let mut g_score = vec![u32::MAX; self.grid.cell_count()];
        let mut came_from: Vec<Option<usize>> = vec![None; self.grid.cell_count()];

        g_score[start_idx] = 0;
        open.push(OpenNode {
            f: quant(heuristic.estimate(start, goal)),
            g: 0,
            cell: start,
            tie,
        });
        tie += 1;

        while let Some(node) = open.pop() {
            self.last_iterations += 1;

            if node.cell == goal {
                let path = self.reconstruct_path(&came_from, goal_idx);
                self.last_path_length = path.len();
                return Some(path);
            }

            let node_idx = self.grid.idx(node.cell)?;
            if node.g != g_score[node_idx] {
                // Stale heap entry.
                continue;
            }

            for n in self.grid.get_neighbors(node.cell.x, node.cell.y, allow_diagonal) {
                let Some(n_idx) = self.grid.idx(n) else { continue };

                let step = if n.x != node.cell.x && n.y != node.cell.y {
                    DIAGONAL_COST
                } else {
                    CARDINAL_COST
                };
                let tentative_g = node.g.saturating_add(step);
                if tentative_g >= g_score[n_idx] {
                    continue;
                }

                came_from[n_idx] = Some(node_idx);
                g_score[n_idx] = tentative_g;
                let h = quant(heuristic.estimate(n, goal));
                open.push(OpenNode {
                    f: tentative_g.saturating_add(h),
                    g: tentative_g,
                    cell: n,
                    tie,
                });
                tie += 1;
            }
        }

        None
    }

    fn reconstruct_path(&self, came_from: &[Option<usize>], mut current: usize) -> Vec<Cell> {
        let mut out = vec![self.grid.cell_from_idx(current)];
        while let Some(prev) = came_from[current] {
            current = prev;
            out.push(self.grid.cell_from_idx(current));
        }
        out.reverse();
        out
    }
}
