use core::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use crate::{NavMesh, Vec2};

const COST_SCALE: f32 = 1024.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenNode {
    f: u32,
    g: u32,
    id: u32,
    tie: u64,
}

impl OpenNode {
    fn key(&self) -> (u32, u32, u32, u64) {
        (self.f, self.g, self.id, self.tie)
    }
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Graph search over [`NavMesh`] connectivity.
///
/// Nodes are polygon ids, edges are the mesh's shared-edge adjacency, and
/// costs are distances between polygon centers. Pathfinding therefore scales
/// with polygon count rather than vertex count. Holds a borrowed mesh and no
/// per-call state.
#[derive(Debug)]
pub struct NavMeshPathfinder<'a> {
    mesh: &'a NavMesh,
}

impl<'a> NavMeshPathfinder<'a> {
    pub fn new(mesh: &'a NavMesh) -> Self {
        Self { mesh }
    }

    /// World-space waypoints from `start` to `goal`.
    ///
    /// Both endpoints must resolve to a polygon via
    /// [`NavMesh::get_polygon_at`]. Same-polygon queries return the direct
    /// `[start, goal]` segment; otherwise the route crosses each shared edge
    /// at its midpoint. `None` when either endpoint is off-mesh or the
    /// polygon graph does not connect them.
    pub fn find_path(&self, start: Vec2, goal: Vec2) -> Option<Vec<Vec2>> {
        let Some(start_poly) = self.mesh.get_polygon_at(start) else {
            tracing::debug!(x = start.x, y = start.y, "path start lies outside the mesh");
            return None;
        };
        let Some(goal_poly) = self.mesh.get_polygon_at(goal) else {
            tracing::debug!(x = goal.x, y = goal.y, "path goal lies outside the mesh");
            return None;
        };

        let start_id = start_poly.id();
        let goal_id = goal_poly.id();

        if start_id == goal_id {
            return Some(vec![start, goal]);
        }

        let route = self.polygon_route(start_id, goal_id)?;

        let mut points = Vec::with_capacity(route.len() + 1);
        points.push(start);
        for w in route.windows(2) {
            let edge = self.mesh.get_edge_between(w[0], w[1])?;
            points.push(edge.midpoint());
        }
        points.push(goal);
        Some(points)
    }

    /// A* over polygon ids. Returns the polygon sequence from `start_id` to
    /// `goal_id` inclusive.
    fn polygon_route(&self, start_id: u32, goal_id: u32) -> Option<Vec<u32>> {
        let goal_center = self.mesh.get_polygon(goal_id)?.center();

        let quant = |d: f32| -> u32 { (d.max(0.0) * COST_SCALE) as u32 };

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut g_score: BTreeMap<u32, u32> = BTreeMap::new();
        let mut came_from: BTreeMap<u32, u32> = BTreeMap::new();
        let mut tie: u64 = 0;

        let start_center = self.mesh.get_polygon(start_id)?.center();
        g_score.insert(start_id, 0);
        open.push(OpenNode {
            f: quant(start_center.distance(goal_center)),
            g: 0,
            id: start_id,
            tie,
        });
        tie += 1;

        while let Some(node) = open.pop() {
            if node.id == goal_id {
                let mut route = vec![goal_id];
                let mut current = goal_id;
                while let Some(&prev) = came_from.get(&current) {
                    current = prev;
                    route.push(current);
                }
                route.reverse();
                return Some(route);
            }

            if g_score.get(&node.id).copied() != Some(node.g) {
                // Stale heap entry.
                continue;
            }

            let Some(current) = self.mesh.get_polygon(node.id) else {
                continue;
            };

            for &n in current.neighbors() {
                let Some(neighbor) = self.mesh.get_polygon(n) else {
                    continue;
                };

                // Cost between polygon centers, plus a per-hop bias that
                // prefers shorter polygon sequences on near-ties.
                let step = quant(current.center().distance(neighbor.center())).saturating_add(1);
                let tentative_g = node.g.saturating_add(step);
                if tentative_g >= g_score.get(&n).copied().unwrap_or(u32::MAX) {
                    continue;
                }

                came_from.insert(n, node.id);
                g_score.insert(n, tentative_g);
                open.push(OpenNode {
                    f: tentative_g.saturating_add(quant(neighbor.center().distance(goal_center))),
                    g: tentative_g,
                    id: n,
                    tie,
                });
                tie += 1;
            }
        }

        None
    }
}
