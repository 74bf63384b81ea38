use std::collections::{BTreeMap, BTreeSet};

use crate::error::{NavError, Result};
use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Convex or simple polygon of a navigation mesh.
///
/// Vertices are immutable after construction; the neighbor set is populated
/// by [`NavMesh::build_connections`] and holds ids only, never polygon
/// references.
#[derive(Debug, Clone)]
pub struct NavMeshPolygon {
    id: u32,
    vertices: Vec<Vec2>,
    center: Vec2,
    neighbors: BTreeSet<u32>,
}

impl NavMeshPolygon {
    /// Build a polygon from vertices in a consistent winding order.
    ///
    /// Fails with [`NavError::DegeneratePolygon`] for fewer than 3 vertices.
    pub fn new(id: u32, vertices: Vec<Vec2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(NavError::DegeneratePolygon {
                count: vertices.len(),
            });
        }

        let mut sum = Vec2::ZERO;
        for &v in &vertices {
            sum += v;
        }
        let center = sum / vertices.len() as f32;

        Ok(Self {
            id,
            vertices,
            center,
            neighbors: BTreeSet::new(),
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Arithmetic mean of the vertices (vertex centroid, not area centroid).
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Ids of polygons sharing a boundary edge with this one.
    ///
    /// Empty until [`NavMesh::build_connections`] runs.
    pub fn neighbors(&self) -> &BTreeSet<u32> {
        &self.neighbors
    }

    /// Even-odd (ray crossing) point-in-polygon test.
    ///
    /// Boundary convention: an edge counts as crossed when its endpoints
    /// straddle the horizontal through `p` under `y > p.y` and the crossing
    /// lies strictly right of `p.x`. For axis-aligned geometry this makes
    /// bottom/left boundaries inside and top/right boundaries outside, so a
    /// point on a shared edge belongs to exactly one of the two polygons.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let mut inside = false;
        let n = self.vertices.len();
        let mut j = n - 1;

        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > p.y) != (vj.y > p.y) {
                let t = (p.y - vi.y) / (vj.y - vi.y);
                let x = vi.x + t * (vj.x - vi.x);
                if p.x < x {
                    inside = !inside;
                }
            }
            j = i;
        }

        inside
    }

    /// Boundary segment common to `self` and `other`, if any.
    ///
    /// Two consecutive vertices of one polygon must coincide exactly, in
    /// either order, with two consecutive vertices of the other. Mesh tooling
    /// is expected to emit bit-identical coordinates for shared vertices;
    /// nearly-equal vertices are not welded here.
    pub fn get_shared_edge(&self, other: &NavMeshPolygon) -> Option<(Vec2, Vec2)> {
        for (a, b) in polygon_edges(&self.vertices) {
            for (c, d) in polygon_edges(&other.vertices) {
                if (a == c && b == d) || (a == d && b == c) {
                    return Some((a, b));
                }
            }
        }
        None
    }
}

/// Shared boundary segment between two connected polygons.
///
/// Created only by [`NavMesh::build_connections`]; the mesh owns the edge
/// list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavMeshEdge {
    pub poly1_id: u32,
    pub poly2_id: u32,
    pub start: Vec2,
    pub end: Vec2,
}

impl NavMeshEdge {
    /// Crossing point used when converting a polygon route to waypoints.
    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn connects(&self, a: u32, b: u32) -> bool {
        (self.poly1_id == a && self.poly2_id == b) || (self.poly1_id == b && self.poly2_id == a)
    }
}

/// Polygon registry plus the adjacency graph built from shared edges.
///
/// Polygons are keyed by id in a `BTreeMap` so every scan (connection
/// building, point lookup) runs in ascending id order and results are
/// reproducible.
#[derive(Debug, Clone, Default)]
pub struct NavMesh {
    polygons: BTreeMap<u32, NavMeshPolygon>,
    edges: Vec<NavMeshEdge>,
    edges_by_poly: BTreeMap<u32, Vec<usize>>,
}

impl NavMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a polygon. Fails with [`NavError::DuplicatePolygon`] if the
    /// id is already taken; the mesh is left unchanged on failure.
    pub fn add_polygon(&mut self, polygon: NavMeshPolygon) -> Result<()> {
        if self.polygons.contains_key(&polygon.id) {
            return Err(NavError::DuplicatePolygon { id: polygon.id });
        }
        self.polygons.insert(polygon.id, polygon);
        Ok(())
    }

    /// Recompute every pairwise shared edge from scratch.
    ///
    /// Previously built edges and neighbor sets are cleared first, so calling
    /// this repeatedly (or after late `add_polygon`s) always converges to the
    /// same final state for the same polygon set.
    pub fn build_connections(&mut self) {
        self.edges.clear();
        self.edges_by_poly.clear();
        for polygon in self.polygons.values_mut() {
            polygon.neighbors.clear();
        }

        let ids: Vec<u32> = self.polygons.keys().copied().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let shared = self.polygons[&a].get_shared_edge(&self.polygons[&b]);
                let Some((start, end)) = shared else { continue };

                let edge_idx = self.edges.len();
                self.edges.push(NavMeshEdge {
                    poly1_id: a,
                    poly2_id: b,
                    start,
                    end,
                });
                self.edges_by_poly.entry(a).or_default().push(edge_idx);
                self.edges_by_poly.entry(b).or_default().push(edge_idx);

                if let Some(p) = self.polygons.get_mut(&a) {
                    p.neighbors.insert(b);
                }
                if let Some(p) = self.polygons.get_mut(&b) {
                    p.neighbors.insert(a);
                }
            }
        }

        tracing::debug!(
            polygons = self.polygons.len(),
            edges = self.edges.len(),
            "rebuilt navmesh connections"
        );
    }

    pub fn get_polygon(&self, id: u32) -> Option<&NavMeshPolygon> {
        self.polygons.get(&id)
    }

    /// First polygon containing `point`, scanning in ascending id order.
    pub fn get_polygon_at(&self, point: Vec2) -> Option<&NavMeshPolygon> {
        self.polygons.values().find(|p| p.contains_point(point))
    }

    pub fn get_neighbors(&self, id: u32) -> Option<&BTreeSet<u32>> {
        self.polygons.get(&id).map(|p| p.neighbors())
    }

    pub fn get_edge_between(&self, a: u32, b: u32) -> Option<&NavMeshEdge> {
        let indices = self.edges_by_poly.get(&a)?;
        indices
            .iter()
            .map(|&i| &self.edges[i])
            .find(|e| e.connects(a, b))
    }

    /// Remove a polygon along with its edges and the back-references held by
    /// former neighbors. Returns the removed polygon, or `None` for an
    /// unknown id.
    pub fn remove_polygon(&mut self, id: u32) -> Option<NavMeshPolygon> {
        let removed = self.polygons.remove(&id)?;

        for neighbor in &removed.neighbors {
            if let Some(p) = self.polygons.get_mut(neighbor) {
                p.neighbors.remove(&id);
            }
        }

        self.edges.retain(|e| e.poly1_id != id && e.poly2_id != id);
        self.rebuild_edge_index();

        Some(removed)
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
        self.edges.clear();
        self.edges_by_poly.clear();
    }

    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn polygons(&self) -> impl Iterator<Item = &NavMeshPolygon> {
        self.polygons.values()
    }

    pub fn edges(&self) -> &[NavMeshEdge] {
        &self.edges
    }

    /// Project `p` onto the nearest polygon. Points already inside the mesh
    /// come back unchanged; `None` only for an empty mesh.
    pub fn nearest_point(&self, p: Vec2) -> Option<Vec2> {
        if self.get_polygon_at(p).is_some() {
            return Some(p);
        }

        let mut best: Option<(f32, Vec2)> = None;
        for polygon in self.polygons.values() {
            for (a, b) in polygon_edges(&polygon.vertices) {
                let q = closest_point_on_segment(p, a, b);
                let d2 = p.distance_squared(q);
                match best {
                    None => best = Some((d2, q)),
                    Some((best_d2, _)) if d2 < best_d2 => best = Some((d2, q)),
                    _ => {}
                }
            }
        }
        best.map(|(_, q)| q)
    }

    fn rebuild_edge_index(&mut self) {
        self.edges_by_poly.clear();
        for (i, e) in self.edges.iter().enumerate() {
            self.edges_by_poly.entry(e.poly1_id).or_default().push(i);
            self.edges_by_poly.entry(e.poly2_id).or_default().push(i);
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PolygonSerde {
    id: u32,
    vertices: Vec<Vec2>,
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct NavMeshSerde {
    polygons: Vec<PolygonSerde>,
}

#[cfg(feature = "serde")]
impl Serialize for NavMesh {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        NavMeshSerde {
            polygons: self
                .polygons
                .values()
                .map(|p| PolygonSerde {
                    id: p.id,
                    vertices: p.vertices.clone(),
                })
                .collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for NavMesh {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = NavMeshSerde::deserialize(deserializer)?;
        let mut mesh = NavMesh::new();
        for poly in data.polygons {
            let polygon =
                NavMeshPolygon::new(poly.id, poly.vertices).map_err(serde::de::Error::custom)?;
            mesh.add_polygon(polygon).map_err(serde::de::Error::custom)?;
        }
        mesh.build_connections();
        Ok(mesh)
    }
}

fn polygon_edges(vertices: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| (vertices[i], vertices[(i + 1) % n]))
}

fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let denom = ab.dot(ab);
    if denom <= f32::EPSILON {
        return a;
    }
    let t = (p - a).dot(ab) / denom;
    let t = t.clamp(0.0, 1.0);
    a + ab * t
}
