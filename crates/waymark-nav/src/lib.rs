//! Grid and polygon-mesh navigation primitives.
//!
//! Two synchronous planners over caller-owned map data: [`AStar`] searches a
//! [`GridMap`] cell by cell, with optional diagonal movement and a choice of
//! [`Heuristic`]; [`NavMeshPathfinder`] searches the polygon adjacency graph
//! of a [`NavMesh`] and returns world-space waypoints. [`smooth_path`] and the
//! [`coords`] functions bridge grid results back to world space.
//!
//! Nothing here holds global state, spawns tasks, or locks: maps are explicit
//! instances mutated between searches in the caller's loop, and concurrent
//! read-only searches against an unmutated map are safe.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod coords;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod math;
pub mod mesh;
pub mod pathfinder;
pub mod smooth;

pub use astar::AStar;
pub use coords::{cell_to_world_coords, path_to_world_coords, world_to_grid_coords};
pub use error::{NavError, Result};
pub use grid::{Cell, GridMap};
pub use heuristic::Heuristic;
pub use math::Vec2;
pub use mesh::{NavMesh, NavMeshEdge, NavMeshPolygon};
pub use pathfinder::NavMeshPathfinder;
pub use smooth::{line_of_sight, smooth_path};
