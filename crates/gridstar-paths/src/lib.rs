//! Shortest paths on occupancy grids.
//!
//! This crate finds minimal-cost paths between two cells of a
//! [`gridstar_core::Grid`] with A*, moving in 8 directions between open
//! cells. Orthogonal steps cost 1 and diagonal steps √2; the Euclidean
//! distance to the target is the heuristic.
//!
//! - [`find_path`] / [`PathFinder::find_path`]: the grid-level entry point.
//! - [`PathFinder::astar_path`]: the search over any [`AstarPather`].
//! - [`PriorityQueue`]: the binary min-heap ordering the frontier.
//!
//! [`PathFinder`] owns its node arena, frontier and visited set and reuses
//! them, so repeated searches incur no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | step cost |
//! | [`AstarPather`] : [`WeightedPather`] | admissible estimate |
//!
//! [`GridPather`] implements all three for an occupancy grid.

mod astar;
mod distance;
mod error;
mod grid;
mod neighbors;
mod pathfinder;
mod queue;
mod traits;

pub use distance::{chebyshev, euclidean, path_cost};
pub use error::PathError;
pub use grid::GridPather;
pub use neighbors::{OFFSETS, neighbors_8};
pub use pathfinder::{PathFinder, find_path};
pub use queue::{EmptyQueueError, PriorityQueue};
pub use traits::{AstarPather, Pather, WeightedPather};
