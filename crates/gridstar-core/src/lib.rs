//! **gridstar-core** — geometry primitives and the occupancy grid.
//!
//! This crate provides the types shared across the *gridstar* workspace:
//! [`Point`] and [`Range`] for integer grid geometry, and [`Grid`], a
//! rectangular map of [`CellState::Open`] / [`CellState::Blocked`] cells.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{CellState, Grid, GridError};
