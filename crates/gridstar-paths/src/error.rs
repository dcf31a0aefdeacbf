use std::fmt;

use gridstar_core::Point;

/// Precondition violations reported by [`find_path`](crate::find_path).
///
/// "No path" is not an error: it is the empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The grid has no cells.
    EmptyGrid,
    /// The start point lies outside the grid.
    StartOutOfBounds(Point),
    /// The target point lies outside the grid.
    TargetOutOfBounds(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "path: grid has no cells"),
            Self::StartOutOfBounds(p) => write!(f, "path: start {p} is outside the grid"),
            Self::TargetOutOfBounds(p) => write!(f, "path: target {p} is outside the grid"),
        }
    }
}

impl std::error::Error for PathError {}
