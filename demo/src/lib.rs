//! Demonstration scenario for the gridstar pathfinder.
//!
//! Builds a [`Scenario`] (the fixed 5×5 map, or a text map loaded from a
//! file), runs the search and formats the result for the console.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::Parser;
use gridstar_core::{CellState, Grid, GridError, Point};
use gridstar_paths::{PathError, find_path, path_cost};
use log::info;

pub const DEMO_SIZE: Point = Point::new(5, 5);
/// Blocked cells of the built-in map.
pub const DEMO_BLOCKED: [Point; 3] = [Point::new(1, 1), Point::new(1, 2), Point::new(2, 2)];

pub const DEMO_START: Point = Point::new(0, 0);
pub const DEMO_TARGET: Point = Point::new(4, 4);

/// Character used to draw the path over the map.
pub const PATH_CHAR: char = '*';

/// Find and print a shortest 8-directional path on an occupancy grid.
///
/// Without a map the built-in 5x5 demo grid is searched from (0, 0) to
/// (4, 4). Set `RUST_LOG=debug` to see search statistics.
#[derive(Parser, Debug)]
#[command(name = "gridstar", version, about)]
pub struct Args {
    /// Text map (. open, # blocked), searched from the top-left to the
    /// bottom-right corner
    pub map: Option<PathBuf>,
}

impl Args {
    /// The scenario selected on the command line.
    pub fn scenario(&self) -> Result<Scenario, DemoError> {
        match &self.map {
            Some(path) => Scenario::from_file(path),
            None => Ok(Scenario::demo()),
        }
    }
}

/// A grid with the two endpoints to connect.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub grid: Grid,
    pub start: Point,
    pub target: Point,
}

impl Scenario {
    /// The fixed demonstration scenario.
    pub fn demo() -> Self {
        let mut grid = Grid::new(DEMO_SIZE.x, DEMO_SIZE.y);
        for p in DEMO_BLOCKED {
            grid.set(p, CellState::Blocked);
        }
        Self {
            grid,
            start: DEMO_START,
            target: DEMO_TARGET,
        }
    }

    /// Parse a text map and connect its top-left and bottom-right corners.
    pub fn from_map(text: &str) -> Result<Self, DemoError> {
        let grid = Grid::parse(text)?;
        let target = grid.size() - Point::new(1, 1);
        Ok(Self {
            grid,
            start: Point::ZERO,
            target,
        })
    }

    /// Read a text map from `path`. See [`from_map`](Self::from_map).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DemoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("loaded map from {}", path.display());
        Self::from_map(&text)
    }

    /// Search for a path; empty when the target is unreachable.
    pub fn run(&self) -> Result<Vec<Point>, DemoError> {
        Ok(find_path(self.start, self.target, &self.grid)?)
    }
}

/// Render the map with `path` drawn over it.
pub fn draw_path(grid: &Grid, path: &[Point]) -> String {
    let mut out = String::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = if path.contains(&p) {
                PATH_CHAR
            } else {
                grid.at(p).map_or(' ', |c| c.as_char())
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Console report for a search result.
pub fn report(scenario: &Scenario, path: &[Point]) -> String {
    let mut out = String::new();
    if path.is_empty() {
        out.push_str("Path not found!\n");
        return out;
    }
    out.push_str("Path found!\n");
    let coords: Vec<String> = path.iter().map(Point::to_string).collect();
    out.push_str(&format!("{}\n", coords.join(" ")));
    out.push_str(&format!("Cost: {:.3}\n", path_cost(path)));
    out.push_str(&draw_path(&scenario.grid, path));
    out
}

/// Errors reported by the demo binary.
#[derive(Debug)]
pub enum DemoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Grid(GridError),
    Path(PathError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "reading {}: {source}", path.display()),
            Self::Grid(e) => write!(f, "{e}"),
            Self::Path(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            Self::Path(e) => Some(e),
        }
    }
}

impl From<GridError> for DemoError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PathError> for DemoError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
