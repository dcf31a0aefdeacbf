//! [`GridPather`]: the pather traits for an occupancy [`Grid`].

use gridstar_core::{Grid, Point};

use crate::distance::euclidean;
use crate::neighbors::neighbors_8;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Moves in 8 directions between [`Open`](gridstar_core::CellState::Open)
/// cells, with Euclidean step cost and estimate.
///
/// Only the destination of a step is checked, so a search may leave a
/// blocked start cell.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    grid: &'a Grid,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        neighbors_8(p, buf, |n| self.grid.is_open(n));
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Point, to: Point) -> f64 {
        euclidean(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::neighbors::OFFSETS;

    #[test]
    fn neighbors_skip_blocked_and_outside() {
        let grid = Grid::parse(".#.\n...\n..#").unwrap();
        let pather = GridPather::new(&grid);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 1)]);

        buf.clear();
        pather.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 6);
        assert!(!buf.contains(&Point::new(1, 0)));
        assert!(!buf.contains(&Point::new(2, 2)));
    }

    #[test]
    fn neighbors_of_blocked_cell() {
        let grid = Grid::parse("#.\n..").unwrap();
        let pather = GridPather::new(&grid);
        let mut buf = Vec::new();
        pather.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn estimate_matches_cost_for_single_steps() {
        let grid = Grid::new(3, 3);
        let pather = GridPather::new(&grid);
        let c = Point::new(1, 1);
        for n in OFFSETS.map(|d| c + d) {
            assert_eq!(pather.cost(c, n), pather.estimate(c, n));
        }
    }
}
