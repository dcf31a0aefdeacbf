use std::cmp::Ordering;

use gridstar_core::{Grid, Point, Range};

use crate::error::PathError;
use crate::grid::GridPather;
use crate::queue::PriorityQueue;

// ---------------------------------------------------------------------------
// Search nodes
// ---------------------------------------------------------------------------

/// One explored or frontier state, stored in the [`PathFinder`] arena.
///
/// `parent` is the arena index of the node this one was expanded from; the
/// start node has none.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    pub(crate) pos: Point,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) parent: Option<usize>,
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> f64 {
        self.g + self.h
    }
}

/// Frontier entry: an arena index with its cached `f`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) id: usize,
    pub(crate) f: f64,
}

impl NodeRef {
    pub(crate) fn by_f(a: &NodeRef, b: &NodeRef) -> Ordering {
        a.f.total_cmp(&b.f)
    }
}

pub(crate) type Frontier = PriorityQueue<NodeRef>;

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Reusable A* search state for a grid rectangle.
///
/// `PathFinder` owns the node arena, the frontier and the visited stamps, so
/// repeated searches on grids of the same size do not reallocate after the
/// first one. Concurrent searches each need their own `PathFinder`; the
/// grid itself can be shared.
pub struct PathFinder {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) open: Frontier,
    /// A cell is visited when its stamp equals `generation`.
    pub(crate) visited: Vec<u32>,
    pub(crate) generation: u32,
    pub(crate) expanded: usize,
    // scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(Range::default())
    }
}

impl PathFinder {
    /// Create a new `PathFinder` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: Vec::new(),
            open: PriorityQueue::new(NodeRef::by_f as fn(&NodeRef, &NodeRef) -> Ordering),
            visited: vec![0; rng.len()],
            generation: 0,
            expanded: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range.
    ///
    /// The visited stamps are only reallocated when the new range has more
    /// cells than the current capacity.
    pub fn set_range(&mut self, rng: Range) {
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        let len = rng.len();
        if len > self.visited.len() {
            self.visited.clear();
            self.visited.resize(len, 0);
            self.generation = 0;
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of nodes finalized by the last search.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Find a minimal-cost 8-directional path from `start` to `target`
    /// through the open cells of `grid`.
    ///
    /// Returns the path with both endpoints, or an empty path if `target`
    /// cannot be reached. The range is adjusted to the grid's bounds first.
    pub fn find_path(
        &mut self,
        start: Point,
        target: Point,
        grid: &Grid,
    ) -> Result<Vec<Point>, PathError> {
        let bounds = grid.bounds();
        if bounds.is_empty() {
            return Err(PathError::EmptyGrid);
        }
        if !bounds.contains(start) {
            return Err(PathError::StartOutOfBounds(start));
        }
        if !bounds.contains(target) {
            return Err(PathError::TargetOutOfBounds(target));
        }
        if self.rng != bounds {
            self.set_range(bounds);
        }
        let pather = GridPather::new(grid);
        Ok(self.astar_path(&pather, start, target).unwrap_or_default())
    }

    // -----------------------------------------------------------------------
    // Search helpers
    // -----------------------------------------------------------------------

    /// Reset per-search state: empty arena and frontier, fresh visited set.
    pub(crate) fn begin_search(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.expanded = 0;
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from 2^32 searches ago would read as visited.
            self.visited.fill(0);
            self.generation = 1;
        }
    }

    /// Walk parent links from `goal` back to the start and reverse.
    pub(crate) fn reconstruct(&self, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(id) = cur {
            let node = &self.nodes[id];
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }
}

/// Find a path on `grid` with a fresh [`PathFinder`].
///
/// See [`PathFinder::find_path`].
pub fn find_path(start: Point, target: Point, grid: &Grid) -> Result<Vec<Point>, PathError> {
    PathFinder::new(grid.bounds()).find_path(start, target, grid)
}
