use gridstar_core::Point;
use log::{debug, trace};

use crate::PathFinder;
use crate::pathfinder::{NodeRef, SearchNode};
use crate::traits::AstarPather;

impl PathFinder {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no path
    /// exists within the current range. A cell may sit in the frontier
    /// several times; the first time it is popped finalizes it and later
    /// copies are skipped.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.idx(from)?;
        self.idx(to)?;
        trace!("astar: {from} -> {to} in {}", self.rng);

        self.begin_search();
        let cur_gen = self.generation;

        let h = pather.estimate(from, to);
        self.nodes.push(SearchNode {
            pos: from,
            g: 0.0,
            h,
            parent: None,
        });
        self.open.push(NodeRef { id: 0, f: h });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut goal = None;

        while let Ok(current) = self.open.pop() {
            let node = self.nodes[current.id];
            let Some(ci) = self.idx(node.pos) else {
                continue;
            };

            // Stale duplicate of a finalized cell.
            if self.visited[ci] == cur_gen {
                continue;
            }
            self.visited[ci] = cur_gen;
            self.expanded += 1;

            if node.pos == to {
                goal = Some(current.id);
                break;
            }

            nbuf.clear();
            pather.neighbors(node.pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.visited[ni] == cur_gen {
                    continue;
                }
                let next = SearchNode {
                    pos: np,
                    g: node.g + pather.cost(node.pos, np),
                    h: pather.estimate(np, to),
                    parent: Some(current.id),
                };
                let id = self.nodes.len();
                self.nodes.push(next);
                self.open.push(NodeRef { id, f: next.f() });
            }
        }

        self.nbuf = nbuf;

        let Some(goal) = goal else {
            debug!(
                "astar: no path {from} -> {to} ({} expanded, {} nodes)",
                self.expanded,
                self.nodes.len()
            );
            return None;
        };
        let path = self.reconstruct(goal);
        debug!(
            "astar: path {from} -> {to}: {} steps, cost {:.3} ({} expanded, {} nodes)",
            path.len() - 1,
            self.nodes[goal].g,
            self.expanded,
            self.nodes.len()
        );
        Some(path)
    }
}
