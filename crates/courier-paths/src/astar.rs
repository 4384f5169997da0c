use std::collections::BinaryHeap;

use courier_core::Point;

use crate::SearchField;
use crate::field::OpenRef;
use crate::traits::AstarPather;

impl SearchField {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Every step costs 1, so the result minimizes step count. Returns the
    /// full path including both endpoints, or `None` if no path exists.
    /// Unreachability is an expected outcome, not an error: a goal that the
    /// pather never offers (an obstacle, say) cleanly exhausts the frontier.
    ///
    /// Out-of-bounds endpoints also return `None`. The starting cell itself
    /// is never re-validated: only the cells a route *enters* are filtered
    /// by the pather.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.astar_generation = self.astar_generation.wrapping_add(1);
        let cur_gen = self.astar_generation;

        // Initialise the start node.
        {
            let node = &mut self.astar_nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        // Insertion counter: the second key of the frontier ordering.
        let mut seq: u64 = 0;

        let mut open: BinaryHeap<OpenRef> = BinaryHeap::new();
        open.push(OpenRef {
            idx: start_idx,
            f: self.astar_nodes[start_idx].f,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.astar_nodes[ci].generation != cur_gen || !self.astar_nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.astar_nodes[ci].open = false;
            let current_g = self.astar_nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.astar_nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                seq += 1;
                open.push(OpenRef {
                    idx: ni,
                    f: n.f,
                    seq,
                });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct by walking parent links back to the origin.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.astar_nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
