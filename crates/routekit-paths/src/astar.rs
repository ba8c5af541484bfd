use std::collections::BinaryHeap;

use routekit_core::{Grid, Point, Range};

use crate::distance::manhattan;
use crate::error::PathError;

/// Parent sentinel for the start node.
const NO_PARENT: usize = usize::MAX;

/// Per-cell search bookkeeping, kept in a flat arena indexed like the grid.
#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: NO_PARENT,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
struct NodeRef {
    idx: usize,
    f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; break ties
        // by arena index so pop order is deterministic.
        other.f.cmp(&self.f).then(other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A\* shortest-path searcher over a [`Grid`].
///
/// Owns a node arena sized to the last grid seen, reused across queries: a
/// generation counter lazily invalidates every node at the start of each
/// search, so repeated queries allocate nothing beyond the returned path
/// (and the arena only grows when a larger grid is searched).
///
/// Each call is independent; reuse is purely an allocation optimization.
pub struct PathFinder {
    rng: Range,
    width: usize,
    nodes: Vec<Node>,
    generation: u32,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create a new `PathFinder` with an empty arena.
    pub fn new() -> Self {
        Self {
            rng: Range::default(),
            width: 0,
            nodes: Vec::new(),
            generation: 0,
        }
    }

    /// Compute the shortest path from `from` to `to` on `grid`.
    ///
    /// The returned path includes both endpoints and moves one cardinal step
    /// at a time; it is optimal (fewest steps) for uniform step cost. An
    /// unreachable goal yields `Ok` with an empty vector. Out-of-bounds or
    /// blocked endpoints fail with [`PathError`] before any search work.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, PathError> {
        for p in [from, to] {
            if !grid.contains(p) {
                return Err(PathError::OutOfBounds(p));
            }
        }
        for p in [from, to] {
            if !grid.is_passable(p) {
                return Err(PathError::Blocked(p));
            }
        }

        self.ensure_range(grid.bounds());
        let start_idx = self.idx(from);
        let goal_idx = self.idx(to);

        if start_idx == goal_idx {
            return Ok(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries (lazy deletion stands in for decrease-key).
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            for np in current_point.neighbors_4() {
                // Also rejects out-of-bounds neighbors, so idx is safe below.
                if !grid.is_passable(np) {
                    continue;
                }
                let ni = self.idx(np);
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already reached this search; only a strict improvement
                    // is worth recording.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        if !found {
            // Unreachable is a normal outcome, not an error.
            return Ok(Vec::new());
        }

        // Walk parent links back from the goal, then reverse into
        // start-to-goal order.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Resize the arena for `rng` if needed. Shrinking keeps capacity;
    /// stale nodes are invisible thanks to generation stamping.
    fn ensure_range(&mut self, rng: Range) {
        if rng == self.rng && !self.nodes.is_empty() {
            return;
        }
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        if new_len > self.nodes.len() {
            self.nodes.clear();
            self.nodes.resize(new_len, Node::default());
            self.generation = 0;
        }
    }

    /// Convert a `Point` to a flat arena index. Callers must only pass
    /// points inside the current range (endpoints are validated up front,
    /// neighbors are filtered through `Grid::is_passable`).
    #[inline]
    fn idx(&self, p: Point) -> usize {
        debug_assert!(self.rng.contains(p));
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        y * self.width + x
    }

    /// Convert a flat arena index back to a `Point`.
    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

/// One-off shortest-path query; see [`PathFinder::find_path`].
pub fn find_path(grid: &Grid, from: Point, to: Point) -> Result<Vec<Point>, PathError> {
    PathFinder::new().find_path(grid, from, to)
}
