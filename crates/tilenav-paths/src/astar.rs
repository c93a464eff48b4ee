//! Best-first path search between two tiles.

use std::collections::{BinaryHeap, HashMap, HashSet};

use log::debug;
use tilenav_core::Point;

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::tileset::TileSet;
use crate::traits::TileGraph;

/// Per-tile scratch data for one search run.
///
/// Lives only inside [`PathFinder::find_path`]; nothing is written back to
/// the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchState {
    /// Manhattan distance from the search start.
    pub g: i64,
    /// Manhattan distance to the goal.
    pub h: i64,
    /// Tile this one was reached from. `None` only for the start.
    pub parent: Option<Point>,
}

impl SearchState {
    /// Total estimated cost.
    #[inline]
    pub fn f(&self) -> i64 {
        self.g + self.h
    }
}

/// Open-list entry, ordered by `f` then by insertion sequence so that the
/// earliest inserted of several equal-`f` tiles pops first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i64,
    seq: u64,
    pos: Point,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds routes between tiles of a graph.
pub struct PathFinder<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: TileGraph + ?Sized> PathFinder<'g, G> {
    /// Create a path finder over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Find a route from `start` to `goal`.
    ///
    /// The returned path excludes `start` and ends with `goal`; it is empty
    /// when the goal cannot be reached (or equals `start`). Only tiles in
    /// `allowed` are entered, unless it is `None` or empty, in which case
    /// the whole graph is searchable. Blocked tiles are never entered.
    ///
    /// Costs are not accumulated along the route: `g` and `h` are the
    /// Manhattan distances from `start` and to `goal`, fixed when a tile is
    /// first opened. Among open tiles of equal `f` the one opened first is
    /// expanded first, which decides between equally long routes.
    pub fn find_path(
        &self,
        start: Point,
        goal: Point,
        allowed: Option<&TileSet>,
    ) -> Result<Vec<Point>, SearchError> {
        if !self.graph.contains(start) {
            return Err(SearchError::UnknownTile(start));
        }
        let allowed = allowed.filter(|a| !a.is_empty());

        let mut states: HashMap<Point, SearchState> = HashMap::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut in_open: HashSet<Point> = HashSet::new();
        let mut closed: HashSet<Point> = HashSet::new();
        let mut seq: u64 = 0;

        let origin = SearchState {
            g: 0,
            h: manhattan(start, goal),
            parent: None,
        };
        states.insert(start, origin);
        open.push(OpenEntry {
            f: origin.f(),
            seq,
            pos: start,
        });
        in_open.insert(start);

        let mut nbuf = Vec::with_capacity(4);

        while let Some(current) = open.pop() {
            let cp = current.pos;
            in_open.remove(&cp);
            closed.insert(cp);

            if cp == goal {
                let path = Self::reconstruct(&states, start, goal);
                debug!(
                    "path {start} -> {goal}: {} steps, {} tiles expanded",
                    path.len(),
                    closed.len()
                );
                return Ok(path);
            }

            nbuf.clear();
            self.graph.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                if closed.contains(&np) {
                    continue;
                }
                if allowed.is_some_and(|a| !a.contains(np)) {
                    continue;
                }
                match self.graph.get(np) {
                    Some(t) if !t.blocked => {}
                    _ => continue,
                }

                let state = SearchState {
                    g: manhattan(start, np),
                    h: manhattan(np, goal),
                    parent: Some(cp),
                };
                // The parent follows the latest expansion even while the
                // tile waits in the open list; its f cannot change.
                states.insert(np, state);

                if in_open.insert(np) {
                    seq += 1;
                    open.push(OpenEntry {
                        f: state.f(),
                        seq,
                        pos: np,
                    });
                }
            }
        }

        debug!(
            "path {start} -> {goal}: unreachable, {} tiles expanded",
            closed.len()
        );
        Ok(Vec::new())
    }

    /// Walk parents back from `goal`, then flip into start-to-goal order.
    fn reconstruct(states: &HashMap<Point, SearchState>, start: Point, goal: Point) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cur = goal;
        while cur != start {
            path.push(cur);
            match states.get(&cur).and_then(|s| s.parent) {
                Some(p) => cur = p,
                None => break,
            }
        }
        path.reverse();
        path
    }
}
