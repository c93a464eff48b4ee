//! Step-limited reachability.

use log::trace;
use tilenav_core::Point;

use crate::error::SearchError;
use crate::tileset::TileSet;
use crate::traits::TileGraph;

/// Computes the tiles reachable from an origin in a fixed number of steps.
pub struct RangeFinder<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: TileGraph + ?Sized> RangeFinder<'g, G> {
    /// Create a range finder over `graph`.
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// Every tile within `steps` orthogonal steps of `origin`.
    ///
    /// Expansion runs exactly `steps` rounds. Each round the neighbours of
    /// the whole frontier, deduplicated, become the next frontier and are
    /// merged into the result. Steps only follow graph edges, so the climb
    /// rule applies; blocked tiles are included (a path search excludes
    /// them later).
    ///
    /// The result always contains `origin`, first, followed by the other
    /// tiles in discovery order.
    pub fn tiles_in_range(&self, origin: Point, steps: u32) -> Result<TileSet, SearchError> {
        if !self.graph.contains(origin) {
            return Err(SearchError::UnknownTile(origin));
        }

        let mut in_range = TileSet::new();
        in_range.insert(origin);

        let mut frontier = TileSet::new();
        frontier.insert(origin);

        let mut nbuf = Vec::with_capacity(4);

        for round in 0..steps {
            let mut next = TileSet::new();
            for &p in frontier.iter() {
                nbuf.clear();
                self.graph.neighbors(p, &mut nbuf);
                next.extend(nbuf.iter().copied());
            }
            in_range.extend(next.iter().copied());
            trace!(
                "range {origin}: round {} frontier {} total {}",
                round + 1,
                next.len(),
                in_range.len()
            );
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        Ok(in_range)
    }
}
