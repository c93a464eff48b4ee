use tilenav_core::{Point, Tile, TileMap};

/// Read-only view over a coordinate-keyed tile collection.
///
/// Only [`get`](Self::get) is required. Coordinates without a tile are not
/// an error anywhere in this trait: they simply have no neighbours.
pub trait TileGraph {
    /// The tile at `p`, if any.
    fn get(&self, p: Point) -> Option<&Tile>;

    /// Whether a tile exists at `p`.
    fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// Append the orthogonal neighbours of `p` that exist and are within
    /// climbing reach of `p`'s tile. The caller clears `buf` before calling.
    ///
    /// Neighbours are pushed right, left, up, down. Blocked tiles are still
    /// neighbours; excluding them is up to the search.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let Some(here) = self.get(p) else {
            return;
        };
        for n in p.neighbors_4() {
            if let Some(t) = self.get(n) {
                if here.can_step_to(t) {
                    buf.push(n);
                }
            }
        }
    }
}

impl TileGraph for TileMap {
    #[inline]
    fn get(&self, p: Point) -> Option<&Tile> {
        TileMap::get(self, p)
    }
}

impl<G: TileGraph + ?Sized> TileGraph for &G {
    #[inline]
    fn get(&self, p: Point) -> Option<&Tile> {
        (**self).get(p)
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbors_of(map: &TileMap, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        map.neighbors(p, &mut buf);
        buf
    }

    #[test]
    fn interior_tile_has_four_neighbors_in_order() {
        let map = TileMap::flat(3, 3);
        assert_eq!(
            neighbors_of(&map, Point::new(1, 1)),
            vec![
                Point::new(2, 1),
                Point::new(0, 1),
                Point::new(1, 2),
                Point::new(1, 0)
            ]
        );
    }

    #[test]
    fn corner_tile_has_two_neighbors() {
        let map = TileMap::flat(3, 3);
        assert_eq!(
            neighbors_of(&map, Point::new(0, 0)),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn missing_tile_has_no_neighbors() {
        let map = TileMap::flat(3, 3);
        assert!(neighbors_of(&map, Point::new(7, 7)).is_empty());
        assert!(!map.contains(Point::new(7, 7)));
    }

    #[test]
    fn climb_rule_filters_neighbors() {
        // Middle row: 0 at x=0, 1 at x=1, 3 at x=2.
        let map = TileMap::from_text("013").unwrap();
        assert_eq!(neighbors_of(&map, Point::new(1, 0)), vec![Point::new(0, 0)]);
        assert!(neighbors_of(&map, Point::new(2, 0)).is_empty());
    }

    #[test]
    fn blocked_tiles_are_still_neighbors() {
        let map = TileMap::from_text(".#").unwrap();
        assert_eq!(neighbors_of(&map, Point::new(0, 0)), vec![Point::new(1, 0)]);
    }

    #[test]
    fn tiles_at_the_coordinate_limits_do_not_wrap() {
        let hi = Point::new(i32::MAX, 0);
        let lo = Point::new(i32::MIN, 0);
        let below = Point::new(i32::MAX, -1);
        let map: TileMap = [Tile::new(hi, 0), Tile::new(lo, 0), Tile::new(below, 0)]
            .into_iter()
            .collect();
        assert_eq!(neighbors_of(&map, hi), vec![below]);
        assert!(neighbors_of(&map, lo).is_empty());
    }

    #[test]
    fn reference_forwards_to_graph() {
        let map = TileMap::flat(2, 1);
        let r = &map;
        let mut buf = Vec::new();
        TileGraph::neighbors(&r, Point::ZERO, &mut buf);
        assert_eq!(buf, vec![Point::new(1, 0)]);
        assert!(TileGraph::contains(&r, Point::new(1, 0)));
    }
}
