use std::collections::HashSet;

use tilenav_core::Point;

/// A deduplicated set of tile coordinates that remembers insertion order.
///
/// Range queries return one, and path searches take one as their allowed
/// area. Iteration follows insertion order so results are reproducible;
/// equality ignores it.
#[derive(Debug, Clone, Default)]
pub struct TileSet {
    order: Vec<Point>,
    members: HashSet<Point>,
}

impl TileSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `p`. Returns `false` if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.members.insert(p) {
            self.order.push(p);
            true
        } else {
            false
        }
    }

    /// Whether `p` is in the set.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.members.contains(&p)
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Points in insertion order.
    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.order
    }

    /// Iterate over points in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.order.iter()
    }

    /// Whether every point of `self` is also in `other`.
    pub fn is_subset(&self, other: &TileSet) -> bool {
        self.members.is_subset(&other.members)
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }
}

impl PartialEq for TileSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for TileSet {}

impl Extend<Point> for TileSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl FromIterator<Point> for TileSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a TileSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for TileSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TileSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.order)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TileSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = Vec::<Point>::deserialize(deserializer)?;
        Ok(points.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_dedups_and_keeps_order() {
        let mut s = TileSet::new();
        assert!(s.insert(Point::new(2, 0)));
        assert!(s.insert(Point::new(0, 0)));
        assert!(!s.insert(Point::new(2, 0)));
        assert_eq!(s.as_slice(), &[Point::new(2, 0), Point::new(0, 0)]);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn equality_ignores_order() {
        let a: TileSet = [Point::new(1, 1), Point::new(0, 0)].into_iter().collect();
        let b: TileSet = [Point::new(0, 0), Point::new(1, 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn subset() {
        let small: TileSet = [Point::new(0, 0)].into_iter().collect();
        let big: TileSet = [Point::new(0, 0), Point::new(0, 1)].into_iter().collect();
        assert!(small.is_subset(&big));
        assert!(!big.is_subset(&small));
        assert!(TileSet::new().is_subset(&small));
    }

    #[test]
    fn clear_empties_both_views() {
        let mut s: TileSet = [Point::new(0, 0)].into_iter().collect();
        s.clear();
        assert!(s.is_empty());
        assert!(!s.contains(Point::new(0, 0)));
        assert!(s.insert(Point::new(0, 0)));
    }
}
