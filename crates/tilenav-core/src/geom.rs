//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Grid coordinates use a math-style orientation: X grows right and Y grows
//! *up*, so a step of `(0, 1)` is the "Up" direction of a path.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer grid coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// One step right.
    pub const RIGHT: Self = Self { x: 1, y: 0 };
    /// One step left.
    pub const LEFT: Self = Self { x: -1, y: 0 };
    /// One step up.
    pub const UP: Self = Self { x: 0, y: 1 };
    /// One step down.
    pub const DOWN: Self = Self { x: 0, y: -1 };

    /// The four unit steps in search order: right, left, up, down.
    ///
    /// Searches push neighbours in this order, so it decides which of two
    /// equally short paths wins.
    pub const STEPS_4: [Point; 4] = [Self::RIGHT, Self::LEFT, Self::UP, Self::DOWN];

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `self + rhs`, or `None` if either coordinate overflows.
    #[inline]
    pub const fn checked_add(self, rhs: Point) -> Option<Point> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// `self - rhs`, or `None` if either coordinate overflows.
    #[inline]
    pub const fn checked_sub(self, rhs: Point) -> Option<Point> {
        match (self.x.checked_sub(rhs.x), self.y.checked_sub(rhs.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// The orthogonal neighbours in [`STEPS_4`](Self::STEPS_4) order.
    ///
    /// A neighbour that would lie outside the `i32` coordinate space is
    /// skipped, so a point on the edge of that space has fewer than four.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Point> {
        Self::STEPS_4
            .into_iter()
            .filter_map(move |d| self.checked_add(d))
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y)) == 1
    }
}

// --- trait impls for Point ---

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Smallest range containing `self` and the single cell `p`.
    ///
    /// The exclusive corner saturates at `i32::MAX`, so cells in that last
    /// row or column cannot be covered.
    #[inline]
    pub fn grow_to(self, p: Point) -> Self {
        let end = Point::new(p.x.saturating_add(1), p.y.saturating_add(1));
        if self.is_empty() {
            return Self { min: p, max: end };
        }
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(end.x), self.max.y.max(end.y)),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, -1);
        assert_eq!(a + b, Point::new(4, 1));
        assert_eq!(a - b, Point::new(-2, 3));
    }

    #[test]
    fn neighbors_4_order_is_right_left_up_down() {
        let p = Point::new(5, 5);
        assert_eq!(
            p.neighbors_4().collect::<Vec<_>>(),
            vec![
                Point::new(6, 5),
                Point::new(4, 5),
                Point::new(5, 6),
                Point::new(5, 4)
            ]
        );
        for n in p.neighbors_4() {
            assert!(p.is_adjacent(n));
        }
    }

    #[test]
    fn adjacency_excludes_diagonals_and_self() {
        let p = Point::new(0, 0);
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Point::new(1, 1)));
        assert!(!p.is_adjacent(Point::new(0, 2)));
    }

    #[test]
    fn neighbors_stop_at_coordinate_limits() {
        let right_edge = Point::new(i32::MAX, 0);
        assert_eq!(
            right_edge.neighbors_4().collect::<Vec<_>>(),
            vec![
                Point::new(i32::MAX - 1, 0),
                Point::new(i32::MAX, 1),
                Point::new(i32::MAX, -1)
            ]
        );
        let corner = Point::new(i32::MIN, i32::MIN);
        assert_eq!(
            corner.neighbors_4().collect::<Vec<_>>(),
            vec![Point::new(i32::MIN + 1, i32::MIN), Point::new(i32::MIN, i32::MIN + 1)]
        );
        // No wrap-around between the two ends of the axis.
        assert!(!right_edge.is_adjacent(Point::new(i32::MIN, 0)));
        assert!(Point::new(i32::MIN, 0).is_adjacent(Point::new(i32::MIN + 1, 0)));
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let p = Point::new(i32::MAX, 3);
        assert_eq!(p.checked_add(Point::LEFT), Some(Point::new(i32::MAX - 1, 3)));
        assert_eq!(p.checked_add(Point::RIGHT), None);
        assert_eq!(Point::new(i32::MIN, 0).checked_sub(Point::RIGHT), None);
        assert_eq!(Point::new(0, 0).checked_sub(Point::DOWN), Some(Point::UP));
    }

    #[test]
    fn point_ordering_is_row_major() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 1), Point::new(5, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(5, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn point_hash_dedups() {
        let set: HashSet<Point> = [Point::new(1, 2), Point::new(1, 2), Point::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(-3, 4).to_string(), "(-3, 4)");
    }

    #[test]
    fn range_grow_to_from_empty() {
        let r = Range::default().grow_to(Point::new(2, 3));
        assert_eq!(r, Range::new(2, 3, 3, 4));
        let r = r.grow_to(Point::new(-1, 5));
        assert_eq!(r, Range::new(-1, 3, 3, 6));
        assert!(r.contains(Point::new(-1, 5)));
        assert!(!r.contains(Point::new(3, 3)));
    }

    #[test]
    fn range_grow_to_saturates_at_max() {
        let r = Range::default()
            .grow_to(Point::new(0, 0))
            .grow_to(Point::new(i32::MAX, i32::MAX));
        assert_eq!(r, Range::new(0, 0, i32::MAX, i32::MAX));
        assert!(r.contains(Point::new(i32::MAX - 1, 0)));
    }
}
