use tilenav_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Widened to `i64` so that any two `i32` points have an exact distance.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i64 {
    i64::from(a.x.abs_diff(b.x)) + i64::from(a.y.abs_diff(b.y))
}
