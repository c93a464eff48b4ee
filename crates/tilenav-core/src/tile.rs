//! The [`Tile`] record stored in a [`TileMap`](crate::TileMap).

use crate::geom::Point;

/// Largest elevation difference a single step may climb or drop.
pub const MAX_CLIMB: i32 = 1;

/// One walkable cell of the map: the topmost layer at its `(x, y)` column.
///
/// `z` only matters for the climb rule; searches never look at it otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub pos: Point,
    pub z: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub blocked: bool,
}

impl Tile {
    /// An open tile at `pos` with elevation `z`.
    pub const fn new(pos: Point, z: i32) -> Self {
        Self {
            pos,
            z,
            blocked: false,
        }
    }

    /// A blocked tile at `pos` with elevation `z`.
    pub const fn blocked(pos: Point, z: i32) -> Self {
        Self {
            pos,
            z,
            blocked: true,
        }
    }

    /// Whether a step between `self` and `other` stays within [`MAX_CLIMB`].
    ///
    /// This is only the elevation half of adjacency; callers check the
    /// coordinates themselves.
    #[inline]
    pub fn can_step_to(&self, other: &Tile) -> bool {
        self.z.abs_diff(other.z) <= MAX_CLIMB.unsigned_abs()
    }
}
