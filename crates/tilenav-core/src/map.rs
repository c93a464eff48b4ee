//! A coordinate-keyed tile collection.
//!
//! [`TileMap`] holds exactly one [`Tile`] per `(x, y)` column. It can be
//! filled tile by tile, assembled from stacked layers (the topmost cell of a
//! column wins), or parsed from a small text layout:
//!
//! ```text
//! ..1.
//! .#2.
//! ....
//! ```
//!
//! The first line is the *highest* row, so the picture reads the same way the
//! Up/Down path directions do.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;

use crate::geom::{Point, Range};
use crate::tile::Tile;

/// The grid a search runs over. Searches only ever borrow it immutably.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileMap {
    tiles: HashMap<Point, Tile>,
}

impl TileMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from tiles. A later tile replaces an earlier one at the
    /// same position.
    pub fn from_tiles(tiles: impl IntoIterator<Item = Tile>) -> Self {
        let mut map = Self::new();
        for t in tiles {
            map.insert(t);
        }
        map
    }

    /// A flat, fully open `width` × `height` map at elevation 0, with its
    /// lower-left corner at the origin.
    pub fn flat(width: i32, height: i32) -> Self {
        let mut map = Self::new();
        for y in 0..height {
            for x in 0..width {
                map.insert(Tile::new(Point::new(x, y), 0));
            }
        }
        map
    }

    /// Assemble a map from stacked layers of `(x, y, z)` cells.
    ///
    /// Layers are given topmost first. Inside a layer, cells with a higher
    /// `z` are considered first. The first cell seen for a column claims it;
    /// everything below is hidden. When `ignore_bottom` is set, cells at
    /// `z == 0` are skipped.
    pub fn from_layers<L>(layers: impl IntoIterator<Item = L>, ignore_bottom: bool) -> Self
    where
        L: IntoIterator<Item = (i32, i32, i32)>,
    {
        let mut map = Self::new();
        for layer in layers {
            let mut cells: Vec<(i32, i32, i32)> = layer.into_iter().collect();
            // Stable: within one elevation the layer's own order is kept.
            cells.sort_by_key(|&(_, _, z)| Reverse(z));
            for (x, y, z) in cells {
                if z == 0 && ignore_bottom {
                    continue;
                }
                let pos = Point::new(x, y);
                if let Entry::Vacant(e) = map.tiles.entry(pos) {
                    e.insert(Tile::new(pos, z));
                }
            }
        }
        map
    }

    /// Parse a text layout.
    ///
    /// `.` is an open tile at elevation 0, a digit is an open tile at that
    /// elevation, `#` is a blocked tile at elevation 0, and a space is a
    /// column with no tile at all. Every line must have the same width.
    pub fn from_text(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.iter().all(|l| l.is_empty()) {
            return Err(MapError::Empty);
        }
        let expected = lines[0].chars().count();
        let top = lines.len() as i32 - 1;
        let mut map = Self::new();
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(MapError::InconsistentWidth {
                    line: i,
                    expected,
                    found,
                });
            }
            let y = top - i as i32;
            for (x, ch) in line.chars().enumerate() {
                let pos = Point::new(x as i32, y);
                match ch {
                    ' ' => {}
                    '.' => map.insert(Tile::new(pos, 0)),
                    '#' => map.insert(Tile::blocked(pos, 0)),
                    '0'..='9' => map.insert(Tile::new(pos, ch as i32 - '0' as i32)),
                    _ => return Err(MapError::InvalidChar { ch, pos }),
                }
            }
        }
        Ok(map)
    }

    /// Insert or replace the tile at `tile.pos`.
    pub fn insert(&mut self, tile: Tile) {
        self.tiles.insert(tile.pos, tile);
    }

    /// The tile at `p`, if any.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&Tile> {
        self.tiles.get(&p)
    }

    /// Whether a tile exists at `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.tiles.contains_key(&p)
    }

    /// Block or unblock the tile at `p`. Returns `false` if there is no
    /// tile there.
    pub fn set_blocked(&mut self, p: Point, blocked: bool) -> bool {
        match self.tiles.get_mut(&p) {
            Some(t) => {
                t.blocked = blocked;
                true
            }
            None => false,
        }
    }

    /// Number of tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the map has no tiles.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over all tiles in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Smallest range covering every tile, or `None` for an empty map.
    pub fn bounds(&self) -> Option<Range> {
        if self.is_empty() {
            return None;
        }
        Some(
            self.tiles
                .keys()
                .fold(Range::default(), |r, &p| r.grow_to(p)),
        )
    }
}

impl FromIterator<Tile> for TileMap {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        Self::from_tiles(iter)
    }
}

// Serialized as a sequence of tiles in row-major order: JSON maps cannot be
// keyed by a struct.
#[cfg(feature = "serde")]
impl serde::Serialize for TileMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tiles: Vec<&Tile> = self.tiles.values().collect();
        tiles.sort_by_key(|t| t.pos);
        serializer.collect_seq(tiles)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TileMap {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tiles = Vec::<Tile>::deserialize(deserializer)?;
        Ok(TileMap::from_tiles(tiles))
    }
}

/// Errors that can occur when parsing a text layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The layout has no cells at all.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the layout alphabet.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map layout is empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "map layout line {line} is {found} cells wide, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map layout contains invalid character {ch:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for MapError {}
