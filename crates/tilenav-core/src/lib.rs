//! **tilenav-core** — data model for grid navigation.
//!
//! This crate provides the types the search engine reads: grid coordinates,
//! tiles with an elevation and a blocked flag, and the coordinate-keyed
//! [`TileMap`] that owns them.

pub mod geom;
pub mod map;
pub mod tile;

pub use geom::{Point, Range};
pub use map::{MapError, TileMap};
pub use tile::{MAX_CLIMB, Tile};
