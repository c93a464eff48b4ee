//! Grid search for tile-based movement.
//!
//! The three queries a movement UI needs, over any [`TileGraph`]:
//!
//! - **Range**: tiles reachable within a step budget ([`RangeFinder`])
//! - **Path**: a shortest route, optionally confined to a range ([`PathFinder`])
//! - **Arrows**: the per-tile shape of a path for drawing ([`classify`])
//!
//! Adjacency is orthogonal only, and a step may climb or drop at most
//! [`MAX_CLIMB`](tilenav_core::MAX_CLIMB) levels. All search state is local
//! to one call, so a graph can be searched any number of times, and
//! mutated in between, without cleanup.

mod astar;
mod direction;
mod distance;
mod error;
mod range;
mod tileset;
mod traits;

pub use astar::{PathFinder, SearchState};
pub use direction::{Direction, classify, classify_path};
pub use distance::manhattan;
pub use error::SearchError;
pub use range::RangeFinder;
pub use tileset::TileSet;
pub use traits::TileGraph;
