//! The selection state machine.
//!
//! `place` puts the entity down and computes its reachable area. `hover`
//! previews a route inside that area, `commit` starts walking it and
//! `advance` takes one tile per call until the entity arrives, at which
//! point the reachable area is recomputed around the new tile.
//!
//! The graph is passed to every call instead of being stored, so the caller
//! may block or unblock tiles between calls; each query sees the map as it
//! is at that moment.

use std::fmt;

use log::debug;
use tilenav_core::Point;
use tilenav_paths::{
    Direction, PathFinder, RangeFinder, SearchError, TileGraph, TileSet, classify_path,
};

use crate::config::SelectConfig;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// An operation needs a placed entity.
    NoEntity,
    /// A range or path query was given a tile the graph does not have.
    Search(SearchError),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEntity => write!(f, "no entity has been placed"),
            Self::Search(e) => write!(f, "search failed: {e}"),
        }
    }
}

impl std::error::Error for SelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Search(e) => Some(e),
            Self::NoEntity => None,
        }
    }
}

impl From<SearchError> for SelectError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Selection state for one movable entity.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    config: SelectConfig,
    entity: Option<Point>,
    reachable: TileSet,
    path: Vec<Point>,
    arrows: Vec<(Point, Direction)>,
    moving: bool,
}

impl Selection {
    /// Create an empty selection.
    pub fn new(config: SelectConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The entity's tile, once placed.
    pub fn entity(&self) -> Option<Point> {
        self.entity
    }

    /// Tiles the entity can currently reach; empty before placement.
    pub fn reachable(&self) -> &TileSet {
        &self.reachable
    }

    /// Remaining route: the previewed path, or while moving the tiles still
    /// ahead.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Arrow for each remaining path tile, in path order.
    pub fn arrows(&self) -> &[(Point, Direction)] {
        &self.arrows
    }

    /// Whether a committed move is in progress.
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// The arrow to draw on `p`; [`Direction::None`] off the path.
    pub fn direction_at(&self, p: Point) -> Direction {
        self.arrows
            .iter()
            .find(|(q, _)| *q == p)
            .map_or(Direction::None, |&(_, d)| d)
    }

    /// Put the entity on `pos`, drop any preview or move, and compute its
    /// reachable area.
    pub fn place<G: TileGraph + ?Sized>(
        &mut self,
        graph: &G,
        pos: Point,
    ) -> Result<(), SelectError> {
        let reachable = RangeFinder::new(graph).tiles_in_range(pos, self.config.move_range)?;
        debug!("entity placed at {pos}, {} tiles reachable", reachable.len());
        self.entity = Some(pos);
        self.reachable = reachable;
        self.clear_preview();
        self.moving = false;
        Ok(())
    }

    /// Recompute the reachable area around the entity, e.g. after the map
    /// changed. The preview is dropped.
    ///
    /// If the entity's tile is gone from the graph the reachable area is left
    /// empty, so nothing can be previewed until the entity is placed again.
    pub fn refresh<G: TileGraph + ?Sized>(&mut self, graph: &G) -> Result<(), SelectError> {
        let pos = self.entity.ok_or(SelectError::NoEntity)?;
        self.reachable.clear();
        self.clear_preview();
        self.reachable = RangeFinder::new(graph).tiles_in_range(pos, self.config.move_range)?;
        Ok(())
    }

    /// Preview the route to the hovered tile `pos`.
    ///
    /// Only tiles inside the reachable area are previewed, and only while
    /// the entity is standing still; otherwise the current preview is kept.
    /// Hovering the entity's own tile, or a tile the path search cannot
    /// reach, leaves an empty preview. Returns the arrows to draw.
    pub fn hover<G: TileGraph + ?Sized>(
        &mut self,
        graph: &G,
        pos: Point,
    ) -> Result<&[(Point, Direction)], SelectError> {
        let Some(from) = self.entity else {
            return Ok(self.arrows.as_slice());
        };
        if self.moving || !self.reachable.contains(pos) {
            return Ok(self.arrows.as_slice());
        }
        let path = PathFinder::new(graph).find_path(from, pos, Some(&self.reachable))?;
        let dirs = classify_path(from, &path);
        self.arrows = path.iter().copied().zip(dirs).collect();
        self.path = path;
        Ok(self.arrows.as_slice())
    }

    /// Start walking the previewed path. Returns `false` when there is
    /// nothing to walk.
    pub fn commit(&mut self) -> bool {
        if self.moving {
            return false;
        }
        if self.entity.is_none() || self.path.is_empty() {
            debug!("commit ignored: no path previewed");
            return false;
        }
        debug!("moving along {} tiles", self.path.len());
        self.moving = true;
        true
    }

    /// Move the entity onto the next tile of the committed path and return
    /// it. After the last tile the move ends and the reachable area is
    /// recomputed around the new position. Returns `None` when not moving.
    ///
    /// An error means the arrival tile is no longer in the graph. The entity
    /// has still moved and the move is over, but the reachable area is
    /// empty, as after a failed [`refresh`](Self::refresh).
    pub fn advance<G: TileGraph + ?Sized>(
        &mut self,
        graph: &G,
    ) -> Result<Option<Point>, SelectError> {
        if !self.moving || self.path.is_empty() {
            return Ok(None);
        }
        let step = self.path.remove(0);
        self.arrows.retain(|&(p, _)| p != step);
        self.entity = Some(step);
        if self.path.is_empty() {
            self.moving = false;
            debug!("arrived at {step}");
            self.refresh(graph)?;
        }
        Ok(Some(step))
    }

    fn clear_preview(&mut self) {
        self.path.clear();
        self.arrows.clear();
    }
}
