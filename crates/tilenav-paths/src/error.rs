use std::fmt;

use tilenav_core::Point;

/// Errors returned by range and path queries.
///
/// These flag caller bugs, not search outcomes: an unreachable goal is an
/// empty path, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The origin of a query has no tile in the graph.
    UnknownTile(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTile(p) => write!(f, "no tile at search origin {p}"),
        }
    }
}

impl std::error::Error for SearchError {}
