//! Path arrows: classify each tile of a path by the shape of the route
//! through it.
//!
//! A tile is looked at together with the tile before it and the tile after
//! it. A straight run gives one of the four orthogonal directions, a corner
//! gives one of the four diagonal ones, and the last tile of a path gives a
//! *finished* variant (an arrow head). Only orthogonal directions have a
//! finished variant: the last step into a goal is always a single
//! orthogonal step.

use std::fmt;

use tilenav_core::Point;

/// Shape of a path at one tile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
    TopLeft,
    BottomLeft,
    TopRight,
    BottomRight,
    UpFinished,
    DownFinished,
    LeftFinished,
    RightFinished,
}

impl Direction {
    /// Every direction, in sprite-sheet order.
    pub const ALL: [Direction; 13] = [
        Direction::None,
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::TopLeft,
        Direction::BottomLeft,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::UpFinished,
        Direction::DownFinished,
        Direction::LeftFinished,
        Direction::RightFinished,
    ];

    /// Index of this direction's arrow in a 13-entry sprite sheet.
    ///
    /// [`Direction::None`] maps to 0; renderers usually hide the arrow for
    /// it instead of drawing sprite 0.
    pub const fn sprite_index(self) -> usize {
        match self {
            Direction::None => 0,
            Direction::Up => 1,
            Direction::Down => 2,
            Direction::Left => 3,
            Direction::Right => 4,
            Direction::TopLeft => 5,
            Direction::BottomLeft => 6,
            Direction::TopRight => 7,
            Direction::BottomRight => 8,
            Direction::UpFinished => 9,
            Direction::DownFinished => 10,
            Direction::LeftFinished => 11,
            Direction::RightFinished => 12,
        }
    }

    /// Whether this is an arrow head at the end of a path.
    pub const fn is_finished(self) -> bool {
        matches!(
            self,
            Direction::UpFinished
                | Direction::DownFinished
                | Direction::LeftFinished
                | Direction::RightFinished
        )
    }

    /// Whether this marks a corner.
    pub const fn is_turn(self) -> bool {
        matches!(
            self,
            Direction::TopLeft | Direction::BottomLeft | Direction::TopRight | Direction::BottomRight
        )
    }

    /// Short lowercase name, e.g. `"top-left"` or `"up-finished"`.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::None => "none",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::TopLeft => "top-left",
            Direction::BottomLeft => "bottom-left",
            Direction::TopRight => "top-right",
            Direction::BottomRight => "bottom-right",
            Direction::UpFinished => "up-finished",
            Direction::DownFinished => "down-finished",
            Direction::LeftFinished => "left-finished",
            Direction::RightFinished => "right-finished",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify `current` given the tile before it and the tile after it.
///
/// `previous` is `None` at the first tile of a path and `next` is `None` at
/// the last one. Steps that do not add up to a unit step or a corner give
/// [`Direction::None`], including steps that span more than the `i32`
/// range.
pub fn classify(previous: Option<Point>, current: Point, next: Option<Point>) -> Direction {
    let is_final = next.is_none();
    // A step too long for `i32` is certainly not a unit step.
    let past = match previous {
        Some(p) => match current.checked_sub(p) {
            Some(d) => d,
            None => return Direction::None,
        },
        None => Point::ZERO,
    };
    let future = match next {
        Some(n) => match n.checked_sub(current) {
            Some(d) => d,
            None => return Direction::None,
        },
        None => Point::ZERO,
    };
    // Two different unit steps add up to a diagonal: a corner.
    let combined = if past == future {
        future
    } else {
        match past.checked_add(future) {
            Some(c) => c,
            None => return Direction::None,
        }
    };

    match (combined.x, combined.y) {
        (0, 1) if is_final => Direction::UpFinished,
        (0, 1) => Direction::Up,
        (0, -1) if is_final => Direction::DownFinished,
        (0, -1) => Direction::Down,
        (1, 0) if is_final => Direction::RightFinished,
        (1, 0) => Direction::Right,
        (-1, 0) if is_final => Direction::LeftFinished,
        (-1, 0) => Direction::Left,
        (1, 1) => {
            if past.y < future.y {
                Direction::BottomLeft
            } else {
                Direction::TopRight
            }
        }
        (-1, 1) => {
            if past.y < future.y {
                Direction::BottomRight
            } else {
                Direction::TopLeft
            }
        }
        (1, -1) => {
            if past.y > future.y {
                Direction::TopLeft
            } else {
                Direction::BottomRight
            }
        }
        (-1, -1) => {
            if past.y > future.y {
                Direction::TopRight
            } else {
                Direction::BottomLeft
            }
        }
        _ => Direction::None,
    }
}

/// Classify every tile of `path`, which starts next to `origin` (the tile
/// the walker stands on, not part of the path).
pub fn classify_path(origin: Point, path: &[Point]) -> Vec<Direction> {
    path.iter()
        .enumerate()
        .map(|(i, &cur)| {
            let prev = if i == 0 { origin } else { path[i - 1] };
            classify(Some(prev), cur, path.get(i + 1).copied())
        })
        .collect()
}
