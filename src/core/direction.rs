//! Cardinal movement directions.

use serde::{Deserialize, Serialize};

use super::GridCoord;

/// One of the four unit moves on the grid.
///
/// The start of a search has no direction yet; that state is `Option::None`
/// wherever a direction is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `(0, -1)`
    Up,
    /// `(0, 1)`
    Down,
    /// `(-1, 0)`
    Left,
    /// `(1, 0)`
    Right,
}

impl Direction {
    /// Expansion order used by both engines.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of this direction.
    #[inline]
    pub const fn offset(self) -> GridCoord {
        match self {
            Direction::Up => GridCoord::new(0, -1),
            Direction::Down => GridCoord::new(0, 1),
            Direction::Left => GridCoord::new(-1, 0),
            Direction::Right => GridCoord::new(1, 0),
        }
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of a straight axis-aligned move from `from` to `to`.
    ///
    /// Returns `None` for identical cells and for moves that change both axes.
    pub fn between(from: GridCoord, to: GridCoord) -> Option<Direction> {
        let delta = to - from;
        match (delta.x.signum(), delta.y.signum()) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}
