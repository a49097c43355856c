//! Cell coordinate type for the obstacle grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use super::Direction;

/// Grid coordinates (integer cell indices).
///
/// `y` grows downwards, so [`Direction::Up`] is `(0, -1)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct GridCoord {
    /// X coordinate (column index)
    pub x: i32,
    /// Y coordinate (row index)
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        dx.hypot(dy)
    }

    /// Move `steps` cells in `direction`.
    #[inline]
    pub fn step(&self, direction: Direction, steps: i32) -> GridCoord {
        let offset = direction.offset();
        GridCoord::new(self.x + offset.x * steps, self.y + offset.y * steps)
    }

    /// The 4 cardinal neighbors, in [`Direction::ALL`] order (up, down, left, right).
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        Direction::ALL.map(|d| *self + d.offset())
    }

    /// Whether the two cells share a side.
    #[inline]
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        GridCoord::new(x, y)
    }
}
