//! Blocked-cell set and its editing operations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// Set of blocked cells, keyed by coordinate.
///
/// Cells are not bounds-checked here; a blocked cell outside the grid is
/// simply never consulted. Serializes as a sorted list of coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<GridCoord>", into = "Vec<GridCoord>")]
pub struct ObstacleSet {
    cells: HashSet<GridCoord>,
}

impl ObstacleSet {
    /// Create an empty obstacle set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `coord` is blocked
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }

    /// Block a cell. Returns `true` if it was free before.
    pub fn insert(&mut self, coord: GridCoord) -> bool {
        self.cells.insert(coord)
    }

    /// Free a cell. Returns `true` if it was blocked before.
    pub fn remove(&mut self, coord: GridCoord) -> bool {
        self.cells.remove(&coord)
    }

    /// Flip a cell between blocked and free. Returns the new blocked state.
    pub fn toggle(&mut self, coord: GridCoord) -> bool {
        if self.cells.remove(&coord) {
            false
        } else {
            self.cells.insert(coord);
            true
        }
    }

    /// Remove every obstacle
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Number of blocked cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if no cell is blocked
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over blocked cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells.iter().copied()
    }

    /// Block (or free) every cell of the rectangle spanned by two corners.
    ///
    /// The corners may be given in any order; both are inclusive.
    /// Returns the number of cells whose state changed.
    pub fn set_rect(&mut self, a: GridCoord, b: GridCoord, blocked: bool) -> usize {
        let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
        let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));

        let mut changed = 0;
        for x in min_x..=max_x {
            for y in min_y..=max_y {
                let coord = GridCoord::new(x, y);
                let did_change = if blocked {
                    self.cells.insert(coord)
                } else {
                    self.cells.remove(&coord)
                };
                if did_change {
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Sorted copy of the blocked cells.
    pub fn snapshot(&self) -> Vec<GridCoord> {
        let mut cells: Vec<GridCoord> = self.iter().collect();
        cells.sort_unstable();
        cells
    }

    /// Replace the whole set with the cells of a snapshot.
    pub fn replace_from(&mut self, snapshot: &[GridCoord]) {
        self.cells.clear();
        self.cells.extend(snapshot.iter().copied());
    }

    /// Demonstration layout: a solid block with a single open row.
    ///
    /// Blocks columns `5..cols-6` over rows `0..rows-4`, leaving row
    /// `rows-10` open as a corridor through the block.
    pub fn sample_layout(cols: usize, rows: usize) -> Self {
        let cols = cols as i32;
        let rows = rows as i32;
        let gap_row = rows - 10;

        let mut set = Self::new();
        for x in 5..cols - 6 {
            for y in 0..rows - 4 {
                if y != gap_row {
                    set.insert(GridCoord::new(x, y));
                }
            }
        }
        set
    }
}

impl From<Vec<GridCoord>> for ObstacleSet {
    fn from(cells: Vec<GridCoord>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }
}

impl From<ObstacleSet> for Vec<GridCoord> {
    fn from(set: ObstacleSet) -> Self {
        set.snapshot()
    }
}

impl FromIterator<GridCoord> for ObstacleSet {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<GridCoord> for ObstacleSet {
    fn extend<I: IntoIterator<Item = GridCoord>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
