//! Walkability oracle over a point-in-time obstacle set.

use crate::core::GridCoord;

use super::ObstacleSet;

/// Read-only view of a `cols × rows` grid and its obstacles.
///
/// Borrowing the obstacle set keeps it immutable for as long as a search
/// holds the grid.
#[derive(Clone, Copy, Debug)]
pub struct Grid<'a> {
    cols: usize,
    rows: usize,
    obstacles: &'a ObstacleSet,
}

impl<'a> Grid<'a> {
    /// Create a grid view. Dimensions are validated by the planner, not here.
    pub fn new(cols: usize, rows: usize, obstacles: &'a ObstacleSet) -> Self {
        Self {
            cols,
            rows,
            obstacles,
        }
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The obstacle set this grid reads
    #[inline]
    pub fn obstacles(&self) -> &'a ObstacleSet {
        self.obstacles
    }

    /// Check if a coordinate lies inside `[0, cols) × [0, rows)`
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.cols
            && (coord.y as usize) < self.rows
    }

    /// In bounds and not blocked
    #[inline]
    pub fn is_walkable(&self, coord: GridCoord) -> bool {
        self.is_valid_coord(coord) && !self.obstacles.contains(coord)
    }

    /// Check that every cell on the Bresenham line from `from` to `to` is
    /// walkable, both endpoints included.
    pub fn line_of_sight(&self, from: GridCoord, to: GridCoord) -> bool {
        let mut x0 = from.x;
        let mut y0 = from.y;
        let x1 = to.x;
        let y1 = to.y;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            if !self.is_walkable(GridCoord::new(x0, y0)) {
                return false;
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walkable_bounds() {
        let obstacles = ObstacleSet::new();
        let grid = Grid::new(4, 3, &obstacles);

        assert!(grid.is_walkable(GridCoord::new(0, 0)));
        assert!(grid.is_walkable(GridCoord::new(3, 2)));
        assert!(!grid.is_walkable(GridCoord::new(4, 0)));
        assert!(!grid.is_walkable(GridCoord::new(0, 3)));
        assert!(!grid.is_walkable(GridCoord::new(-1, 0)));
        assert!(!grid.is_walkable(GridCoord::new(0, -1)));
    }

    #[test]
    fn test_walkable_obstacle() {
        let mut obstacles = ObstacleSet::new();
        obstacles.insert(GridCoord::new(1, 1));
        let grid = Grid::new(4, 4, &obstacles);

        assert!(!grid.is_walkable(GridCoord::new(1, 1)));
        assert!(grid.is_walkable(GridCoord::new(1, 2)));
    }

    #[test]
    fn test_line_of_sight_clear() {
        let obstacles = ObstacleSet::new();
        let grid = Grid::new(10, 10, &obstacles);

        assert!(grid.line_of_sight(GridCoord::new(0, 0), GridCoord::new(9, 4)));
        assert!(grid.line_of_sight(GridCoord::new(9, 9), GridCoord::new(0, 0)));
        assert!(grid.line_of_sight(GridCoord::new(3, 3), GridCoord::new(3, 3)));
    }

    #[test]
    fn test_line_of_sight_blocked() {
        let mut obstacles = ObstacleSet::new();
        obstacles.insert(GridCoord::new(3, 0));
        let grid = Grid::new(10, 10, &obstacles);

        assert!(!grid.line_of_sight(GridCoord::new(0, 0), GridCoord::new(6, 0)));
        assert!(grid.line_of_sight(GridCoord::new(0, 1), GridCoord::new(6, 1)));
    }

    #[test]
    fn test_line_of_sight_checks_endpoints() {
        let mut obstacles = ObstacleSet::new();
        obstacles.insert(GridCoord::new(5, 5));
        let grid = Grid::new(10, 10, &obstacles);

        assert!(!grid.line_of_sight(GridCoord::new(0, 0), GridCoord::new(5, 5)));
        assert!(!grid.line_of_sight(GridCoord::new(5, 5), GridCoord::new(0, 0)));
        // Leaving the grid is never visible
        assert!(!grid.line_of_sight(GridCoord::new(0, 0), GridCoord::new(12, 0)));
    }
}
