//! Shared helpers for the integration tests.

#![allow(dead_code)]

use marga::core::{Direction, GridCoord};
use marga::grid::{Grid, ObstacleSet};
use marga::pathfinding::{Algorithm, PathResult, Planner, PlannerConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A randomly generated planning problem with walkable endpoints.
pub struct RandomCase {
    pub cols: usize,
    pub rows: usize,
    pub obstacles: ObstacleSet,
    pub start: GridCoord,
    pub end: GridCoord,
}

impl RandomCase {
    /// Grid with each cell blocked with probability `density`.
    pub fn generate(seed: u64, cols: usize, rows: usize, density: f64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut obstacles = ObstacleSet::new();
        for y in 0..rows as i32 {
            for x in 0..cols as i32 {
                if rng.gen_bool(density) {
                    obstacles.insert(GridCoord::new(x, y));
                }
            }
        }

        let start = random_cell(&mut rng, cols, rows);
        let end = random_cell(&mut rng, cols, rows);
        obstacles.remove(start);
        obstacles.remove(end);

        Self {
            cols,
            rows,
            obstacles,
            start,
            end,
        }
    }

    pub fn grid(&self) -> Grid<'_> {
        Grid::new(self.cols, self.rows, &self.obstacles)
    }

    pub fn solve(&self, algorithm: Algorithm, min_segment_length: u32) -> PathResult {
        solve(
            &self.grid(),
            self.start,
            self.end,
            algorithm,
            min_segment_length,
        )
    }
}

pub fn random_cell(rng: &mut StdRng, cols: usize, rows: usize) -> GridCoord {
    GridCoord::new(
        rng.gen_range(0..cols as i32),
        rng.gen_range(0..rows as i32),
    )
}

/// Run one engine; panics on invalid input.
pub fn solve(
    grid: &Grid<'_>,
    start: GridCoord,
    end: GridCoord,
    algorithm: Algorithm,
    min_segment_length: u32,
) -> PathResult {
    Planner::new(*grid, PlannerConfig::new(algorithm, min_segment_length))
        .find_path(start, end)
        .expect("valid planning request")
}

/// Lengths of the maximal collinear runs of a cell-by-cell path.
pub fn run_lengths(path: &[GridCoord]) -> Vec<u32> {
    let mut runs: Vec<(Direction, u32)> = Vec::new();
    for hop in path.windows(2) {
        let direction = Direction::between(hop[0], hop[1]).expect("axis-aligned hop");
        match runs.last_mut() {
            Some((last, length)) if *last == direction => *length += 1,
            _ => runs.push((direction, 1)),
        }
    }
    runs.into_iter().map(|(_, length)| length).collect()
}

/// Endpoints match, no blocked cell is visited, and every hop is either
/// adjacent or (when `min_shortcut` is given) a visible straight segment at
/// least that long.
pub fn assert_valid_path(
    grid: &Grid<'_>,
    result: &PathResult,
    start: GridCoord,
    end: GridCoord,
    min_shortcut: Option<u32>,
) {
    assert!(result.success);
    assert_eq!(result.path.first(), Some(&start));
    assert_eq!(result.path.last(), Some(&end));
    for cell in &result.path {
        assert!(grid.is_walkable(*cell), "path visits blocked cell {cell}");
    }
    for hop in result.path.windows(2) {
        let (a, b) = (hop[0], hop[1]);
        let ok = a.is_adjacent(&b)
            || min_shortcut.is_some_and(|min| {
                grid.line_of_sight(a, b) && a.euclidean_distance(&b) >= min as f32
            });
        assert!(ok, "invalid hop {a} -> {b}");
    }
}
