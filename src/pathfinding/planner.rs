//! Planner front end: input validation and engine dispatch.

use log::{debug, trace};

use crate::core::GridCoord;
use crate::error::{Endpoint, PathError, Result};
use crate::grid::Grid;

use super::constrained::ConstrainedExpansion;
use super::search::best_first_search;
use super::types::{Algorithm, PathResult, PlannerConfig};
use super::zeta::LineOfSightExpansion;

/// Minimum-segment pathfinder over one grid
pub struct Planner<'a> {
    grid: Grid<'a>,
    config: PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner
    pub fn new(grid: Grid<'a>, config: PlannerConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: Grid<'a>) -> Self {
        Self::new(grid, PlannerConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Reject inputs that would make the search meaningless.
    pub fn validate(&self, start: GridCoord, goal: GridCoord) -> Result<()> {
        let (cols, rows) = (self.grid.cols(), self.grid.rows());
        if cols == 0 || rows == 0 || cols > i32::MAX as usize || rows > i32::MAX as usize {
            debug!("[Planner] FAILED: InvalidDimensions {}x{}", cols, rows);
            return Err(PathError::InvalidDimensions { cols, rows });
        }

        if self.config.min_segment_length < 1 {
            debug!(
                "[Planner] FAILED: InvalidMinSegmentLength {}",
                self.config.min_segment_length
            );
            return Err(PathError::InvalidMinSegmentLength(
                self.config.min_segment_length,
            ));
        }

        for (endpoint, coord) in [(Endpoint::Start, start), (Endpoint::End, goal)] {
            if !self.grid.is_valid_coord(coord) {
                debug!("[Planner] FAILED: OutOfBounds - {} at {}", endpoint, coord);
                return Err(PathError::OutOfBounds { endpoint, coord });
            }
            if self.grid.obstacles().contains(coord) {
                debug!("[Planner] FAILED: EndpointBlocked - {} at {}", endpoint, coord);
                return Err(PathError::EndpointBlocked { endpoint, coord });
            }
        }

        Ok(())
    }

    /// Find a path from start to goal.
    ///
    /// `Err` means the request was invalid; an unreachable goal is `Ok` with
    /// `success == false`.
    pub fn find_path(&self, start: GridCoord, goal: GridCoord) -> Result<PathResult> {
        self.validate(start, goal)?;

        trace!(
            "[Planner] {} search on {}x{} grid, {} obstacles, min_segment_length={}",
            self.config.algorithm,
            self.grid.cols(),
            self.grid.rows(),
            self.grid.obstacles().len(),
            self.config.min_segment_length
        );

        let result = match self.config.algorithm {
            Algorithm::Constrained => best_first_search(
                &ConstrainedExpansion::new(self.grid, &self.config),
                start,
                goal,
            ),
            Algorithm::Zeta => best_first_search(
                &LineOfSightExpansion::new(self.grid, &self.config),
                start,
                goal,
            ),
        };
        Ok(result)
    }
}
