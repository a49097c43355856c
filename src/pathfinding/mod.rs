//! Path planning with a minimum straight-segment rule.
//!
//! Two engines share one best-first driver ([`best_first_search`]):
//!
//! - **Constrained A\***: turns are only allowed after a straight run of at
//!   least `min_segment_length` cells, and a turn commits to a full run.
//! - **Zeta**: 4-connected search that re-parents a cell onto its
//!   grandparent when the straight segment between them is unobstructed and
//!   at least `min_segment_length` long.
//!
//! ```rust,ignore
//! use marga::grid::{Grid, ObstacleSet};
//! use marga::pathfinding::{Algorithm, Planner, PlannerConfig};
//!
//! let obstacles = ObstacleSet::sample_layout(30, 20);
//! let grid = Grid::new(30, 20, &obstacles);
//! let planner = Planner::new(grid, PlannerConfig::new(Algorithm::Constrained, 6));
//!
//! let result = planner.find_path(start, goal)?;
//! if result.success {
//!     println!("Path found with {} cells", result.path.len());
//! }
//! ```

mod constrained;
mod frontier;
mod node;
mod planner;
mod search;
mod types;
mod zeta;

pub use constrained::{ConstrainedExpansion, fill_straight_hops};
pub use node::{Ancestors, NodeArena, NodeId, SearchNode};
pub use planner::Planner;
pub use search::{Expansion, SearchState, best_first_search};
pub use types::{Algorithm, PathResult, PlannerConfig, SearchStats};
pub use zeta::LineOfSightExpansion;

use crate::core::GridCoord;
use crate::error::Result;
use crate::grid::Grid;

/// Find a path with the given configuration
pub fn find_path(
    grid: &Grid<'_>,
    start: GridCoord,
    goal: GridCoord,
    config: &PlannerConfig,
) -> Result<PathResult> {
    Planner::new(*grid, config.clone()).find_path(start, goal)
}

/// Check if a path exists
pub fn path_exists(
    grid: &Grid<'_>,
    start: GridCoord,
    goal: GridCoord,
    config: &PlannerConfig,
) -> bool {
    find_path(grid, start, goal, config).is_ok_and(|result| result.success)
}
