//! # Marga: Grid Pathfinding with a Minimum Segment Length
//!
//! Finds routes between two cells of a 2D obstacle grid where, once the route
//! picks a direction, it must keep going for a minimum number of cells before
//! it may turn.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::core::GridCoord;
//! use marga::grid::{Grid, ObstacleSet};
//! use marga::pathfinding::{Algorithm, Planner, PlannerConfig};
//!
//! let mut obstacles = ObstacleSet::new();
//! obstacles.set_rect(GridCoord::new(5, 0), GridCoord::new(5, 6), true);
//!
//! let grid = Grid::new(20, 10, &obstacles);
//! let planner = Planner::new(grid, PlannerConfig::new(Algorithm::Constrained, 3));
//!
//! let result = planner
//!     .find_path(GridCoord::new(0, 0), GridCoord::new(19, 0))
//!     .expect("valid request");
//! if result.success {
//!     println!("{} cells, cost {:.1}", result.path.len(), result.cost);
//! }
//! ```
//!
//! ## Engines
//!
//! - **Constrained A\***: Manhattan heuristic, unit steps. Turning is legal
//!   only after `min_segment_length` straight cells, and a turn moves that many
//!   cells at once. The returned path lists every cell.
//! - **Zeta**: 4-connected search with Euclidean heuristic that re-parents a
//!   cell onto its grandparent across an unobstructed straight segment of at
//!   least `min_segment_length`. The returned path lists waypoints.
//!
//! Both run synchronously to completion or frontier exhaustion. Invalid input
//! is an [`error::PathError`]; an unreachable goal is a successful call whose
//! [`PathResult::success`] is `false`.
//!
//! ## Architecture
//!
//! - [`core`](crate::core): `GridCoord`, `Direction`
//! - [`grid`]: obstacle set, walkability oracle, layout history
//! - [`pathfinding`]: node arena, open list, best-first driver, both engines
//! - [`config`]: YAML planner and scenario configuration
//! - [`error`]: error types

pub mod config;
pub mod core;
pub mod error;
pub mod grid;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::{ConfigError, ScenarioConfig};
pub use crate::core::{Direction, GridCoord};
pub use error::{PathError, Result};
pub use grid::{Grid, LayoutHistory, ObstacleSet};
pub use pathfinding::{
    Algorithm, PathResult, Planner, PlannerConfig, SearchStats, find_path, path_exists,
};
