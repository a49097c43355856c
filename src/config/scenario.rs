//! Scenario files: a grid, its obstacles, the endpoints and planner settings.
//!
//! ```yaml
//! name: corridor
//! cols: 8
//! rows: 3
//! start: {x: 0, y: 1}
//! end: {x: 7, y: 1}
//! layout:
//!   - "########"
//!   - "S......E"
//!   - "########"
//! planner:
//!   algorithm: constrained
//!   min_segment_length: 3
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::GridCoord;
use crate::grid::{Grid, ObstacleSet};
use crate::pathfinding::{PathResult, Planner, PlannerConfig};

use super::ConfigError;

/// One planning problem loaded from YAML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Scenario name (used in output)
    pub name: String,
    /// Number of columns
    pub cols: usize,
    /// Number of rows
    pub rows: usize,
    /// Start cell
    pub start: GridCoord,
    /// End cell
    pub end: GridCoord,
    /// Blocked cells listed explicitly
    #[serde(default)]
    pub obstacles: Vec<GridCoord>,
    /// ASCII rows, top row first: `#` blocked, `.` `S` `E` free
    #[serde(default)]
    pub layout: Vec<String>,
    /// Planner settings
    #[serde(default)]
    pub planner: PlannerConfig,
}

impl ScenarioConfig {
    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let scenario: Self = serde_yaml::from_str(yaml)?;
        // Surface layout errors at load time rather than at plan time
        scenario.obstacle_set()?;
        Ok(scenario)
    }

    /// Load from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Union of the explicit obstacle list and the `#` cells of the layout.
    ///
    /// The layout may not be larger than `cols × rows`.
    pub fn obstacle_set(&self) -> Result<ObstacleSet, ConfigError> {
        let mut obstacles: ObstacleSet = self.obstacles.iter().copied().collect();

        for (row, line) in self.layout.iter().enumerate() {
            for (column, symbol) in line.chars().enumerate() {
                if row >= self.rows || column >= self.cols {
                    debug!(
                        "[Scenario] layout cell {:?} at row {}, column {} is outside {}x{}",
                        symbol, row, column, self.cols, self.rows
                    );
                    return Err(ConfigError::InvalidLayout {
                        row,
                        column,
                        symbol,
                    });
                }
                match symbol {
                    '#' => {
                        obstacles.insert(GridCoord::new(column as i32, row as i32));
                    }
                    '.' | 'S' | 'E' => {}
                    _ => {
                        debug!(
                            "[Scenario] invalid layout symbol {:?} at row {}, column {}",
                            symbol, row, column
                        );
                        return Err(ConfigError::InvalidLayout {
                            row,
                            column,
                            symbol,
                        });
                    }
                }
            }
        }

        Ok(obstacles)
    }

    /// Run the configured planner on this scenario.
    pub fn plan(&self) -> Result<PathResult, ConfigError> {
        self.plan_with(&self.planner)
    }

    /// Run the scenario with different planner settings.
    pub fn plan_with(&self, config: &PlannerConfig) -> Result<PathResult, ConfigError> {
        let obstacles = self.obstacle_set()?;
        let grid = Grid::new(self.cols, self.rows, &obstacles);
        let planner = Planner::new(grid, config.clone());
        Ok(planner.find_path(self.start, self.end)?)
    }
}
