//! Planner configuration and result types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::GridCoord;

/// Which search engine to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// A* whose turns must wait for a full minimum-length segment
    #[default]
    Constrained,
    /// Line-of-sight search that re-parents across visible shortcuts
    Zeta,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Constrained => write!(f, "constrained"),
            Algorithm::Zeta => write!(f, "zeta"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constrained" | "astar" => Ok(Algorithm::Constrained),
            "zeta" | "los" | "theta" => Ok(Algorithm::Zeta),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// Planner configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Search engine
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Minimum straight run before a turn (constrained) or minimum shortcut
    /// length (zeta). Must be at least 1.
    #[serde(default = "defaults::min_segment_length")]
    pub min_segment_length: u32,

    /// Constrained engine: reject moves onto a cell already on the current
    /// node's parent chain
    #[serde(default = "defaults::enabled")]
    pub prevent_self_intersection: bool,

    /// Constrained engine: reject turning straight back the way we came
    #[serde(default = "defaults::enabled")]
    pub forbid_reversal: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            min_segment_length: defaults::min_segment_length(),
            prevent_self_intersection: true,
            forbid_reversal: true,
        }
    }
}

impl PlannerConfig {
    /// Create with a given engine and minimum segment length
    pub fn new(algorithm: Algorithm, min_segment_length: u32) -> Self {
        Self {
            algorithm,
            min_segment_length,
            ..Default::default()
        }
    }

    /// Constrained engine without the later variant's guards: paths may
    /// cross themselves and turns may reverse.
    pub fn unguarded(mut self) -> Self {
        self.prevent_self_intersection = false;
        self.forbid_reversal = false;
        self
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped and expanded (goal pop included)
    pub nodes_expanded: usize,
    /// Nodes created, start node included
    pub nodes_created: usize,
    /// Largest open-list size reached
    pub frontier_high_water: usize,
}

/// Result of one search
#[derive(Clone, Debug, PartialEq)]
pub struct PathResult {
    /// Cells from start to end inclusive (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Total path cost (`f32::INFINITY` if no path found)
    pub cost: f32,
    /// Whether a path was found
    pub success: bool,
    /// Search counters
    pub stats: SearchStats,
}

impl PathResult {
    pub(crate) fn found(path: Vec<GridCoord>, cost: f32, stats: SearchStats) -> Self {
        Self {
            path,
            cost,
            success: true,
            stats,
        }
    }

    pub(crate) fn no_path(stats: SearchStats) -> Self {
        Self {
            path: Vec::new(),
            cost: f32::INFINITY,
            success: false,
            stats,
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }

    /// Sum of the Euclidean lengths of consecutive hops
    pub fn geometric_length(&self) -> f32 {
        self.path
            .windows(2)
            .map(|w| w[0].euclidean_distance(&w[1]))
            .sum()
    }

    /// The path, or `None` when the search found none
    pub fn into_path(self) -> Option<Vec<GridCoord>> {
        self.success.then_some(self.path)
    }
}
