//! Error types for marga.
//!
//! "No path" is not an error: it is reported through
//! [`PathResult::success`](crate::pathfinding::PathResult::success). The
//! variants here are caller-input contract violations, rejected before the
//! first node is created.

use std::fmt;

use thiserror::Error;

use crate::core::GridCoord;

/// Result type alias
pub type Result<T> = std::result::Result<T, PathError>;

/// Which end of the requested route an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The start cell
    Start,
    /// The end (goal) cell
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Invalid search input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Grid has a zero dimension
    #[error("Invalid grid dimensions: {cols}x{rows}")]
    InvalidDimensions {
        /// Number of columns
        cols: usize,
        /// Number of rows
        rows: usize,
    },

    /// Minimum segment length below 1
    #[error("Invalid minimum segment length: {0} (must be at least 1)")]
    InvalidMinSegmentLength(u32),

    /// Start or end outside the grid
    #[error("The {endpoint} cell {coord} is outside the grid")]
    OutOfBounds {
        /// Offending endpoint
        endpoint: Endpoint,
        /// Offending cell
        coord: GridCoord,
    },

    /// Start or end is an obstacle
    #[error("The {endpoint} cell {coord} is blocked")]
    EndpointBlocked {
        /// Offending endpoint
        endpoint: Endpoint,
        /// Offending cell
        coord: GridCoord,
    },
}

impl PathError {
    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidDimensions { .. } => "INVALID_DIMENSIONS",
            Self::InvalidMinSegmentLength(_) => "INVALID_MIN_SEGMENT",
            Self::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            Self::EndpointBlocked { .. } => "ENDPOINT_BLOCKED",
        }
    }
}
