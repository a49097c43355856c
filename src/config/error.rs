//! Configuration loading errors.

use thiserror::Error;

use crate::error::PathError;

/// Error loading or interpreting a YAML configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML syntax or schema error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// Unknown character in an ASCII layout, or a cell outside the grid
    #[error("Invalid layout cell '{symbol}' at row {row}, column {column}")]
    InvalidLayout {
        /// Layout row (0-based)
        row: usize,
        /// Layout column (0-based)
        column: usize,
        /// Offending character
        symbol: char,
    },

    /// Values parse but describe an invalid search
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] PathError),
}
