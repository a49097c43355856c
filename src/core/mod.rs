//! Core types shared by the grid and the search engines.
//!
//! - [`GridCoord`]: integer cell coordinate
//! - [`Direction`]: the four cardinal unit moves

mod direction;
mod point;

pub use direction::Direction;
pub use point::GridCoord;
