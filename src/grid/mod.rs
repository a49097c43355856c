//! The obstacle grid.
//!
//! - [`ObstacleSet`]: blocked cells plus the editing operations a caller uses
//!   to paint and erase obstacles
//! - [`Grid`]: read-only walkability oracle over a point-in-time obstacle set
//! - [`LayoutHistory`]: named snapshots of obstacle layouts

mod history;
mod map;
mod obstacles;

pub use history::LayoutHistory;
pub use map::Grid;
pub use obstacles::ObstacleSet;
