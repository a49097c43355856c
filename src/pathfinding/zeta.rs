//! Line-of-sight ("Zeta") search.
//!
//! Plain 4-connected best-first search with a Theta*-style relaxation: when
//! a neighbor is visible from the expanded node's parent and far enough
//! away, it may hang directly off that parent, skipping the corner.

use log::trace;

use crate::core::GridCoord;
use crate::grid::Grid;

use super::node::{NodeId, SearchNode};
use super::search::{Expansion, SearchState};
use super::types::PlannerConfig;

/// Successor strategy for the line-of-sight engine. Identity is the cell.
#[derive(Clone, Copy, Debug)]
pub struct LineOfSightExpansion<'a> {
    grid: Grid<'a>,
    min_segment_length: u32,
}

impl<'a> LineOfSightExpansion<'a> {
    /// Create from a grid and planner settings
    pub fn new(grid: Grid<'a>, config: &PlannerConfig) -> Self {
        Self {
            grid,
            min_segment_length: config.min_segment_length,
        }
    }

    /// Re-parent `neighbor` onto `grandparent` if the straight segment between
    /// them is visible, long enough, and cheaper.
    fn try_shortcut(
        &self,
        state: &mut SearchState<GridCoord>,
        grandparent: NodeId,
        neighbor: NodeId,
    ) {
        let from = *state.node(grandparent);
        let to = state.node(neighbor).position;

        let distance = from.position.euclidean_distance(&to);
        if distance < self.min_segment_length as f32 {
            return;
        }
        if !self.grid.line_of_sight(from.position, to) {
            return;
        }
        if state.relax(neighbor, grandparent, from.g_cost + distance) {
            trace!(
                "[{}] shortcut {} -> {} (length {:.2})",
                Self::NAME,
                from.position,
                to,
                distance
            );
        }
    }
}

impl Expansion for LineOfSightExpansion<'_> {
    type Key = GridCoord;
    const NAME: &'static str = "ZetaAStar";

    fn key(node: &SearchNode) -> GridCoord {
        node.position
    }

    /// Euclidean distance
    fn heuristic(&self, from: GridCoord, goal: GridCoord) -> f32 {
        from.euclidean_distance(&goal)
    }

    fn expand(&self, state: &mut SearchState<GridCoord>, current: NodeId, goal: GridCoord) {
        let node = *state.node(current);

        for neighbor in node.position.neighbors_4() {
            if !self.grid.is_walkable(neighbor) || state.is_closed(&neighbor) {
                continue;
            }

            let g_cost = node.g_cost + node.position.euclidean_distance(&neighbor);
            let id = match state.open_node(&neighbor) {
                Some(id) => {
                    state.relax(id, current, g_cost);
                    id
                }
                None => state.open(
                    neighbor,
                    SearchNode {
                        position: neighbor,
                        parent: Some(current),
                        g_cost,
                        h_cost: self.heuristic(neighbor, goal),
                        direction: None,
                        segment_length: 0,
                    },
                ),
            };

            if let Some(grandparent) = node.parent {
                self.try_shortcut(state, grandparent, id);
            }
        }
    }
}
