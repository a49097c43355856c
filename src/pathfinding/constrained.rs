//! Constrained-direction A*.
//!
//! A node may keep going one cell in its current direction. Turning is only
//! legal once the current run is at least `min_segment_length` cells long,
//! and a turn travels exactly that many cells in one atomic step, so every
//! segment of the resulting path is long enough.

use log::trace;

use crate::core::{Direction, GridCoord};
use crate::grid::Grid;

use super::node::{NodeId, SearchNode};
use super::search::{Expansion, SearchState};
use super::types::PlannerConfig;

/// Successor strategy for the constrained engine.
///
/// Identity is `(position, direction)`: arriving at a cell heading right is a
/// different state from arriving there heading down.
#[derive(Clone, Copy, Debug)]
pub struct ConstrainedExpansion<'a> {
    grid: Grid<'a>,
    min_segment_length: u32,
    prevent_self_intersection: bool,
    forbid_reversal: bool,
}

impl<'a> ConstrainedExpansion<'a> {
    /// Create from a grid and planner settings
    pub fn new(grid: Grid<'a>, config: &PlannerConfig) -> Self {
        Self {
            grid,
            min_segment_length: config.min_segment_length,
            prevent_self_intersection: config.prevent_self_intersection,
            forbid_reversal: config.forbid_reversal,
        }
    }

    /// Walk `steps` cells from `node` in `direction`; `None` if any cell on
    /// the way is unwalkable or (with the guard on) already on the chain.
    fn walk(
        &self,
        state: &SearchState<(GridCoord, Option<Direction>)>,
        current: NodeId,
        direction: Direction,
        steps: u32,
    ) -> Option<GridCoord> {
        let mut position = state.node(current).position;
        for _ in 0..steps {
            position = position + direction.offset();
            if !self.grid.is_walkable(position) {
                return None;
            }
            if self.prevent_self_intersection && state.arena().chain_contains(current, position) {
                return None;
            }
        }
        Some(position)
    }
}

impl Expansion for ConstrainedExpansion<'_> {
    type Key = (GridCoord, Option<Direction>);
    const NAME: &'static str = "ConstrainedAStar";

    fn key(node: &SearchNode) -> Self::Key {
        (node.position, node.direction)
    }

    /// Manhattan distance
    fn heuristic(&self, from: GridCoord, goal: GridCoord) -> f32 {
        from.manhattan_distance(&goal) as f32
    }

    fn expand(&self, state: &mut SearchState<Self::Key>, current: NodeId, goal: GridCoord) {
        let node = *state.node(current);
        let min = self.min_segment_length;

        for direction in Direction::ALL {
            let (steps, segment_length) = match node.direction {
                None => (1, node.segment_length + 1),
                Some(heading) if heading == direction => (1, node.segment_length + 1),
                Some(heading) => {
                    if node.segment_length < min {
                        continue;
                    }
                    if self.forbid_reversal && direction == heading.opposite() {
                        continue;
                    }
                    (min, min)
                }
            };

            let Some(position) = self.walk(state, current, direction, steps) else {
                continue;
            };

            let key = (position, Some(direction));
            if state.is_closed(&key) {
                continue;
            }

            let g_cost = node.g_cost + steps as f32;
            if let Some(existing) = state.open_node(&key) {
                if state.node(existing).g_cost <= g_cost {
                    continue;
                }
            }

            state.open(
                key,
                SearchNode {
                    position,
                    parent: Some(current),
                    g_cost,
                    h_cost: self.heuristic(position, goal),
                    direction: Some(direction),
                    segment_length,
                },
            );
        }
    }

    fn finish_path(&self, waypoints: Vec<GridCoord>) -> Vec<GridCoord> {
        let path = fill_straight_hops(&waypoints);
        if path.len() != waypoints.len() {
            trace!(
                "[{}] expanded {} waypoints into {} cells",
                Self::NAME,
                waypoints.len(),
                path.len()
            );
        }
        path
    }
}

/// Write out the cells a multi-cell axis-aligned hop jumps over.
///
/// Hops that are not axis-aligned are kept as they are.
pub fn fill_straight_hops(waypoints: &[GridCoord]) -> Vec<GridCoord> {
    let Some(&first) = waypoints.first() else {
        return Vec::new();
    };

    let mut path = Vec::with_capacity(waypoints.len());
    path.push(first);
    for hop in waypoints.windows(2) {
        let (from, to) = (hop[0], hop[1]);
        if let Some(direction) = Direction::between(from, to) {
            let steps = from.manhattan_distance(&to);
            path.extend((1..steps).map(|i| from.step(direction, i)));
        }
        path.push(to);
    }
    path
}
