//! Generic best-first search driven by a pluggable successor strategy.
//!
//! The driver owns the frontier, the closed set and the node arena; an
//! [`Expansion`] decides what a node's identity is, how far the goal looks
//! from a cell, and which successors a popped node produces.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use log::{debug, trace};

use crate::core::GridCoord;

use super::frontier::OpenList;
use super::node::{NodeArena, NodeId, SearchNode};
use super::types::{PathResult, SearchStats};

/// Successor-generation strategy for [`best_first_search`].
pub trait Expansion {
    /// Node identity used for the closed set and open-list lookups.
    type Key: Copy + Eq + Hash;

    /// Engine name used in log lines
    const NAME: &'static str;

    /// Identity of a node
    fn key(node: &SearchNode) -> Self::Key;

    /// Heuristic estimate from `from` to `goal`
    fn heuristic(&self, from: GridCoord, goal: GridCoord) -> f32;

    /// Generate the successors of the just-closed node `current`.
    fn expand(&self, state: &mut SearchState<Self::Key>, current: NodeId, goal: GridCoord);

    /// Turn the reconstructed node chain into the returned path.
    fn finish_path(&self, waypoints: Vec<GridCoord>) -> Vec<GridCoord> {
        waypoints
    }
}

/// Mutable state of one search, handed to [`Expansion::expand`].
pub struct SearchState<K> {
    arena: NodeArena,
    open: OpenList,
    /// Cheapest open node per identity
    open_index: HashMap<K, NodeId>,
    closed: HashSet<K>,
    nodes_expanded: usize,
}

impl<K: Copy + Eq + Hash> SearchState<K> {
    fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            open: OpenList::new(),
            open_index: HashMap::new(),
            closed: HashSet::new(),
            nodes_expanded: 0,
        }
    }

    /// Read a node
    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.arena[id]
    }

    /// All nodes created so far
    #[inline]
    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Whether a node with this identity has already been expanded
    #[inline]
    pub fn is_closed(&self, key: &K) -> bool {
        self.closed.contains(key)
    }

    /// The cheapest open node with this identity, if any
    #[inline]
    pub fn open_node(&self, key: &K) -> Option<NodeId> {
        self.open_index.get(key).copied()
    }

    /// Create a node, queue it, and make it the open entry for `key`.
    ///
    /// A previous open node with the same identity stays queued; it is
    /// dropped when popped after `key` has been closed.
    pub fn open(&mut self, key: K, node: SearchNode) -> NodeId {
        let id = self.arena.push(node);
        self.open.push(id, node.f_cost());
        self.open_index.insert(key, id);
        id
    }

    /// Re-parent an open node if `g_cost` beats its current cost.
    ///
    /// Returns `true` if the node was rewritten and re-queued.
    pub fn relax(&mut self, id: NodeId, parent: NodeId, g_cost: f32) -> bool {
        let node = &mut self.arena[id];
        if g_cost >= node.g_cost {
            return false;
        }
        node.g_cost = g_cost;
        node.parent = Some(parent);
        let f_cost = node.f_cost();
        self.open.push(id, f_cost);
        true
    }

    /// Pop the best live entry, skipping ones outdated by [`Self::relax`].
    fn pop(&mut self) -> Option<NodeId> {
        while let Some((id, queued_f)) = self.open.pop() {
            if queued_f > self.arena[id].f_cost() {
                continue;
            }
            return Some(id);
        }
        None
    }

    fn close(&mut self, key: K) {
        self.closed.insert(key);
        self.open_index.remove(&key);
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            nodes_expanded: self.nodes_expanded,
            nodes_created: self.arena.len(),
            frontier_high_water: self.open.high_water(),
        }
    }
}

/// Run a best-first search from `start` to `goal` until the goal is popped
/// or the frontier is exhausted.
///
/// Inputs are assumed valid; [`Planner`](super::Planner) checks them.
pub fn best_first_search<E: Expansion>(
    expansion: &E,
    start: GridCoord,
    goal: GridCoord,
) -> PathResult {
    trace!("[{}] find_path: start={} goal={}", E::NAME, start, goal);

    let mut state = SearchState::new();
    let start_node = SearchNode::start(start, expansion.heuristic(start, goal));
    state.open(E::key(&start_node), start_node);

    while let Some(current) = state.pop() {
        let node = state.arena[current];
        let key = E::key(&node);
        if state.is_closed(&key) {
            continue;
        }
        state.close(key);
        state.nodes_expanded += 1;

        if node.position == goal {
            let path = expansion.finish_path(state.arena.reconstruct_path(current));
            let stats = state.stats();
            trace!(
                "[{}] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}, open_left={}",
                E::NAME,
                path.len(),
                node.g_cost,
                stats.nodes_expanded,
                state.open.len()
            );
            return PathResult::found(path, node.g_cost, stats);
        }

        expansion.expand(&mut state, current, goal);
    }

    let stats = state.stats();
    debug!(
        "[{}] FAILED: NoPath after expanding {} nodes",
        E::NAME,
        stats.nodes_expanded
    );
    PathResult::no_path(stats)
}
