//! Search nodes and the arena that owns them.
//!
//! Parent links are arena indices, so a node can be re-parented in place
//! without any shared ownership. The arena lives for exactly one search.

use std::ops::{Index, IndexMut};

use crate::core::{Direction, GridCoord};

/// Handle of a node inside a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in its arena
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One explored state of the search graph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchNode {
    /// Cell this node stands on
    pub position: GridCoord,
    /// Predecessor (`None` for the start node)
    pub parent: Option<NodeId>,
    /// Accumulated cost from the start
    pub g_cost: f32,
    /// Heuristic estimate to the goal
    pub h_cost: f32,
    /// Direction of the move that produced this node (`None` for the start)
    pub direction: Option<Direction>,
    /// Cells travelled in `direction` without turning
    pub segment_length: u32,
}

impl SearchNode {
    /// Root node of a search.
    pub fn start(position: GridCoord, h_cost: f32) -> Self {
        Self {
            position,
            parent: None,
            g_cost: 0.0,
            h_cost,
            direction: None,
            segment_length: 0,
        }
    }

    /// `g_cost + h_cost`, the frontier priority
    #[inline]
    pub fn f_cost(&self) -> f32 {
        self.g_cost + self.h_cost
    }
}

/// Owns every node created during one search.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its handle
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Number of nodes created so far
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no node was created
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` up to the root, `id` included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }

    /// Whether `position` appears anywhere on the chain from `id` to the root.
    pub fn chain_contains(&self, id: NodeId, position: GridCoord) -> bool {
        self.ancestors(id).any(|node| node.position == position)
    }

    /// Positions from the root to `goal`, in travel order.
    pub fn reconstruct_path(&self, goal: NodeId) -> Vec<GridCoord> {
        let mut path: Vec<GridCoord> = self.ancestors(goal).map(|node| node.position).collect();
        debug_assert!(path.len() <= self.nodes.len(), "parent chain has a cycle");
        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for NodeArena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }
}

/// Iterator over a parent chain, see [`NodeArena::ancestors`].
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a SearchNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.arena[id];
        self.next = node.parent;
        Some(node)
    }
}
