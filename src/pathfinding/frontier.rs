//! Open list: binary min-heap keyed by `f_cost`.
//!
//! Entries are never removed or updated in place. A node whose cost drops is
//! pushed again, and the driver discards the outdated entry when it surfaces.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::node::NodeId;

#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f_cost: f32,
    /// Insertion counter; equal `f_cost` pops first-in first-out
    order: u64,
    node: NodeId,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Best-first frontier.
#[derive(Debug, Default)]
pub(crate) struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    next_order: u64,
    high_water: usize,
}

impl OpenList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `node` with priority `f_cost`.
    pub(crate) fn push(&mut self, node: NodeId, f_cost: f32) {
        self.heap.push(OpenEntry {
            f_cost,
            order: self.next_order,
            node,
        });
        self.next_order += 1;
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the entry with the lowest `f_cost`, returning the node and the
    /// priority it was queued with.
    pub(crate) fn pop(&mut self) -> Option<(NodeId, f32)> {
        self.heap.pop().map(|e| (e.node, e.f_cost))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the heap ever reached
    pub(crate) fn high_water(&self) -> usize {
        self.high_water
    }
}
