//! Min-priority frontier shared by the Dijkstra and Prim engines.
//!
//! Entries are ordered by `(priority, node, origin)` ascending, so equal
//! priorities pop the node declared first. Stale entries are not removed on
//! improvement; callers skip them when popped.

use std::{cmp::Ordering, collections::BinaryHeap};

use crate::graph::Weight;

#[derive(Clone, Copy, Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: Weight,
    pub(crate) node: usize,
    pub(crate) origin: Option<usize>,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    // Reversed: `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.origin.cmp(&self.origin))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub(crate) fn seeded(node: usize) -> Self {
        let mut frontier = Self::default();
        frontier.push(0.0, node, None);
        frontier
    }

    pub(crate) fn push(&mut self, priority: Weight, node: usize, origin: Option<usize>) {
        self.heap.push(FrontierEntry {
            priority,
            node,
            origin,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}
