//! Minimum spanning tree (MST) construction.
//!
//! Two engines share one result type. [`kruskal`] sorts every edge and grows a
//! forest with a disjoint-set structure, so it covers every component of the
//! graph. [`prim`] expands a single tree outward from a start node through a
//! min-priority frontier and therefore only covers the start's component.

mod kruskal;
mod prim;

use crate::graph::{Edge, Weight};

pub use self::{kruskal::kruskal, prim::prim};

/// The output of an MST engine: the selected edges and their total weight.
///
/// When the forest reaches every node through a single tree it is a minimum
/// spanning tree ([`SpanningForest::is_spanning`]).
///
/// # Examples
/// ```
/// use wayfinder_core::{Graph, Node, kruskal, prim};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     [("A", "B", 1.0), ("C", "D", 1.0)],
/// )
/// .expect("graph is valid");
///
/// let forest = kruskal(&graph);
/// assert_eq!(forest.edges().len(), 2);
/// assert_eq!(forest.component_count(), 2);
///
/// let tree = prim(&graph, &Node::from("A")).expect("A is declared");
/// assert_eq!(tree.total_weight(), 1.0);
/// assert_eq!((tree.nodes_reached(), tree.node_count()), (2, 4));
/// assert!(!tree.is_spanning());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    total_weight: Weight,
    nodes_reached: usize,
    node_count: usize,
    component_count: usize,
}

impl SpanningForest {
    pub(crate) fn new(
        edges: Vec<Edge>,
        nodes_reached: usize,
        node_count: usize,
        component_count: usize,
    ) -> Self {
        let total_weight = edges.iter().map(Edge::weight).sum();
        Self {
            edges,
            total_weight,
            nodes_reached,
            node_count,
            component_count,
        }
    }

    /// Returns the selected edges in the order the engine accepted them.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of nodes covered by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes_reached(&self) -> usize { self.nodes_reached }

    /// Returns the number of nodes in the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of trees in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when a single tree covers every node of the graph.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.nodes_reached == self.node_count && self.component_count <= 1
    }
}

#[cfg(test)]
mod property;
