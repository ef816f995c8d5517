//! Kruskal's algorithm over the whole graph.

use tracing::{debug, info, instrument};

use crate::{
    graph::{Edge, Graph, IndexedEdge},
    union_find::DisjointSet,
};

use super::SpanningForest;

/// Computes a minimum spanning forest of `graph` with Kruskal's algorithm.
///
/// Edges are considered in ascending weight order; equal weights keep their
/// declaration order. An edge is accepted when its endpoints lie in different
/// trees. A disconnected graph yields one tree per component, reported by
/// [`SpanningForest::component_count`]; an empty graph yields an empty forest
/// with zero components.
///
/// # Examples
/// ```
/// use wayfinder_core::{Graph, kruskal};
///
/// let graph = Graph::new(
///     ["A", "B", "C"],
///     [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)],
/// )
/// .expect("graph is valid");
/// let forest = kruskal(&graph);
///
/// let edges: Vec<String> = forest.edges().iter().map(ToString::to_string).collect();
/// assert_eq!(edges, ["A -- B == 1", "B -- C == 2"]);
/// assert_eq!(forest.total_weight(), 3.0);
/// assert!(forest.is_spanning());
/// ```
#[must_use]
#[instrument(
    name = "core.kruskal",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> SpanningForest {
    let node_count = graph.node_count();
    let mut sorted: Vec<&IndexedEdge> = graph.indexed_edges().iter().collect();
    sorted.sort_by(|left, right| left.weight.total_cmp(&right.weight));

    let mut sets = DisjointSet::new(node_count);
    let target_edges = node_count.saturating_sub(1);
    let mut accepted = Vec::with_capacity(target_edges);
    let mut rejected = 0_usize;

    for edge in sorted {
        if accepted.len() == target_edges {
            break;
        }
        if sets.union(edge.source, edge.target) {
            accepted.push(Edge::new(
                graph.node_at(edge.source).clone(),
                graph.node_at(edge.target).clone(),
                edge.weight,
            ));
        } else {
            rejected += 1;
        }
    }

    debug!(rejected, "cycle-forming edges skipped");
    let forest = SpanningForest::new(accepted, node_count, node_count, sets.components());
    info!(
        edges = forest.edges().len(),
        components = forest.component_count(),
        total_weight = forest.total_weight(),
        "minimum spanning forest built",
    );
    forest
}
