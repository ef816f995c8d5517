//! Prim's algorithm grown from a single start node.

use tracing::{info, instrument};

use crate::{
    error::Result,
    frontier::Frontier,
    graph::{Edge, Graph, Node},
};

use super::SpanningForest;

/// Computes a minimum spanning tree of the component containing `start`.
///
/// The tree grows one node at a time, always through the lightest edge that
/// leaves it; equal weights prefer the node declared first. Nodes outside the
/// start's component are never reached, so on a disconnected graph the
/// result covers fewer than [`Graph::node_count`] nodes and
/// [`SpanningForest::is_spanning`] is `false`.
///
/// # Errors
/// Returns [`crate::GraphError::UnknownNode`] when `start` is not declared.
///
/// # Examples
/// ```
/// use wayfinder_core::{Graph, Node, prim};
///
/// let graph = Graph::new(
///     ["A", "B", "C"],
///     [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)],
/// )
/// .expect("graph is valid");
/// let tree = prim(&graph, &Node::from("A")).expect("A is declared");
///
/// assert_eq!(tree.total_weight(), 3.0);
/// assert!(tree.is_spanning());
/// ```
#[instrument(
    name = "core.prim",
    err,
    skip(graph, start),
    fields(start = %start, nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph, start: &Node) -> Result<SpanningForest> {
    let start_index = graph.require(start)?;
    let node_count = graph.node_count();

    let mut visited = vec![false; node_count];
    let mut reached = 0_usize;
    let mut accepted = Vec::with_capacity(node_count.saturating_sub(1));
    let mut frontier = Frontier::seeded(start_index);

    while let Some(entry) = frontier.pop() {
        let node = entry.node;
        if visited[node] {
            continue;
        }
        visited[node] = true;
        reached += 1;
        if let Some(origin) = entry.origin {
            accepted.push(Edge::new(
                graph.node_at(origin).clone(),
                graph.node_at(node).clone(),
                entry.priority,
            ));
        }
        if reached == node_count {
            break;
        }
        for &(neighbour, weight) in graph.adjacent(node) {
            if !visited[neighbour] {
                frontier.push(weight, neighbour, Some(node));
            }
        }
    }

    let tree = SpanningForest::new(accepted, reached, node_count, 1);
    info!(
        edges = tree.edges().len(),
        reached,
        nodes = node_count,
        total_weight = tree.total_weight(),
        "minimum spanning tree built",
    );
    Ok(tree)
}
