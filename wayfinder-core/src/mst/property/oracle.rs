//! Exhaustive minimum spanning forest oracle.
//!
//! Enumerates every acyclic edge subset with the maximal number of edges and
//! keeps the lightest. Exponential, so it is only run on the small graphs the
//! fixture strategies generate.

use crate::{Graph, Weight};

/// Result of the exhaustive search.
#[derive(Clone, Copy, Debug)]
pub(super) struct ForestOracle {
    /// Weight of the lightest maximal spanning forest.
    pub total_weight: Weight,
    /// Number of edges in any maximal spanning forest.
    pub edge_count: usize,
}

/// Searches every acyclic edge subset of `graph` for the lightest one with
/// the most edges.
pub(super) fn exhaustive_minimum_forest(graph: &Graph) -> ForestOracle {
    let edges: Vec<(usize, usize, Weight)> = graph
        .indexed_edges()
        .iter()
        .map(|edge| (edge.source, edge.target, edge.weight))
        .collect();
    let labels: Vec<usize> = (0..graph.node_count()).collect();
    let mut best = ForestOracle {
        total_weight: 0.0,
        edge_count: 0,
    };
    search(&edges, 0, &labels, 0, 0.0, &mut best);
    best
}

fn search(
    edges: &[(usize, usize, Weight)],
    next: usize,
    labels: &[usize],
    chosen: usize,
    weight: Weight,
    best: &mut ForestOracle,
) {
    if chosen > best.edge_count || (chosen == best.edge_count && weight < best.total_weight) {
        *best = ForestOracle {
            total_weight: weight,
            edge_count: chosen,
        };
    }
    for (offset, &(a, b, w)) in edges[next..].iter().enumerate() {
        let (keep, absorb) = (labels[a], labels[b]);
        if keep == absorb {
            continue;
        }
        let merged: Vec<usize> = labels
            .iter()
            .map(|&label| if label == absorb { keep } else { label })
            .collect();
        search(edges, next + offset + 1, &merged, chosen + 1, weight + w, best);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_triangle_minimum() {
        let graph = Graph::new(
            ["A", "B", "C"],
            [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)],
        )
        .expect("triangle must build");
        let oracle = exhaustive_minimum_forest(&graph);
        assert_eq!(oracle.edge_count, 2);
        assert_eq!(oracle.total_weight, 3.0);
    }

    #[test]
    fn counts_forest_edges_per_component() {
        let graph = Graph::new(
            ["A", "B", "C", "D", "E"],
            [("A", "B", 5.0), ("C", "D", 1.0), ("D", "E", 2.0), ("C", "E", 1.5)],
        )
        .expect("graph must build");
        let oracle = exhaustive_minimum_forest(&graph);
        assert_eq!(oracle.edge_count, 3);
        assert_eq!(oracle.total_weight, 7.5);
    }
}
