//! Shared helpers for the MST property suites.

use crate::{Edge, Graph, Weight};

/// Relative tolerance used when comparing sums accumulated in different
/// orders.
pub(super) fn weights_match(left: Weight, right: Weight) -> bool {
    (left - right).abs() <= 1e-9 * left.abs().max(right.abs()).max(1.0)
}

/// Maps forest edges onto `(source, target, weight)` index triples.
pub(super) fn edge_indices(graph: &Graph, edges: &[Edge]) -> Option<Vec<(usize, usize, Weight)>> {
    edges
        .iter()
        .map(|edge| {
            Some((
                graph.index_of(edge.source())?,
                graph.index_of(edge.target())?,
                edge.weight(),
            ))
        })
        .collect()
}

/// Walks the tree edges from `from` looking for `to` and returns the heaviest
/// weight on the connecting path.
pub(super) fn max_on_path(
    node_count: usize,
    tree: &[(usize, usize, Weight)],
    from: usize,
    to: usize,
) -> Option<Weight> {
    let mut adjacency = vec![Vec::new(); node_count];
    for &(a, b, w) in tree {
        adjacency[a].push((b, w));
        adjacency[b].push((a, w));
    }
    let mut best = vec![None; node_count];
    best[from] = Some(Weight::NEG_INFINITY);
    let mut stack = vec![from];
    while let Some(node) = stack.pop() {
        let heaviest = best[node]?;
        for &(next, weight) in &adjacency[node] {
            if best[next].is_none() {
                best[next] = Some(heaviest.max(weight));
                stack.push(next);
            }
        }
    }
    best[to]
}
