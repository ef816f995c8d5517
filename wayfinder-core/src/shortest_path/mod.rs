//! Single-source shortest paths (Dijkstra).
//!
//! The engine is label-setting: it repeatedly settles the unvisited node with
//! the smallest tentative cost and relaxes its unvisited neighbours, updating
//! a neighbour only on strict improvement. Selection goes through a binary
//! heap with lazy deletion rather than a linear scan.

use std::{borrow::Borrow, cmp::Ordering, collections::HashMap, hash::Hash, slice};

use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    frontier::Frontier,
    graph::{Graph, Node, Weight},
};

/// Shortest-path information for a single node.
#[derive(Clone, Debug, PartialEq)]
pub struct PathEntry {
    node: Node,
    cost: Option<Weight>,
    predecessor: Option<Node>,
}

impl PathEntry {
    /// Returns the node this entry describes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node(&self) -> &Node { &self.node }

    /// Returns the shortest-path cost, or `None` when the node is unreachable.
    #[must_use]
    #[rustfmt::skip]
    pub fn cost(&self) -> Option<Weight> { self.cost }

    /// Returns the node preceding this one on a shortest path.
    ///
    /// `None` for the source and for unreachable nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn predecessor(&self) -> Option<&Node> { self.predecessor.as_ref() }

    /// Returns `true` when a path from the source exists.
    #[must_use]
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }
}

/// The output of [`shortest_paths`]: one [`PathEntry`] per graph node.
///
/// # Examples
/// ```
/// use wayfinder_core::{Graph, Node, shortest_paths};
///
/// let graph = Graph::new(
///     ["A", "B", "C"],
///     [("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 4.0)],
/// )
/// .expect("graph is valid");
/// let paths = shortest_paths(&graph, &Node::from("A")).expect("A is declared");
///
/// assert_eq!(paths.cost("A"), Some(0.0));
/// assert_eq!(paths.cost("B"), Some(1.0));
/// assert_eq!(paths.cost("C"), Some(3.0));
/// assert_eq!(paths.predecessor("C"), Some(&Node::from("B")));
/// assert_eq!(
///     paths.path_to("C"),
///     Some(vec![Node::from("A"), Node::from("B"), Node::from("C")]),
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: Node,
    entries: Vec<PathEntry>,
    index: HashMap<Node, usize>,
}

impl ShortestPaths {
    /// Returns the node the paths start from.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &Node { &self.source }

    /// Returns the entry for `node`, if it belongs to the graph.
    #[must_use]
    pub fn entry<Q>(&self, node: &Q) -> Option<&PathEntry>
    where
        Node: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(node)
            .and_then(|&position| self.entries.get(position))
    }

    /// Returns the cost of the shortest path to `node`.
    ///
    /// `None` when `node` is unreachable or not part of the graph.
    #[must_use]
    pub fn cost<Q>(&self, node: &Q) -> Option<Weight>
    where
        Node: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entry(node).and_then(PathEntry::cost)
    }

    /// Returns the predecessor of `node` on a shortest path.
    #[must_use]
    pub fn predecessor<Q>(&self, node: &Q) -> Option<&Node>
    where
        Node: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entry(node).and_then(PathEntry::predecessor)
    }

    /// Reconstructs the node sequence from the source to `node`.
    ///
    /// Returns `None` when `node` is unreachable or unknown. The path to the
    /// source itself is `[source]`.
    #[must_use]
    pub fn path_to<Q>(&self, node: &Q) -> Option<Vec<Node>>
    where
        Node: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut current = self.entry(node).filter(|entry| entry.is_reachable())?;
        let mut path = vec![current.node.clone()];
        // A predecessor chain visits each node at most once.
        for _ in 0..self.entries.len() {
            let Some(previous) = current.predecessor.as_ref() else {
                path.reverse();
                return Some(path);
            };
            path.push(previous.clone());
            current = self.entry::<Node>(previous)?;
        }
        None
    }

    /// Returns the number of nodes with a finite cost, including the source.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_reachable()).count()
    }

    /// Returns the number of entries, one per graph node.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the graph had no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in node declaration order.
    pub fn iter(&self) -> slice::Iter<'_, PathEntry> {
        self.entries.iter()
    }

    /// Returns the entries sorted by ascending cost, unreachable nodes last.
    ///
    /// Equal costs keep node declaration order.
    #[must_use]
    pub fn sorted_by_cost(&self) -> Vec<&PathEntry> {
        let mut sorted: Vec<&PathEntry> = self.entries.iter().collect();
        sorted.sort_by(|left, right| compare_costs(left.cost, right.cost));
        sorted
    }
}

impl<'a> IntoIterator for &'a ShortestPaths {
    type Item = &'a PathEntry;
    type IntoIter = slice::Iter<'a, PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn compare_costs(left: Option<Weight>, right: Option<Weight>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Computes the shortest-path cost and predecessor from `source` to every
/// node of `graph`.
///
/// Nodes outside the source's component are reported as unreachable
/// ([`PathEntry::cost`] is `None`). Equal-cost candidates settle in node
/// declaration order; a predecessor only changes on strict improvement, so
/// among several shortest paths the one discovered first is kept.
///
/// # Errors
/// Returns [`GraphError::UnknownNode`] when `source` is not declared and
/// [`GraphError::NegativeWeight`] when any edge weight is negative.
#[instrument(
    name = "core.shortest_paths",
    err,
    skip(graph, source),
    fields(source = %source, nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn shortest_paths(graph: &Graph, source: &Node) -> Result<ShortestPaths> {
    let source_index = graph.require(source)?;
    ensure_non_negative(graph)?;

    let node_count = graph.node_count();
    let mut tentative = vec![Weight::INFINITY; node_count];
    let mut predecessor: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut settled = 0_usize;
    tentative[source_index] = 0.0;

    let mut frontier = Frontier::seeded(source_index);
    while let Some(entry) = frontier.pop() {
        let node = entry.node;
        if visited[node] {
            continue;
        }
        visited[node] = true;
        settled += 1;
        if settled == node_count {
            break;
        }

        let base = tentative[node];
        for &(neighbour, weight) in graph.adjacent(node) {
            if visited[neighbour] {
                continue;
            }
            let candidate = base + weight;
            if candidate < tentative[neighbour] {
                tentative[neighbour] = candidate;
                predecessor[neighbour] = Some(node);
                frontier.push(candidate, neighbour, Some(node));
            }
        }
    }

    let entries: Vec<PathEntry> = graph
        .nodes()
        .iter()
        .zip(tentative.into_iter().zip(predecessor))
        .map(|(node, (cost, previous))| PathEntry {
            node: node.clone(),
            cost: cost.is_finite().then_some(cost),
            predecessor: previous.map(|index| graph.node_at(index).clone()),
        })
        .collect();

    debug!(reachable = settled, "shortest paths computed");
    Ok(ShortestPaths {
        source: source.clone(),
        index: graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(position, node)| (node.clone(), position))
            .collect(),
        entries,
    })
}

fn ensure_non_negative(graph: &Graph) -> Result<()> {
    match graph.indexed_edges().iter().find(|edge| edge.weight < 0.0) {
        Some(edge) => Err(GraphError::NegativeWeight {
            left: graph.node_at(edge.source).clone(),
            right: graph.node_at(edge.target).clone(),
            weight: edge.weight,
        }),
        None => Ok(()),
    }
}
