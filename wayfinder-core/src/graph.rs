//! Immutable weighted undirected graph model.
//!
//! Labels are interned into dense indices at construction time so the engines
//! can work over plain `usize` ids and contiguous arrays, while every public
//! accessor speaks in terms of [`Node`] labels.

use std::{
    borrow::Borrow,
    collections::{HashMap, HashSet},
    fmt,
    hash::Hash,
    slice,
    sync::Arc,
};

use tracing::{debug, instrument};

use crate::error::{GraphError, InvalidEdgeReason, Result};

/// Numeric edge weight. Always finite and non-negative inside a [`Graph`].
pub type Weight = f64;

/// Opaque node label.
///
/// Cloning is cheap: the label is reference counted.
///
/// # Examples
/// ```
/// use wayfinder_core::Node;
///
/// let node = Node::from("Lima");
/// assert_eq!(node.as_str(), "Lima");
/// assert_eq!(node.to_string(), "Lima");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node(Arc<str>);

impl Node {
    /// Creates a node from any string-like label.
    #[must_use]
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Node {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Node {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl From<&Node> for Node {
    fn from(node: &Node) -> Self {
        node.clone()
    }
}

impl Borrow<str> for Node {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Node {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A weighted undirected edge as exposed to callers.
///
/// Endpoints keep the orientation in which the edge was declared (Kruskal,
/// [`Graph::edges`]) or discovered (Prim: `source` is the tree side).
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    source: Node,
    target: Node,
    weight: Weight,
}

impl Edge {
    pub(crate) const fn new(source: Node, target: Node, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> &Node { &self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> &Node { &self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }

    /// Returns `true` when the edge joins `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: &str, b: &str) -> bool {
        let (source, target) = (self.source.as_str(), self.target.as_str());
        (source == a && target == b) || (source == b && target == a)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {} == {}", self.source, self.target, self.weight)
    }
}

/// Edge in index space, in declaration orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct IndexedEdge {
    pub(crate) source: usize,
    pub(crate) target: usize,
    pub(crate) weight: Weight,
}

/// Immutable weighted undirected graph.
///
/// Build one with [`GraphBuilder`] or [`Graph::new`]. Node iteration order is
/// declaration order; edge iteration order is declaration order.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<Node, usize>,
    edges: Vec<IndexedEdge>,
    adjacency: Vec<Vec<(usize, Weight)>>,
}

impl Graph {
    /// Builds a graph from a node list and an edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when an edge references an
    /// undeclared node, is a self-loop, has a negative or non-finite weight,
    /// repeats an unordered pair, or overflows the total weight.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Graph, GraphErrorCode};
    ///
    /// let err = Graph::new(["A", "B"], [("A", "C", 5.0)]).expect_err("C is undeclared");
    /// assert_eq!(err.code(), GraphErrorCode::InvalidEdge);
    /// ```
    pub fn new<N, E, L>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: Into<Node>,
        E: IntoIterator<Item = (L, L, Weight)>,
        L: Into<Node>,
    {
        let mut builder = GraphBuilder::new().with_nodes(nodes);
        for (left, right, weight) in edges {
            builder.add_edge(left, right, weight);
        }
        builder.build()
    }

    /// Returns the declared nodes in declaration order.
    #[must_use]
    #[rustfmt::skip]
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    /// Returns the number of nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns `true` when the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` when `node` is declared.
    #[must_use]
    pub fn contains<Q>(&self, node: &Q) -> bool
    where
        Node: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(node)
    }

    /// Iterates over every edge in declaration order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        self.edges.iter().map(|edge| {
            Edge::new(
                self.node_at(edge.source).clone(),
                self.node_at(edge.target).clone(),
                edge.weight,
            )
        })
    }

    /// Returns the neighbours of `node` with the connecting edge weights.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownNode`] when `node` is not declared.
    ///
    /// # Examples
    /// ```
    /// use wayfinder_core::{Graph, Node};
    ///
    /// let graph = Graph::new(["A", "B", "C"], [("A", "B", 1.0), ("C", "A", 2.0)])
    ///     .expect("graph is valid");
    /// let neighbours: Vec<_> = graph
    ///     .neighbors(&Node::from("A"))
    ///     .expect("A is declared")
    ///     .map(|(node, weight)| (node.as_str(), weight))
    ///     .collect();
    /// assert_eq!(neighbours, vec![("B", 1.0), ("C", 2.0)]);
    /// ```
    pub fn neighbors(&self, node: &Node) -> Result<Neighbors<'_>> {
        let index = self.require(node)?;
        Ok(Neighbors {
            graph: self,
            inner: self.adjacent(index).iter(),
        })
    }

    /// Returns the weight of the edge joining `a` and `b`, if any.
    #[must_use]
    pub fn weight<Q>(&self, a: &Q, b: &Q) -> Option<Weight>
    where
        Node: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let a = self.index_of(a)?;
        let b = self.index_of(b)?;
        self.adjacent(a)
            .iter()
            .find_map(|&(neighbour, weight)| (neighbour == b).then_some(weight))
    }

    pub(crate) fn index_of<Q>(&self, node: &Q) -> Option<usize>
    where
        Node: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(node).copied()
    }

    pub(crate) fn require(&self, node: &Node) -> Result<usize> {
        self.index_of(node)
            .ok_or_else(|| GraphError::UnknownNode { node: node.clone() })
    }

    pub(crate) fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub(crate) fn indexed_edges(&self) -> &[IndexedEdge] {
        &self.edges
    }

    pub(crate) fn adjacent(&self, index: usize) -> &[(usize, Weight)] {
        &self.adjacency[index]
    }

    /// Assembles a graph without validating the edges.
    #[cfg(test)]
    pub(crate) fn from_parts_unchecked(nodes: &[&str], edges: &[(usize, usize, Weight)]) -> Self {
        let nodes: Vec<Node> = nodes.iter().copied().map(Node::from).collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.clone(), position))
            .collect();
        let mut adjacency = vec![Vec::new(); nodes.len()];
        let edges = edges
            .iter()
            .map(|&(source, target, weight)| {
                adjacency[source].push((target, weight));
                adjacency[target].push((source, weight));
                IndexedEdge {
                    source,
                    target,
                    weight,
                }
            })
            .collect();
        Self {
            nodes,
            index,
            edges,
            adjacency,
        }
    }
}

/// Iterator over `(neighbour, weight)` pairs returned by [`Graph::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    graph: &'a Graph,
    inner: slice::Iter<'a, (usize, Weight)>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = (&'a Node, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;
        self.inner
            .next()
            .map(|&(index, weight)| (graph.node_at(index), weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

/// Collects nodes and edges and validates them into a [`Graph`].
///
/// # Examples
/// ```
/// use wayfinder_core::GraphBuilder;
///
/// let graph = GraphBuilder::new()
///     .with_nodes(["A", "B", "C", "D"])
///     .with_edge("A", "B", 1.0)
///     .with_edge("C", "D", 1.0)
///     .build()
///     .expect("graph is valid");
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<(Node, Node, Weight)>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a node. Declaring the same label twice is a no-op.
    #[must_use]
    pub fn with_node(mut self, node: impl Into<Node>) -> Self {
        self.add_node(node);
        self
    }

    /// Declares several nodes.
    #[must_use]
    pub fn with_nodes<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Declares an undirected edge.
    #[must_use]
    pub fn with_edge(
        mut self,
        left: impl Into<Node>,
        right: impl Into<Node>,
        weight: Weight,
    ) -> Self {
        self.add_edge(left, right, weight);
        self
    }

    /// Declares a node in place.
    pub fn add_node(&mut self, node: impl Into<Node>) -> &mut Self {
        self.nodes.push(node.into());
        self
    }

    /// Declares an undirected edge in place.
    pub fn add_edge(
        &mut self,
        left: impl Into<Node>,
        right: impl Into<Node>,
        weight: Weight,
    ) -> &mut Self {
        self.edges.push((left.into(), right.into(), weight));
        self
    }

    /// Returns `true` when `node` has been declared.
    #[must_use]
    pub fn has_node(&self, node: &str) -> bool {
        self.nodes.iter().any(|declared| declared.as_str() == node)
    }

    /// Validates the collected nodes and edges and constructs the [`Graph`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] for the first edge that references
    /// an undeclared node, is a self-loop, carries a non-finite or negative
    /// weight, or repeats an unordered pair, and for the edge that pushes
    /// the sum of all weights past [`Weight::MAX`]. A finite total bounds
    /// every path cost and spanning-forest weight.
    #[instrument(
        name = "core.graph.build",
        level = "debug",
        err,
        skip(self),
        fields(declared_nodes = self.nodes.len(), declared_edges = self.edges.len()),
    )]
    pub fn build(self) -> Result<Graph> {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut index = HashMap::with_capacity(self.nodes.len());
        for node in self.nodes {
            if !index.contains_key(&node) {
                index.insert(node.clone(), nodes.len());
                nodes.push(node);
            }
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];
        let mut edges = Vec::with_capacity(self.edges.len());
        let mut seen_pairs = HashSet::with_capacity(self.edges.len());
        let mut total_weight: Weight = 0.0;
        for (left, right, weight) in self.edges {
            let edge = match validate_edge(&index, &mut seen_pairs, &left, &right, weight) {
                Ok(edge) => edge,
                Err(reason) => return Err(GraphError::InvalidEdge { left, right, reason }),
            };
            total_weight += edge.weight;
            if !total_weight.is_finite() {
                return Err(GraphError::InvalidEdge {
                    left,
                    right,
                    reason: InvalidEdgeReason::TotalWeightOverflow,
                });
            }
            adjacency[edge.source].push((edge.target, edge.weight));
            adjacency[edge.target].push((edge.source, edge.weight));
            edges.push(edge);
        }

        debug!(nodes = nodes.len(), edges = edges.len(), "graph constructed");
        Ok(Graph {
            nodes,
            index,
            edges,
            adjacency,
        })
    }
}

fn validate_edge(
    index: &HashMap<Node, usize>,
    seen_pairs: &mut HashSet<(usize, usize)>,
    left: &Node,
    right: &Node,
    weight: Weight,
) -> core::result::Result<IndexedEdge, InvalidEdgeReason> {
    let source = *index
        .get(left)
        .ok_or_else(|| InvalidEdgeReason::UnknownEndpoint(left.clone()))?;
    let target = *index
        .get(right)
        .ok_or_else(|| InvalidEdgeReason::UnknownEndpoint(right.clone()))?;

    if source == target {
        return Err(InvalidEdgeReason::SelfLoop);
    }
    if !weight.is_finite() {
        return Err(InvalidEdgeReason::NonFiniteWeight);
    }
    if weight < 0.0 {
        return Err(InvalidEdgeReason::NegativeWeight(weight));
    }

    let pair = if source <= target {
        (source, target)
    } else {
        (target, source)
    };
    if !seen_pairs.insert(pair) {
        return Err(InvalidEdgeReason::Duplicate);
    }

    Ok(IndexedEdge {
        source,
        target,
        weight,
    })
}
