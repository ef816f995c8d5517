//! Synthetic graphs for benchmarking.
//!
//! [`SyntheticGraph`] builds a connected weighted graph from a seeded RNG so
//! benchmark runs are reproducible. A random path through every node keeps
//! the graph connected; extra random edges raise the average degree.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use wayfinder_core::{Graph, GraphBuilder, Node};

use crate::error::BenchSetupError;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Extra edges per node added after the connecting path.
    pub edge_factor: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected random graph with node labels `n0`, `n1`, ...
///
/// # Examples
///
/// ```
/// use wayfinder_benches::source::{SyntheticConfig, SyntheticGraph};
///
/// let config = SyntheticConfig { node_count: 10, edge_factor: 2, seed: 42 };
/// let synthetic = SyntheticGraph::generate(&config).expect("valid config");
/// assert_eq!(synthetic.graph().node_count(), 10);
/// assert!(synthetic.graph().edge_count() >= 9);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    graph: Graph,
    start: Node,
}

impl SyntheticGraph {
    /// Generates a graph from the given configuration.
    ///
    /// Weights are drawn uniformly from `[1, 100)`. Extra edges that would
    /// form a self-loop or repeat a pair are skipped, so dense requests on
    /// small graphs yield fewer edges than asked for.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroNodes`] if `node_count` is zero, or
    /// [`BenchSetupError::Graph`] if the graph fails validation.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, BenchSetupError> {
        if config.node_count == 0 {
            return Err(SyntheticError::ZeroNodes.into());
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let nodes: Vec<Node> = (0..config.node_count)
            .map(|index| Node::from(format!("n{index}")))
            .collect();

        let mut order: Vec<usize> = (0..config.node_count).collect();
        order.shuffle(&mut rng);

        let mut pairs = HashSet::new();
        let mut builder = GraphBuilder::new().with_nodes(nodes.iter());
        for window in order.windows(2) {
            if let [left, right] = *window {
                pairs.insert(unordered(left, right));
                builder.add_edge(&nodes[left], &nodes[right], rng.gen_range(1.0..100.0));
            }
        }

        let extra = config.node_count.saturating_mul(config.edge_factor);
        for _ in 0..extra {
            let left = rng.gen_range(0..config.node_count);
            let right = rng.gen_range(0..config.node_count);
            if left == right || !pairs.insert(unordered(left, right)) {
                continue;
            }
            builder.add_edge(&nodes[left], &nodes[right], rng.gen_range(1.0..100.0));
        }

        let start = nodes[order[0]].clone();
        Ok(Self {
            graph: builder.build()?,
            start,
        })
    }

    /// Returns the generated graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Returns the node the connecting path starts from, used as the query
    /// source by the benchmarks.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> &Node { &self.start }
}

const fn unordered(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}
