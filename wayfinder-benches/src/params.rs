//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of nodes in the generated graph.
    pub node_count: usize,
    /// Extra edges per node on top of the connecting path.
    pub edge_factor: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},deg={}", self.node_count, self.edge_factor)
    }
}
