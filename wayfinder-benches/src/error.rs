//! Benchmark setup error type.
//!
//! Collects the failures that may arise while preparing benchmark graphs so
//! setup functions can propagate them with `?`.

use wayfinder_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation was misconfigured.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated graph, or a query against it, was rejected.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
