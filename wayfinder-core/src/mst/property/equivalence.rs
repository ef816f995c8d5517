//! Equivalence with the exhaustive oracle and between the two engines.
//!
//! Kruskal must match the lightest maximal forest the oracle finds. Running
//! Prim once from a representative of every component must reproduce the
//! same total, and on connected graphs every start node must.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::{GraphFixture, component_of};
use crate::{Weight, kruskal, prim};

use super::helpers::weights_match;
use super::oracle::exhaustive_minimum_forest;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let forest = kruskal(graph);
    let oracle = exhaustive_minimum_forest(graph);

    if !weights_match(forest.total_weight(), oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={}, oracle={} (distribution={:?}, nodes={}, edges={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.distribution,
            graph.node_count(),
            graph.edge_count(),
        )));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: kruskal={}, oracle={} (distribution={:?})",
            forest.edges().len(),
            oracle.edge_count,
            fixture.distribution,
        )));
    }

    let again = kruskal(graph);
    if again != forest {
        return Err(TestCaseError::fail("kruskal is not deterministic"));
    }
    Ok(())
}

/// Runs the Kruskal/Prim agreement property for the given fixture.
pub(super) fn run_engine_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let expected = kruskal(graph).total_weight();

    let mut covered = vec![false; graph.node_count()];
    let mut combined: Weight = 0.0;
    for (index, node) in graph.nodes().iter().enumerate() {
        if covered[index] {
            continue;
        }
        for member in component_of(graph, index) {
            covered[member] = true;
        }
        let tree = prim(graph, node)
            .map_err(|e| TestCaseError::fail(format!("prim failed from {node}: {e}")))?;
        combined += tree.total_weight();

        if tree.is_spanning() && !weights_match(tree.total_weight(), expected) {
            return Err(TestCaseError::fail(format!(
                "connected graph: prim from {node}={}, kruskal={expected} (distribution={:?})",
                tree.total_weight(),
                fixture.distribution,
            )));
        }
    }

    if !weights_match(combined, expected) {
        return Err(TestCaseError::fail(format!(
            "per-component prim total {combined} != kruskal {expected} (distribution={:?})",
            fixture.distribution,
        )));
    }
    Ok(())
}
