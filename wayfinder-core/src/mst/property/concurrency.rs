//! Concurrent runs over a shared graph.
//!
//! Several scoped threads run both engines against the same borrowed graph;
//! every result must equal the sequential baseline exactly.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::test_utils::GraphFixture;
use crate::{SpanningForest, kruskal, prim};

const THREADS: usize = 4;

/// Runs the concurrency safety property for the given fixture.
pub(super) fn run_concurrency_safety_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = &fixture.graph;
    let Some(start) = graph.nodes().first() else {
        return Ok(());
    };
    let baseline_kruskal = kruskal(graph);
    let baseline_prim = prim(graph, start)
        .map_err(|e| TestCaseError::fail(format!("baseline prim failed: {e}")))?;

    let outcomes: Vec<(SpanningForest, Result<SpanningForest, String>)> =
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(move || {
                        (
                            kruskal(graph),
                            prim(graph, start).map_err(|e| e.to_string()),
                        )
                    })
                })
                .collect();
            handles
                .into_iter()
                .filter_map(|handle| handle.join().ok())
                .collect()
        });

    if outcomes.len() != THREADS {
        return Err(TestCaseError::fail("a worker thread panicked"));
    }
    for (run, (forest, tree)) in outcomes.into_iter().enumerate() {
        if forest != baseline_kruskal {
            return Err(TestCaseError::fail(format!(
                "run {run}: kruskal diverged (distribution={:?})",
                fixture.distribution,
            )));
        }
        let tree = tree.map_err(|e| TestCaseError::fail(format!("run {run}: prim failed: {e}")))?;
        if tree != baseline_prim {
            return Err(TestCaseError::fail(format!(
                "run {run}: prim diverged (distribution={:?})",
                fixture.distribution,
            )));
        }
    }
    Ok(())
}
