//! Shared test utilities for `wayfinder-core`.
//!
//! Hosts the proptest configuration used by every property suite and the
//! seeded graph generators that feed them.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wayfinder_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{Graph, GraphBuilder, Weight};

/// Builds a standard proptest configuration from the shared CI profile.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WeightDistribution {
    /// Continuous weights, so ties are practically absent.
    Unique,
    /// A pool of one to three integral weights shared by every edge.
    ManyIdentical,
    /// Random spanning path plus a handful of extra edges.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Two to three components with no edges between them.
    Disconnected,
}

impl Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            1 => Just(Self::Unique),
            2 => Just(Self::ManyIdentical),
            1 => Just(Self::Sparse),
            1 => Just(Self::Dense),
            1 => Just(Self::Disconnected),
        ]
        .boxed()
    }
}

/// Generated graph plus the parameters that produced it.
#[derive(Clone, Debug)]
pub(crate) struct GraphFixture {
    pub(crate) graph: Graph,
    pub(crate) distribution: WeightDistribution,
}

/// Smallest generated node count.
const MIN_NODES: usize = 2;
/// Largest generated node count. Brute-force oracles enumerate simple paths,
/// so this stays small.
const MAX_NODES: usize = 7;

/// Generates fixtures covering every weight distribution.
pub(crate) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution.
pub(crate) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    let pairs = match distribution {
        WeightDistribution::Unique => {
            probabilistic_pairs(rng, (0.3, 0.7), |r| r.gen_range(0.1..100.0))
        }
        WeightDistribution::ManyIdentical => {
            let pool_size = rng.gen_range(1..=3);
            let pool: Vec<Weight> = (0..pool_size)
                .map(|_| Weight::from(rng.gen_range(1_u8..=10)))
                .collect();
            probabilistic_pairs(rng, (0.3, 0.8), move |r| pool[r.gen_range(0..pool.len())])
        }
        WeightDistribution::Sparse => sparse_pairs(rng),
        WeightDistribution::Dense => {
            probabilistic_pairs(rng, (0.75, 1.0), |r| r.gen_range(0.1..100.0))
        }
        WeightDistribution::Disconnected => disconnected_pairs(rng),
    };
    GraphFixture {
        graph: assemble(pairs.node_count, &pairs.edges),
        distribution,
    }
}

/// Label used for generated node `index`.
pub(crate) fn label(index: usize) -> String {
    format!("n{index}")
}

struct GeneratedPairs {
    node_count: usize,
    edges: Vec<(usize, usize, Weight)>,
}

fn assemble(node_count: usize, edges: &[(usize, usize, Weight)]) -> Graph {
    let mut builder = GraphBuilder::new().with_nodes((0..node_count).map(label));
    for &(left, right, weight) in edges {
        builder.add_edge(label(left), label(right), weight);
    }
    builder.build().expect("generated graphs are valid")
}

fn probabilistic_pairs(
    rng: &mut SmallRng,
    edge_prob_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) -> GeneratedPairs {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let probability = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push(oriented(rng, i, j, w));
            }
        }
    }
    GeneratedPairs { node_count, edges }
}

fn sparse_pairs(rng: &mut SmallRng) -> GeneratedPairs {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);

    let mut edges = Vec::new();
    let mut present = std::collections::HashSet::new();
    for window in order.windows(2) {
        let w = rng.gen_range(0.1..100.0);
        present.insert(canonical(window[0], window[1]));
        edges.push(oriented(rng, window[0], window[1], w));
    }
    for _ in 0..(node_count / 2) {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);
        if i != j && present.insert(canonical(i, j)) {
            let w = rng.gen_range(0.1..100.0);
            edges.push(oriented(rng, i, j, w));
        }
    }
    GeneratedPairs { node_count, edges }
}

fn disconnected_pairs(rng: &mut SmallRng) -> GeneratedPairs {
    let component_count = rng.gen_range(2..=3);
    let mut node_count = 0;
    let mut edges = Vec::new();
    for _ in 0..component_count {
        let size = rng.gen_range(1..=3);
        let offset = node_count;
        for i in 0..size {
            for j in (i + 1)..size {
                if rng.gen_bool(0.8) {
                    let w = Weight::from(rng.gen_range(1_u8..=20));
                    edges.push(oriented(rng, offset + i, offset + j, w));
                }
            }
        }
        node_count += size;
    }
    GeneratedPairs { node_count, edges }
}

fn oriented(rng: &mut SmallRng, i: usize, j: usize, weight: Weight) -> (usize, usize, Weight) {
    if rng.gen_bool(0.5) {
        (i, j, weight)
    } else {
        (j, i, weight)
    }
}

const fn canonical(i: usize, j: usize) -> (usize, usize) {
    if i <= j { (i, j) } else { (j, i) }
}

fn shuffle(values: &mut [usize], rng: &mut SmallRng) {
    for i in (1..values.len()).rev() {
        let j = rng.gen_range(0..=i);
        values.swap(i, j);
    }
}

/// Counts connected components with a plain breadth-first search.
pub(crate) fn count_components(graph: &Graph) -> usize {
    let mut seen = vec![false; graph.node_count()];
    let mut components = 0;
    for start in 0..graph.node_count() {
        if seen[start] {
            continue;
        }
        components += 1;
        seen[start] = true;
        let mut queue = std::collections::VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            for &(neighbour, _) in graph.adjacent(node) {
                if !seen[neighbour] {
                    seen[neighbour] = true;
                    queue.push_back(neighbour);
                }
            }
        }
    }
    components
}

/// Returns the indices of the nodes sharing a component with `start`.
pub(crate) fn component_of(graph: &Graph, start: usize) -> Vec<usize> {
    let mut seen = vec![false; graph.node_count()];
    seen[start] = true;
    let mut stack = vec![start];
    let mut members = Vec::new();
    while let Some(node) = stack.pop() {
        members.push(node);
        for &(neighbour, _) in graph.adjacent(node) {
            if !seen[neighbour] {
                seen[neighbour] = true;
                stack.push(neighbour);
            }
        }
    }
    members.sort_unstable();
    members
}
