use crate::graph::{DirectedMultigraph, Graph};
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random weighted DAG with `n` vertices.
///
/// Edges only go from lower to higher vertex index, each present with
/// probability `edge_prob` and a weight drawn uniformly from
/// `1.0..max_weight`. Useful for cross-validating path enumeration against
/// exhaustive search: on a DAG every walk is finite.
pub fn random_dag(
    n: usize,
    edge_prob: f64,
    max_weight: f64,
    rng: &mut impl Rng,
) -> DirectedMultigraph<OrderedFloat<f64>> {
    let mut graph = DirectedMultigraph::with_vertices(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.gen_bool(edge_prob) {
                let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
                graph.add_edge(u, v, weight);
            }
        }
    }
    graph
}

/// Generates a random directed graph with `n` vertices and roughly
/// `n * avg_degree` edges, self-loops and parallel edges permitted.
pub fn random_directed(
    n: usize,
    avg_degree: usize,
    max_weight: f64,
    rng: &mut impl Rng,
) -> DirectedMultigraph<OrderedFloat<f64>> {
    let mut graph = DirectedMultigraph::with_vertices(n);
    for _ in 0..n * avg_degree {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
        graph.add_edge(source, target, weight);
    }
    debug_assert_eq!(graph.edge_count(), n * avg_degree);
    graph
}
