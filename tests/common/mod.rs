#![allow(dead_code)]

use kpaths::{DirectedMultigraph, EdgeId, Graph, GraphPath};
use ordered_float::OrderedFloat;

pub type Weight = OrderedFloat<f64>;
pub type TestGraph = DirectedMultigraph<Weight>;

/// Weight comparison tolerance shared by all path assertions
pub const EPSILON: f64 = 0.00000005;

pub fn graph_with_edges(vertices: usize, edges: &[(usize, usize, f64)]) -> TestGraph {
    let mut graph = DirectedMultigraph::with_vertices(vertices);
    for &(source, target, weight) in edges {
        graph
            .add_edge(source, target, OrderedFloat(weight))
            .expect("fixture endpoints exist");
    }
    graph
}

/// The graph from Eppstein's paper; the classic fixture for s = 0, t = 11.
pub fn eppstein_paper_graph() -> TestGraph {
    graph_with_edges(
        12,
        &[
            (0, 1, 2.0),
            (1, 2, 20.0),
            (2, 3, 14.0),
            (0, 4, 13.0),
            (1, 5, 27.0),
            (2, 6, 14.0),
            (3, 7, 15.0),
            (4, 5, 9.0),
            (5, 6, 10.0),
            (6, 7, 25.0),
            (4, 8, 15.0),
            (5, 9, 20.0),
            (6, 10, 12.0),
            (7, 11, 7.0),
            (8, 9, 18.0),
            (9, 10, 8.0),
            (10, 11, 11.0),
        ],
    )
}

/// Graehl's fixture: a cheap self-loop at the source in front of a fixed
/// tail, so every extra turn around the loop adds 0.05.
pub fn graehl_graph() -> TestGraph {
    graph_with_edges(6, &[(0, 0, 0.05), (0, 5, 0.35), (5, 1, 0.25)])
}

/// Three parallel edges 0 -> 1 and a single 1 -> 2
pub fn no_loop_multi_graph() -> TestGraph {
    graph_with_edges(3, &[(0, 1, 1.0), (0, 1, 2.0), (0, 1, 3.0), (1, 2, 1.0)])
}

/// One edge 0 -> 1 plus two parallel self-loops at 0
pub fn loop_multi_graph() -> TestGraph {
    graph_with_edges(2, &[(0, 1, 1.0), (0, 0, 2.0), (0, 0, 3.0)])
}

/// A heavy direct edge 0 -> 1 plus four parallel self-loops at 0
pub fn loop_multi_1000_graph() -> TestGraph {
    graph_with_edges(
        2,
        &[
            (0, 1, 1000.0),
            (0, 0, 1.0),
            (0, 0, 2.0),
            (0, 0, 3.0),
            (0, 0, 4.0),
        ],
    )
}

/// Bipartite-like sample: S = 0 reaches T = 5 through four middle vertices
/// at costs 2, 2, 3, 3, or directly at cost 1000.
pub fn complete_sample_graph() -> TestGraph {
    graph_with_edges(
        6,
        &[
            (0, 1, 1.0),
            (0, 2, 1.0),
            (1, 5, 1.0),
            (2, 5, 1.0),
            (0, 3, 2.0),
            (0, 4, 2.0),
            (3, 5, 1.0),
            (4, 5, 1.0),
            (0, 5, 1000.0),
        ],
    )
}

/// Acyclic fixture with one negative edge; three 0 -> 4 paths of weights
/// 6, 8 and 15.
pub fn negative_weight_graph() -> TestGraph {
    graph_with_edges(
        5,
        &[
            (0, 1, 4.0),
            (1, 4, 2.0),
            (0, 2, 9.0),
            (2, 4, -1.0),
            (0, 3, 12.0),
            (3, 4, 3.0),
        ],
    )
}

pub fn weights_of(paths: &[GraphPath<Weight>]) -> Vec<f64> {
    paths.iter().map(|p| p.weight().into_inner()).collect()
}

pub fn vertex_lists(paths: &[GraphPath<Weight>]) -> Vec<Vec<usize>> {
    paths.iter().map(|p| p.vertices().to_vec()).collect()
}

pub fn assert_weights_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "number of paths differ: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= EPSILON,
            "path weight mismatch at {i}: {a} vs {e}"
        );
    }
}

/// Asserts the multiset of vertex lists matches, ignoring order among ties
pub fn assert_same_vertex_lists(actual: &[GraphPath<Weight>], expected: &[&[usize]]) {
    let mut actual: Vec<Vec<usize>> = vertex_lists(actual);
    let mut expected: Vec<Vec<usize>> = expected.iter().map(|p| p.to_vec()).collect();
    actual.sort();
    expected.sort();
    assert_eq!(actual, expected);
}

/// The invariants every returned sequence must satisfy: endpoints, edge
/// connectivity, weight consistency and non-decreasing order.
pub fn assert_path_basics<G>(graph: &G, paths: &[GraphPath<Weight>], source: usize, sink: usize)
where
    G: Graph<Weight>,
{
    let mut last = f64::MIN;
    for path in paths {
        assert_eq!(path.start_vertex(), source, "path must start at the source");
        assert_eq!(path.end_vertex(), sink, "path must end at the sink");
        for pair in path.edges().windows(2) {
            assert_eq!(graph.edge_target(pair[0]), graph.edge_source(pair[1]));
        }
        let edge_sum: f64 = path
            .edges()
            .iter()
            .map(|&e| graph.edge_weight(e).into_inner())
            .sum();
        let weight = path.weight().into_inner();
        assert!(
            (edge_sum - weight).abs() <= EPSILON,
            "declared weight {weight} differs from edge sum {edge_sum}"
        );
        assert!(weight >= last, "weights must be non-decreasing");
        last = weight;
    }
}

/// Exhaustively enumerates every source-sink path of an acyclic graph
pub fn all_dag_paths(
    graph: &TestGraph,
    source: usize,
    sink: usize,
) -> Vec<(Vec<EdgeId>, f64)> {
    let mut found = Vec::new();
    let mut edges = Vec::new();
    dag_paths_from(graph, source, sink, &mut edges, 0.0, &mut found);
    found
}

fn dag_paths_from(
    graph: &TestGraph,
    current: usize,
    sink: usize,
    edges: &mut Vec<EdgeId>,
    weight: f64,
    found: &mut Vec<(Vec<EdgeId>, f64)>,
) {
    if current == sink {
        found.push((edges.clone(), weight));
        return;
    }
    for edge in graph.outgoing_edges(current) {
        edges.push(edge);
        dag_paths_from(
            graph,
            graph.edge_target(edge),
            sink,
            edges,
            weight + graph.edge_weight(edge).into_inner(),
            found,
        );
        edges.pop();
    }
}
