mod common;

use common::*;
use kpaths::graph::generators::random_dag;
use kpaths::{BellmanFordFactory, Error, YenKShortestPaths};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn paper_graph_finds_all_ten_simple_paths() {
    let graph = eppstein_paper_graph();
    let alg = YenKShortestPaths::new(&graph);
    // the fixture has exactly ten simple s-t paths; ask for more
    let paths = alg.paths(0, 11, 20).unwrap();

    assert_path_basics(&graph, &paths, 0, 11);
    assert_weights_eq(
        &weights_of(&paths),
        &[55.0, 58.0, 59.0, 61.0, 62.0, 64.0, 65.0, 68.0, 68.0, 71.0],
    );
    assert_same_vertex_lists(
        &paths,
        &[
            &[0, 4, 5, 6, 10, 11],
            &[0, 1, 2, 3, 7, 11],
            &[0, 1, 2, 6, 10, 11],
            &[0, 4, 5, 9, 10, 11],
            &[0, 1, 5, 6, 10, 11],
            &[0, 4, 5, 6, 7, 11],
            &[0, 4, 8, 9, 10, 11],
            &[0, 1, 2, 6, 7, 11],
            &[0, 1, 5, 9, 10, 11],
            &[0, 1, 5, 6, 7, 11],
        ],
    );
}

#[test]
fn paper_graph_with_bellman_ford_oracle() {
    let graph = eppstein_paper_graph();
    let alg = YenKShortestPaths::with_factory(&graph, BellmanFordFactory);
    let paths = alg.paths(0, 11, 20).unwrap();

    assert_path_basics(&graph, &paths, 0, 11);
    assert_weights_eq(
        &weights_of(&paths),
        &[55.0, 58.0, 59.0, 61.0, 62.0, 64.0, 65.0, 68.0, 68.0, 71.0],
    );
}

#[test]
fn bipartite_sample_graph() {
    let graph = complete_sample_graph();
    let alg = YenKShortestPaths::new(&graph);
    let paths = alg.paths(0, 5, 5).unwrap();

    assert_path_basics(&graph, &paths, 0, 5);
    assert_weights_eq(&weights_of(&paths), &[2.0, 2.0, 3.0, 3.0, 1000.0]);
    assert!(paths.iter().all(|p| p.is_simple()));
}

#[test]
fn cyclic_graph_returns_only_simple_paths() {
    // 1 -> 2 -> 1 is a cycle on the way to the sink
    let graph = graph_with_edges(
        4,
        &[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (2, 1, 1.0),
            (1, 3, 5.0),
            (0, 3, 10.0),
        ],
    );
    let alg = YenKShortestPaths::new(&graph);
    let paths = alg.paths(0, 3, 10).unwrap();

    assert_path_basics(&graph, &paths, 0, 3);
    assert_weights_eq(&weights_of(&paths), &[3.0, 6.0, 10.0]);
    assert!(paths.iter().all(|p| p.is_simple()));
}

#[test]
fn bellman_ford_handles_negative_weights() {
    let graph = negative_weight_graph();
    let alg = YenKShortestPaths::with_factory(&graph, BellmanFordFactory);
    let paths = alg.paths(0, 4, 10).unwrap();

    assert_path_basics(&graph, &paths, 0, 4);
    assert_weights_eq(&weights_of(&paths), &[6.0, 8.0, 15.0]);
    assert!(paths.iter().all(|p| p.is_simple()));
}

#[test]
fn dijkstra_oracle_rejects_negative_weights() {
    let graph = negative_weight_graph();
    let alg = YenKShortestPaths::new(&graph);
    match alg.paths(0, 4, 10) {
        Err(Error::NegativeWeight(w)) => assert_eq!(w, -1.0),
        other => panic!("expected NegativeWeight, got {other:?}"),
    }
}

#[test]
fn unreachable_sink_yields_nothing() {
    let graph = graph_with_edges(3, &[(0, 1, 1.0)]);
    let alg = YenKShortestPaths::new(&graph);
    assert!(alg.paths(0, 2, 5).unwrap().is_empty());
    assert!(alg.paths_iter(2, 0).unwrap().next().is_none());
}

#[test]
fn source_equal_to_sink_returns_the_empty_walk() {
    let graph = graph_with_edges(3, &[(0, 1, 1.0), (1, 0, 1.0)]);
    let alg = YenKShortestPaths::new(&graph);
    let paths = alg.paths(0, 0, 5).unwrap();

    assert_eq!(paths.len(), 1);
    assert!(paths[0].is_empty());
    assert_eq!(paths[0].weight().into_inner(), 0.0);
}

#[test]
fn invalid_inputs_are_rejected() {
    let graph = graph_with_edges(2, &[(0, 1, 1.0)]);
    let alg = YenKShortestPaths::new(&graph);
    assert_eq!(alg.paths(0, 1, 0).unwrap_err(), Error::InvalidK);
    assert!(matches!(
        alg.paths_iter(5, 1),
        Err(Error::VertexNotFound(5))
    ));
}

#[test]
fn random_dag_paths_are_sound() {
    let mut rng = StdRng::seed_from_u64(11);
    for round in 0..20 {
        let graph = random_dag(8, 0.4, 10.0, &mut rng);
        let reference = all_dag_paths(&graph, 0, 7);

        let alg = YenKShortestPaths::new(&graph);
        let paths = alg.paths(0, 7, 10).unwrap();

        assert_path_basics(&graph, &paths, 0, 7);
        assert!(paths.iter().all(|p| p.is_simple()), "round {round}");

        // every produced path exists in the exhaustive enumeration
        for path in &paths {
            assert!(
                reference.iter().any(|(edges, _)| edges == path.edges()),
                "round {round}: unknown path {:?}",
                path.vertices()
            );
        }
        // edge lists are pairwise distinct
        for (i, a) in paths.iter().enumerate() {
            for b in &paths[i + 1..] {
                assert_ne!(a.edges(), b.edges(), "round {round}: duplicate path");
            }
        }
        // the cheapest path is found whenever one exists
        if let Some(best) = reference
            .iter()
            .map(|(_, w)| *w)
            .min_by(|a, b| a.partial_cmp(b).unwrap())
        {
            assert!((weights_of(&paths)[0] - best).abs() <= EPSILON, "round {round}");
        } else {
            assert!(paths.is_empty(), "round {round}");
        }
    }
}
