//! K shortest paths on directed weighted graphs.
//!
//! This library enumerates s-t paths in non-decreasing order of total weight
//! using two classic algorithms:
//!
//! * [`EppsteinKShortestPaths`]: the k shortest *walks* (repeated vertices
//!   permitted), following "Finding the k Shortest Paths" by David Eppstein
//!   (1997). After preprocessing, successive paths are produced from a
//!   best-first queue over a persistent heap of sidetrack edges.
//! * [`YenKShortestPaths`]: the k shortest *loopless* (simple) paths,
//!   following Yen (1971), parameterised over a single-source shortest-path
//!   oracle (Dijkstra by default, Bellman-Ford for graphs with negative
//!   weights).
//!
//! Both engines offer a bounded `paths(source, sink, k)` call and a lazy
//! `paths_iter(source, sink)` form. On graphs where a cycle lies on some s-t
//! walk the Eppstein iterator is infinite; callers bound it with `take`.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod path;
pub mod traverse;

pub use algorithm::bellman_ford::{BellmanFordFactory, BellmanFordShortestPath};
pub use algorithm::dijkstra::{DijkstraFactory, DijkstraShortestPath};
pub use algorithm::eppstein::EppsteinKShortestPaths;
pub use algorithm::yen::YenKShortestPaths;
pub use algorithm::{KShortestPathAlgorithm, ShortestPathOracle, ShortestPathOracleFactory};
/// Re-export main types for convenient use
pub use graph::{DirectedMultigraph, EdgeId, EdgeReversed, Graph, MaskSubgraph};
pub use path::GraphPath;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("vertex {0} is not part of the graph")]
    VertexNotFound(usize),

    #[error("the number of requested paths must be at least 1")]
    InvalidK,

    #[error("negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("negative-weight cycle reachable from vertex {0}")]
    NegativeCycle(usize),

    #[error("shortest path oracle failed: {0}")]
    Oracle(#[source] Box<Error>),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
