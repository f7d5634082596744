pub mod bellman_ford;
pub mod dijkstra;
pub mod eppstein;
pub mod traits;
pub mod yen;

pub use traits::{KShortestPathAlgorithm, ShortestPathOracle, ShortestPathOracleFactory};

use crate::graph::Graph;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Scans all edges and returns the first negative weight as `f64`, if any.
pub(crate) fn first_negative_weight<W, G>(graph: &G) -> Option<f64>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    for edge in graph.edges() {
        let weight = graph.edge_weight(edge);
        if weight < W::zero() {
            return Some(num_traits::cast(weight).unwrap_or(f64::NAN));
        }
    }
    None
}
