use crate::graph::Graph;
use crate::path::GraphPath;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait for k-shortest-path algorithms.
///
/// Paths are returned in non-decreasing order of total weight. The order
/// among paths of equal weight is deterministic but not part of the
/// contract.
pub trait KShortestPathAlgorithm<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns up to `k` shortest paths from `source` to `sink`, fewer when
    /// the graph does not contain that many. An unreachable sink yields an
    /// empty vector, not an error.
    fn paths(&self, source: usize, sink: usize, k: usize) -> Result<Vec<GraphPath<W>>>;
}

/// A single-source shortest-path oracle bound to one graph.
pub trait ShortestPathOracle<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns a shortest path from `source` to `sink`, or `None` when the
    /// sink is unreachable.
    fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>>;
}

/// Factory producing a shortest-path oracle for a given graph.
///
/// Yen's algorithm calls this once per spur search, handing in a masked
/// subgraph view; the returned oracle must honour the view it was built on.
pub trait ShortestPathOracleFactory<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds an oracle bound to `graph`
    fn build<'g, G>(&self, graph: &'g G) -> Box<dyn ShortestPathOracle<W> + 'g>
    where
        G: Graph<W> + 'g,
        W: 'g;

    /// Whether the produced oracles accept negative edge weights.
    ///
    /// When false, consumers reject graphs with negative weights up front
    /// instead of letting the oracle silently return wrong distances.
    fn tolerates_negative_weights(&self) -> bool {
        false
    }
}
