use crate::algorithm::{ShortestPathOracle, ShortestPathOracleFactory};
use crate::graph::{EdgeId, Graph};
use crate::path::GraphPath;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::marker::PhantomData;

/// The Bellman-Ford algorithm as a point-to-point shortest-path oracle.
///
/// Relaxes every edge in rounds until a fixpoint, so negative edge weights
/// are supported. A relaxation that still succeeds after `n - 1` rounds
/// proves a negative-weight cycle and is reported as
/// [`Error::NegativeCycle`].
#[derive(Debug)]
pub struct BellmanFordShortestPath<'a, W, G> {
    graph: &'a G,
    _weight: PhantomData<W>,
}

impl<'a, W, G> BellmanFordShortestPath<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Creates an oracle bound to the given graph
    pub fn new(graph: &'a G) -> Self {
        BellmanFordShortestPath {
            graph,
            _weight: PhantomData,
        }
    }
}

impl<'a, W, G> ShortestPathOracle<W> for BellmanFordShortestPath<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>> {
        if !self.graph.contains_vertex(source) || !self.graph.contains_vertex(sink) {
            return Ok(None);
        }

        let n = self.graph.vertex_count();
        let mut distance: Vec<Option<W>> = vec![None; n];
        let mut parent: Vec<Option<EdgeId>> = vec![None; n];
        distance[source] = Some(W::zero());

        // n rounds: the last one only probes for a negative cycle
        for round in 0..n {
            let mut changed = false;
            for edge in self.graph.edges() {
                let from = self.graph.edge_source(edge);
                let Some(from_distance) = distance[from] else {
                    continue;
                };
                let to = self.graph.edge_target(edge);
                let candidate = from_distance + self.graph.edge_weight(edge);
                let improves = match distance[to] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    if round + 1 == n {
                        return Err(Error::NegativeCycle(to));
                    }
                    distance[to] = Some(candidate);
                    parent[to] = Some(edge);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        let Some(weight) = distance[sink] else {
            return Ok(None);
        };
        let mut edges = Vec::new();
        let mut current = sink;
        while current != source {
            match parent[current] {
                Some(edge) => {
                    edges.push(edge);
                    current = self.graph.edge_source(edge);
                }
                None => break,
            }
        }
        edges.reverse();
        Ok(Some(GraphPath::from_edges(self.graph, source, edges, weight)))
    }
}

/// Factory producing [`BellmanFordShortestPath`] oracles; the oracle of
/// choice for Yen's algorithm on graphs with negative edge weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordFactory;

impl<W> ShortestPathOracleFactory<W> for BellmanFordFactory
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn build<'g, G>(&self, graph: &'g G) -> Box<dyn ShortestPathOracle<W> + 'g>
    where
        G: Graph<W> + 'g,
        W: 'g,
    {
        Box::new(BellmanFordShortestPath::new(graph))
    }

    fn tolerates_negative_weights(&self) -> bool {
        true
    }
}
