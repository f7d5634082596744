use crate::algorithm::{ShortestPathOracle, ShortestPathOracleFactory};
use crate::graph::{EdgeId, Graph};
use crate::path::GraphPath;
use crate::traverse::ClosestFirstIterator;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::marker::PhantomData;

/// Dijkstra's algorithm as a point-to-point shortest-path oracle.
///
/// Each query drives a [`ClosestFirstIterator`] from the source and stops as
/// soon as the sink settles, so only the region closer than the sink is
/// explored. Requires non-negative edge weights.
#[derive(Debug)]
pub struct DijkstraShortestPath<'a, W, G> {
    graph: &'a G,
    _weight: PhantomData<W>,
}

impl<'a, W, G> DijkstraShortestPath<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Creates an oracle bound to the given graph
    pub fn new(graph: &'a G) -> Self {
        DijkstraShortestPath {
            graph,
            _weight: PhantomData,
        }
    }
}

impl<'a, W, G> ShortestPathOracle<W> for DijkstraShortestPath<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn path(&self, source: usize, sink: usize) -> Result<Option<GraphPath<W>>> {
        if !self.graph.contains_vertex(source) || !self.graph.contains_vertex(sink) {
            return Ok(None);
        }

        let mut parent: Vec<Option<EdgeId>> = vec![None; self.graph.vertex_count()];
        for (vertex, via, distance) in ClosestFirstIterator::new(self.graph, source) {
            parent[vertex] = via;
            if vertex == sink {
                let edges = collect_parent_chain(self.graph, &parent, source, sink);
                return Ok(Some(GraphPath::from_edges(
                    self.graph, source, edges, distance,
                )));
            }
        }
        Ok(None)
    }
}

/// Walks the spanning-tree edges from `sink` back to `source` and returns
/// them in forward order.
fn collect_parent_chain<W, G>(
    graph: &G,
    parent: &[Option<EdgeId>],
    source: usize,
    sink: usize,
) -> Vec<EdgeId>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    let mut edges = Vec::new();
    let mut current = sink;
    while current != source {
        match parent[current] {
            Some(edge) => {
                edges.push(edge);
                current = graph.edge_source(edge);
            }
            None => break,
        }
    }
    edges.reverse();
    edges
}

/// Factory producing [`DijkstraShortestPath`] oracles. The default choice
/// for Yen's algorithm.
#[derive(Debug, Clone, Copy, Default)]
pub struct DijkstraFactory;

impl<W> ShortestPathOracleFactory<W> for DijkstraFactory
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn build<'g, G>(&self, graph: &'g G) -> Box<dyn ShortestPathOracle<W> + 'g>
    where
        G: Graph<W> + 'g,
        W: 'g,
    {
        Box::new(DijkstraShortestPath::new(graph))
    }
}
