use crate::algorithm::dijkstra::DijkstraFactory;
use crate::algorithm::{first_negative_weight, KShortestPathAlgorithm, ShortestPathOracleFactory};
use crate::data_structures::MinQueue;
use crate::graph::{EdgeId, Graph, MaskSubgraph};
use crate::path::GraphPath;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

/// Yen's k-shortest-loopless-paths algorithm.
///
/// Enumerates *simple* s-t paths (no repeated vertex) in non-decreasing
/// order of total weight, following Yen (1971). Each accepted path seeds a
/// round of deviations: for every spur vertex on it, the vertices of the
/// preceding prefix and the deviation edges already taken by accepted paths
/// sharing that prefix are hidden behind a [`MaskSubgraph`], and a fresh
/// shortest-path oracle searches the masked view from the spur vertex to the
/// sink. Candidates collect in a priority queue; the best one not equal to
/// the last accepted path becomes the next result.
///
/// The oracle is pluggable through a [`ShortestPathOracleFactory`]; the
/// default is Dijkstra, which restricts the graph to non-negative weights
/// (checked at construction). Pass [`BellmanFordFactory`] for graphs with
/// negative weights.
///
/// On graphs with parallel edges, prefix reconstruction uses the
/// representative edge reported by [`Graph::edge_between`], so results are
/// defined only up to that choice of representative.
///
/// [`BellmanFordFactory`]: crate::algorithm::bellman_ford::BellmanFordFactory
#[derive(Debug)]
pub struct YenKShortestPaths<'a, W, G, F = DijkstraFactory> {
    graph: &'a G,
    factory: F,
    _weight: std::marker::PhantomData<W>,
}

impl<'a, W, G> YenKShortestPaths<'a, W, G, DijkstraFactory>
where
    W: Float + Zero + Debug + Copy + Ord + 'a,
    G: Graph<W>,
{
    /// Creates an engine using the default Dijkstra oracle
    pub fn new(graph: &'a G) -> Self {
        YenKShortestPaths::with_factory(graph, DijkstraFactory)
    }
}

impl<'a, W, G, F> YenKShortestPaths<'a, W, G, F>
where
    W: Float + Zero + Debug + Copy + Ord + 'a,
    G: Graph<W>,
    F: ShortestPathOracleFactory<W> + Clone,
{
    /// Creates an engine using oracles produced by `factory`
    pub fn with_factory(graph: &'a G, factory: F) -> Self {
        YenKShortestPaths {
            graph,
            factory,
            _weight: std::marker::PhantomData,
        }
    }

    /// Returns up to `k` shortest simple paths from `source` to `sink`
    pub fn paths(&self, source: usize, sink: usize, k: usize) -> Result<Vec<GraphPath<W>>> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        let mut result = Vec::new();
        for path in self.paths_iter(source, sink)?.take(k) {
            result.push(path?);
        }
        Ok(result)
    }

    /// Returns a lazy iterator over the shortest simple paths from `source`
    /// to `sink`. An unreachable sink yields an empty iterator. After an
    /// oracle error every further call yields the same error again.
    pub fn paths_iter(
        &self,
        source: usize,
        sink: usize,
    ) -> Result<YenPathsIterator<'a, W, G, F>> {
        for vertex in [source, sink] {
            if !self.graph.contains_vertex(vertex) {
                return Err(Error::VertexNotFound(vertex));
            }
        }
        if !self.factory.tolerates_negative_weights() {
            if let Some(weight) = first_negative_weight(self.graph) {
                return Err(Error::NegativeWeight(weight));
            }
        }

        let oracle = self.factory.build(self.graph);
        let mut accepted = Vec::new();
        if let Some(path) = oracle
            .path(source, sink)
            .map_err(|e| Error::Oracle(Box::new(e)))?
        {
            accepted.push(path);
        }

        Ok(YenPathsIterator {
            graph: self.graph,
            factory: self.factory.clone(),
            sink,
            accepted,
            candidates: MinQueue::new(),
            next_index: 0,
            failed: None,
        })
    }
}

impl<'a, W, G, F> KShortestPathAlgorithm<W> for YenKShortestPaths<'a, W, G, F>
where
    W: Float + Zero + Debug + Copy + Ord + 'a,
    G: Graph<W>,
    F: ShortestPathOracleFactory<W> + Clone,
{
    fn paths(&self, source: usize, sink: usize, k: usize) -> Result<Vec<GraphPath<W>>> {
        YenKShortestPaths::paths(self, source, sink, k)
    }
}

/// Lazy enumeration of simple s-t paths; see [`YenKShortestPaths`].
pub struct YenPathsIterator<'a, W, G, F>
where
    W: Ord,
{
    graph: &'a G,
    factory: F,
    sink: usize,
    /// Paths committed so far, in non-decreasing weight order
    accepted: Vec<GraphPath<W>>,
    /// Deviation candidates not yet committed
    candidates: MinQueue<GraphPath<W>, W>,
    next_index: usize,
    failed: Option<Error>,
}

impl<'a, W, G, F> YenPathsIterator<'a, W, G, F>
where
    W: Float + Zero + Debug + Copy + Ord + 'a,
    G: Graph<W>,
    F: ShortestPathOracleFactory<W>,
{
    /// Scans the last accepted path for deviations and commits the best
    /// remaining candidate, if any.
    fn extend_accepted(&mut self) -> Result<()> {
        let Some(last) = self.accepted.last().cloned() else {
            return Ok(());
        };
        let vertices = last.vertices();

        for spur_index in 0..last.len().saturating_sub(1) {
            let spur_node = vertices[spur_index];
            let root_path = &vertices[..spur_index];

            // Deviation edges already taken out of this spur vertex by any
            // accepted path sharing the root prefix.
            let mut masked_edges: HashSet<EdgeId> = HashSet::new();
            for path in &self.accepted {
                let pv = path.vertices();
                if pv.len() >= spur_index + 2 && &pv[..spur_index] == root_path {
                    if let Some(edge) = self.graph.edge_between(pv[spur_index], pv[spur_index + 1])
                    {
                        masked_edges.insert(edge);
                    }
                }
            }
            let masked_vertices: HashSet<usize> = root_path
                .iter()
                .copied()
                .filter(|&v| v != spur_node)
                .collect();

            let masked = MaskSubgraph::new(
                self.graph,
                |v| masked_vertices.contains(&v),
                |e| masked_edges.contains(&e),
            );
            let oracle = self.factory.build(&masked);
            let spur_path = oracle
                .path(spur_node, self.sink)
                .map_err(|e| Error::Oracle(Box::new(e)))?;
            let Some(spur_path) = spur_path else {
                continue;
            };
            // oracles may signal "unreachable" with an empty walk
            if spur_path.is_empty() {
                continue;
            }

            if let Some(candidate) = self.assemble(root_path, spur_node, &spur_path) {
                let weight = candidate.weight();
                self.candidates.push(candidate, weight);
            }
        }

        // Commit the cheapest candidate that does not repeat the path the
        // deviations were computed from.
        while let Some((candidate, _)) = self.candidates.pop() {
            if candidate.edges() != last.edges() {
                self.accepted.push(candidate);
                break;
            }
        }
        Ok(())
    }

    /// Joins the root prefix (through representative edges of the original
    /// graph) with the spur path found on the masked view.
    fn assemble(
        &self,
        root_path: &[usize],
        spur_node: usize,
        spur_path: &GraphPath<W>,
    ) -> Option<GraphPath<W>> {
        let mut edges = Vec::with_capacity(root_path.len() + spur_path.len());
        let mut weight = W::zero();
        let mut previous: Option<usize> = None;
        for &vertex in root_path.iter().chain(std::iter::once(&spur_node)) {
            if let Some(current) = previous {
                let edge = self.graph.edge_between(current, vertex)?;
                weight = weight + self.graph.edge_weight(edge);
                edges.push(edge);
            }
            previous = Some(vertex);
        }
        for &edge in spur_path.edges() {
            weight = weight + self.graph.edge_weight(edge);
            edges.push(edge);
        }
        let start = root_path.first().copied().unwrap_or(spur_node);
        Some(GraphPath::from_edges(self.graph, start, edges, weight))
    }
}

impl<'a, W, G, F> Iterator for YenPathsIterator<'a, W, G, F>
where
    W: Float + Zero + Debug + Copy + Ord + 'a,
    G: Graph<W>,
    F: ShortestPathOracleFactory<W>,
{
    type Item = Result<GraphPath<W>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = &self.failed {
            return Some(Err(error.clone()));
        }
        if self.next_index >= self.accepted.len() {
            if let Err(error) = self.extend_accepted() {
                self.failed = Some(error.clone());
                return Some(Err(error));
            }
        }
        if self.next_index < self.accepted.len() {
            let path = self.accepted[self.next_index].clone();
            self.next_index += 1;
            Some(Ok(path))
        } else {
            None
        }
    }
}
