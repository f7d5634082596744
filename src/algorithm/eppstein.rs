use crate::algorithm::{first_negative_weight, KShortestPathAlgorithm};
use crate::data_structures::{MinQueue, OutHeap, SidetrackNode};
use crate::graph::{EdgeId, EdgeReversed, Graph};
use crate::path::GraphPath;
use crate::traverse::ClosestFirstIterator;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::rc::Rc;

/// Eppstein's k-shortest-paths algorithm.
///
/// Enumerates s-t *walks* (repeated vertices and edges permitted) in
/// non-decreasing order of total weight, following "Finding the k Shortest
/// Paths" (Eppstein, 1997). Preprocessing builds a reverse shortest-path
/// tree from the sink, assigns every off-tree edge its sidetrack cost (the
/// detour penalty `w(e) + d(target(e)) - d(source(e))`) and folds the
/// per-vertex sidetrack heaps into one persistent, structurally shared heap
/// per vertex. Enumeration then walks that heap best-first: every path
/// corresponds to a set of sidetracks grafted onto the shortest path.
///
/// When a cycle lies on some s-t walk, [`paths_iter`] is infinite; bound it
/// with `take`. Edge weights must be non-negative, which is checked at
/// construction.
///
/// [`paths_iter`]: EppsteinKShortestPaths::paths_iter
#[derive(Debug)]
pub struct EppsteinKShortestPaths<'a, W, G> {
    graph: &'a G,
    _weight: std::marker::PhantomData<W>,
}

impl<'a, W, G> EppsteinKShortestPaths<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Creates an engine for the given graph, rejecting negative weights
    pub fn new(graph: &'a G) -> Result<Self> {
        if let Some(weight) = first_negative_weight(graph) {
            return Err(Error::NegativeWeight(weight));
        }
        Ok(EppsteinKShortestPaths {
            graph,
            _weight: std::marker::PhantomData,
        })
    }

    /// Returns up to `k` shortest walks from `source` to `sink`
    pub fn paths(&self, source: usize, sink: usize, k: usize) -> Result<Vec<GraphPath<W>>> {
        if k == 0 {
            return Err(Error::InvalidK);
        }
        Ok(self.paths_iter(source, sink)?.take(k).collect())
    }

    /// Returns a lazy iterator over the shortest walks from `source` to
    /// `sink`, possibly infinite. An unreachable sink yields an empty
    /// iterator. When `source == sink` the first result is the empty walk
    /// of weight zero.
    pub fn paths_iter(&self, source: usize, sink: usize) -> Result<EppsteinPathsIterator<'a, W, G>> {
        for vertex in [source, sink] {
            if !self.graph.contains_vertex(vertex) {
                return Err(Error::VertexNotFound(vertex));
            }
        }
        let index = SidetrackIndex::build(self.graph, source, sink);
        let mut queue = MinQueue::new();
        if let Some(initial) = index.initial() {
            let cost = initial.cost();
            queue.push(initial, cost);
        }
        Ok(EppsteinPathsIterator { index, queue })
    }
}

impl<'a, W, G> KShortestPathAlgorithm<W> for EppsteinKShortestPaths<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn paths(&self, source: usize, sink: usize, k: usize) -> Result<Vec<GraphPath<W>>> {
        EppsteinKShortestPaths::paths(self, source, sink, k)
    }
}

/// The preprocessing products: reverse shortest-path tree, sidetrack costs
/// and the persistent per-vertex sidetrack heaps.
#[derive(Debug)]
struct SidetrackIndex<'a, W, G> {
    graph: &'a G,
    source: usize,
    /// Shortest distance from each vertex to the sink; `None` when the sink
    /// is unreachable from it.
    distance: Vec<Option<W>>,
    /// First edge of the shortest path towards the sink; `None` for the sink
    /// itself and for vertices that do not reach it.
    tree_edge: Vec<Option<EdgeId>>,
    /// Heap of all sidetracks reachable on the way to the sink, per vertex
    heaps: Vec<Option<Rc<SidetrackNode<W>>>>,
}

impl<'a, W, G> SidetrackIndex<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn build(graph: &'a G, source: usize, sink: usize) -> Self {
        let n = graph.vertex_count();
        let mut distance: Vec<Option<W>> = vec![None; n];
        let mut tree_edge: Vec<Option<EdgeId>> = vec![None; n];
        let mut settle_order = Vec::new();

        // Shortest paths towards the sink are shortest paths from it in the
        // edge-reversed graph. The spanning edge that settles a vertex is,
        // read in the original orientation, its first edge towards the sink.
        let reversed = EdgeReversed::new(graph);
        for (vertex, via, dist) in ClosestFirstIterator::new(&reversed, sink) {
            distance[vertex] = Some(dist);
            tree_edge[vertex] = via;
            settle_order.push(vertex);
        }

        let mut heaps: Vec<Option<Rc<SidetrackNode<W>>>> = vec![None; n];
        if distance[source].is_some() {
            // Parents settle before their tree children, so one pass in
            // settle order always finds the next vertex's heap ready.
            for &vertex in &settle_order {
                let Some(own_distance) = distance[vertex] else {
                    continue;
                };
                let mut out = OutHeap::new();
                for edge in graph.outgoing_edges(vertex) {
                    if tree_edge[vertex] == Some(edge) {
                        continue;
                    }
                    let Some(target_distance) = distance[graph.edge_target(edge)] else {
                        continue;
                    };
                    let cost = graph.edge_weight(edge) + target_distance - own_distance;
                    out.add(edge, cost);
                }

                let inherited = match tree_edge[vertex] {
                    Some(edge) => heaps[graph.edge_target(edge)].clone(),
                    None => None,
                };
                heaps[vertex] = match out.into_parts() {
                    None => inherited,
                    Some((root, rest)) => Some(match &inherited {
                        None => SidetrackNode::from_sidetracks(root, &rest),
                        Some(base) => SidetrackNode::insert_sidetracks(base, root, &rest),
                    }),
                };
            }
        }

        SidetrackIndex {
            graph,
            source,
            distance,
            tree_edge,
            heaps,
        }
    }

    /// Appends the shortest-path edges from `from` to the sink
    fn shortest_chain(&self, mut from: usize, edges: &mut Vec<EdgeId>) {
        while let Some(edge) = self.tree_edge[from] {
            edges.push(edge);
            from = self.graph.edge_target(edge);
        }
    }

    /// The token for the plain shortest path, or `None` when the sink is
    /// unreachable from the source.
    fn initial(&self) -> Option<Rc<PathToken<W>>> {
        let cost = self.distance[self.source]?;
        let mut edges = Vec::new();
        self.shortest_chain(self.source, &mut edges);
        Some(Rc::new(PathToken::Initial { edges, cost }))
    }

    /// The token taking the sidetrack of `node` on top of `base`.
    ///
    /// The walk keeps the base walk up to the *last* visit of the sidetrack's
    /// source, takes the sidetrack, then follows the shortest path from its
    /// target to the sink.
    fn derived(&self, node: &Rc<SidetrackNode<W>>, base: &Rc<PathToken<W>>) -> Rc<PathToken<W>> {
        let (sidetrack, detour_cost) = node.sidetrack;
        let branch = self.graph.edge_source(sidetrack);
        let base_edges = base.edges();
        let keep = base_edges
            .iter()
            .rposition(|&e| self.graph.edge_source(e) == branch)
            .unwrap_or(0);

        let mut edges = Vec::with_capacity(keep + 1);
        edges.extend_from_slice(&base_edges[..keep]);
        edges.push(sidetrack);
        self.shortest_chain(self.graph.edge_target(sidetrack), &mut edges);

        Rc::new(PathToken::Derived {
            node: Rc::clone(node),
            base: Rc::clone(base),
            edges,
            cost: base.cost() + detour_cost,
        })
    }

    /// Pushes the successor tokens of a freshly popped token.
    ///
    /// Heap children and the `rest` subtree are alternative sidetracks for
    /// the same base walk; the cross edge into the heap of the sidetrack's
    /// target extends the popped walk itself.
    fn push_successors(
        &self,
        token: &Rc<PathToken<W>>,
        queue: &mut MinQueue<Rc<PathToken<W>>, W>,
    ) {
        match &**token {
            PathToken::Initial { .. } => {
                if let Some(root) = &self.heaps[self.source] {
                    self.push_derived(root, token, queue);
                }
            }
            PathToken::Derived { node, base, .. } => {
                for child in [&node.left, &node.right, &node.rest].into_iter().flatten() {
                    self.push_derived(child, base, queue);
                }
                let crossing = self.graph.edge_target(node.sidetrack.0);
                if let Some(root) = &self.heaps[crossing] {
                    self.push_derived(root, token, queue);
                }
            }
        }
    }

    fn push_derived(
        &self,
        node: &Rc<SidetrackNode<W>>,
        base: &Rc<PathToken<W>>,
        queue: &mut MinQueue<Rc<PathToken<W>>, W>,
    ) {
        let token = self.derived(node, base);
        let cost = token.cost();
        queue.push(token, cost);
    }

    fn materialize(&self, token: &PathToken<W>) -> GraphPath<W> {
        GraphPath::from_edges(self.graph, self.source, token.edges().to_vec(), token.cost())
    }
}

/// A path in sidetrack representation: either the shortest path itself or a
/// sidetrack from a heap node grafted onto a base token.
#[derive(Debug)]
enum PathToken<W> {
    Initial {
        edges: Vec<EdgeId>,
        cost: W,
    },
    Derived {
        node: Rc<SidetrackNode<W>>,
        base: Rc<PathToken<W>>,
        edges: Vec<EdgeId>,
        cost: W,
    },
}

impl<W: Copy> PathToken<W> {
    fn cost(&self) -> W {
        match self {
            PathToken::Initial { cost, .. } => *cost,
            PathToken::Derived { cost, .. } => *cost,
        }
    }

    fn edges(&self) -> &[EdgeId] {
        match self {
            PathToken::Initial { edges, .. } => edges,
            PathToken::Derived { edges, .. } => edges,
        }
    }
}

/// Lazy best-first enumeration of s-t walks; see [`EppsteinKShortestPaths`].
#[derive(Debug)]
pub struct EppsteinPathsIterator<'a, W, G>
where
    W: Ord,
{
    index: SidetrackIndex<'a, W, G>,
    queue: MinQueue<Rc<PathToken<W>>, W>,
}

impl<'a, W, G> Iterator for EppsteinPathsIterator<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    type Item = GraphPath<W>;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, _) = self.queue.pop()?;
        self.index.push_successors(&token, &mut self.queue);
        Some(self.index.materialize(&token))
    }
}
