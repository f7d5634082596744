use crate::graph::traits::{EdgeId, Graph};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::marker::PhantomData;

/// An edge-reversed view of a graph.
///
/// Every edge keeps its [`EdgeId`] and weight but swaps source and target, so
/// outgoing adjacency of the view is incoming adjacency of the underlying
/// graph. The view is the preprocessing device for the Eppstein engine
/// (shortest paths *towards* the sink are shortest paths *from* it in the
/// reversed graph) and is itself a full [`Graph`], so it can be handed to any
/// algorithm in this crate.
#[derive(Debug, Clone, Copy)]
pub struct EdgeReversed<'a, W, G> {
    graph: &'a G,
    _weight: PhantomData<W>,
}

impl<'a, W, G> EdgeReversed<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Creates a reversed view over the given graph
    pub fn new(graph: &'a G) -> Self {
        EdgeReversed {
            graph,
            _weight: PhantomData,
        }
    }
}

impl<'a, W, G> Graph<W> for EdgeReversed<'a, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        self.graph.contains_vertex(vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        self.graph.vertices()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        self.graph.edges()
    }

    fn edge_source(&self, edge: EdgeId) -> usize {
        self.graph.edge_target(edge)
    }

    fn edge_target(&self, edge: EdgeId) -> usize {
        self.graph.edge_source(edge)
    }

    fn edge_weight(&self, edge: EdgeId) -> W {
        self.graph.edge_weight(edge)
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        self.graph.incoming_edges(vertex)
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        self.graph.outgoing_edges(vertex)
    }
}
