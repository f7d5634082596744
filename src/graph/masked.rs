use crate::graph::traits::{EdgeId, Graph};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::marker::PhantomData;

/// A read-only view that hides predicate-selected vertices and edges.
///
/// An element is visible when its predicate returns `false`. Hiding a vertex
/// also hides every edge incident to it. Nothing is copied; the predicates
/// run on each adjacency query, and the vertex index space of the underlying
/// graph is preserved so distance tables stay directly indexable.
///
/// Yen's deviation loop builds one of these per spur search to exclude the
/// root-path vertices and the already-taken deviation edges.
#[derive(Debug, Clone)]
pub struct MaskSubgraph<'a, W, G, VM, EM> {
    graph: &'a G,
    vertex_mask: VM,
    edge_mask: EM,
    _weight: PhantomData<W>,
}

impl<'a, W, G, VM, EM> MaskSubgraph<'a, W, G, VM, EM>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    VM: Fn(usize) -> bool,
    EM: Fn(EdgeId) -> bool,
{
    /// Creates a view over `graph` hiding vertices and edges matching the
    /// given predicates.
    pub fn new(graph: &'a G, vertex_mask: VM, edge_mask: EM) -> Self {
        MaskSubgraph {
            graph,
            vertex_mask,
            edge_mask,
            _weight: PhantomData,
        }
    }

    fn edge_visible(&self, edge: EdgeId) -> bool {
        !(self.edge_mask)(edge)
            && !(self.vertex_mask)(self.graph.edge_source(edge))
            && !(self.vertex_mask)(self.graph.edge_target(edge))
    }
}

impl<'a, W, G, VM, EM> Graph<W> for MaskSubgraph<'a, W, G, VM, EM>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
    VM: Fn(usize) -> bool,
    EM: Fn(EdgeId) -> bool,
{
    fn vertex_count(&self) -> usize {
        // index space of the underlying graph, masked slots included
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        self.graph.contains_vertex(vertex) && !(self.vertex_mask)(vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.graph.vertices().filter(|&v| !(self.vertex_mask)(v)))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new(self.graph.edges().filter(|&e| self.edge_visible(e)))
    }

    fn edge_source(&self, edge: EdgeId) -> usize {
        self.graph.edge_source(edge)
    }

    fn edge_target(&self, edge: EdgeId) -> usize {
        self.graph.edge_target(edge)
    }

    fn edge_weight(&self, edge: EdgeId) -> W {
        self.graph.edge_weight(edge)
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        if (self.vertex_mask)(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.graph
                .outgoing_edges(vertex)
                .filter(|&e| self.edge_visible(e)),
        )
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        if (self.vertex_mask)(vertex) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.graph
                .incoming_edges(vertex)
                .filter(|&e| self.edge_visible(e)),
        )
    }
}
