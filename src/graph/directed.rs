use crate::graph::traits::{EdgeId, Graph};
use num_traits::{Float, Zero};
use std::fmt::Debug;

#[derive(Debug, Clone)]
struct EdgeRecord<W> {
    source: usize,
    target: usize,
    weight: W,
}

/// A directed multigraph backed by an edge arena and adjacency lists.
///
/// Self-loops and parallel edges are permitted; every call to [`add_edge`]
/// creates a new edge with its own [`EdgeId`], even between the same pair of
/// vertices. Negative weights are accepted by the container; algorithms
/// validate their own weight preconditions.
///
/// [`add_edge`]: DirectedMultigraph::add_edge
#[derive(Debug, Clone, Default)]
pub struct DirectedMultigraph<W> {
    /// Edge arena; an `EdgeId` is a position in this vector.
    records: Vec<EdgeRecord<W>>,

    /// Outgoing edges per vertex
    outgoing: Vec<Vec<EdgeId>>,

    /// Incoming edges per vertex
    incoming: Vec<Vec<EdgeId>>,
}

impl<W> DirectedMultigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        DirectedMultigraph {
            records: Vec::new(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }
    }

    /// Creates a new graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        DirectedMultigraph {
            records: Vec::new(),
            outgoing: vec![Vec::new(); vertices],
            incoming: vec![Vec::new(); vertices],
        }
    }

    /// Adds a vertex to the graph and returns its ID
    pub fn add_vertex(&mut self) -> usize {
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        self.outgoing.len() - 1
    }

    /// Adds a directed edge and returns its ID, or `None` when either
    /// endpoint does not exist.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: W) -> Option<EdgeId> {
        if !self.contains_vertex(source) || !self.contains_vertex(target) {
            return None;
        }
        let id = EdgeId(self.records.len());
        self.records.push(EdgeRecord {
            source,
            target,
            weight,
        });
        self.outgoing[source].push(id);
        self.incoming[target].push(id);
        Some(id)
    }
}

impl<W> Graph<W> for DirectedMultigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing.len()
    }

    fn edge_count(&self) -> usize {
        self.records.len()
    }

    fn contains_vertex(&self, vertex: usize) -> bool {
        vertex < self.outgoing.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.outgoing.len())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new((0..self.records.len()).map(EdgeId))
    }

    fn edge_source(&self, edge: EdgeId) -> usize {
        self.records[edge.0].source
    }

    fn edge_target(&self, edge: EdgeId) -> usize {
        self.records[edge.0].target
    }

    fn edge_weight(&self, edge: EdgeId) -> W {
        self.records[edge.0].weight
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        match self.outgoing.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        match self.incoming.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}
