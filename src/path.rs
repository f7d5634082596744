use crate::graph::{EdgeId, Graph};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A walk through a graph: an ordered edge sequence with its endpoints and
/// total weight.
///
/// Consecutive edges are connected (the target of each edge is the source of
/// the next). A path may be empty, in which case it is the zero-weight walk
/// at a single vertex. The vertex sequence is stored alongside the edges so a
/// path stays usable without a borrow of the graph it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphPath<W> {
    vertices: Vec<usize>,
    edges: Vec<EdgeId>,
    weight: W,
}

impl<W> GraphPath<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates the empty walk at `vertex` with weight zero
    pub fn empty_at(vertex: usize) -> Self {
        GraphPath {
            vertices: vec![vertex],
            edges: Vec::new(),
            weight: W::zero(),
        }
    }

    /// Creates a path from an edge sequence starting at `start`.
    ///
    /// The vertex sequence is resolved against `graph`; `weight` is taken as
    /// given (engines track it incrementally). Edge connectivity is checked
    /// in debug builds only.
    pub fn from_edges<G>(graph: &G, start: usize, edges: Vec<EdgeId>, weight: W) -> Self
    where
        G: Graph<W>,
    {
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(start);
        for &e in &edges {
            debug_assert_eq!(graph.edge_source(e), *vertices.last().unwrap());
            vertices.push(graph.edge_target(e));
        }
        GraphPath {
            vertices,
            edges,
            weight,
        }
    }

    /// Returns the first vertex of the walk
    pub fn start_vertex(&self) -> usize {
        self.vertices[0]
    }

    /// Returns the last vertex of the walk
    pub fn end_vertex(&self) -> usize {
        *self.vertices.last().unwrap()
    }

    /// Returns the total weight of the walk
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns the edge sequence
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the vertex sequence; always one longer than the edge sequence
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Returns the number of edges in the walk
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true for the empty walk
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true when no vertex occurs twice
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|v| seen.insert(v))
    }
}
