use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Stable handle of an edge within a graph and every view derived from it.
///
/// Handles index an edge arena, so parallel edges and self-loops keep
/// distinct identities. A handle is only meaningful for the graph (or view
/// chain) it was obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Returns the position of this edge in the owning arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Trait representing a weighted directed multigraph.
///
/// Vertices are dense `usize` indices in `0..vertex_count()`. All adjacency
/// queries are read-only; the views in this module ([`super::EdgeReversed`],
/// [`super::MaskSubgraph`]) implement the same contract on top of a borrowed
/// graph without copying it.
pub trait Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertex slots in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn contains_vertex(&self, vertex: usize) -> bool;

    /// Returns an iterator over the vertices of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over all edges of the graph
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns the source vertex of an edge
    fn edge_source(&self, edge: EdgeId) -> usize;

    /// Returns the target vertex of an edge
    fn edge_target(&self, edge: EdgeId) -> usize;

    /// Returns the weight of an edge
    fn edge_weight(&self, edge: EdgeId) -> W;

    /// Returns an iterator over the outgoing edges of a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns an iterator over the incoming edges of a vertex
    fn incoming_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Returns one representative edge from `source` to `target`, if any.
    ///
    /// Which of several parallel edges is returned is unspecified but stable
    /// for a given graph.
    fn edge_between(&self, source: usize, target: usize) -> Option<EdgeId> {
        self.outgoing_edges(source)
            .find(|&e| self.edge_target(e) == target)
    }

    /// Returns every edge from `source` to `target`
    fn all_edges_between(&self, source: usize, target: usize) -> Vec<EdgeId> {
        self.outgoing_edges(source)
            .filter(|&e| self.edge_target(e) == target)
            .collect()
    }
}
