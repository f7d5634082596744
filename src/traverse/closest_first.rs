use crate::data_structures::MinQueue;
use crate::graph::{EdgeId, Graph};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A traversal that settles vertices in non-decreasing distance from a root.
///
/// Each vertex is yielded at most once, together with the spanning-tree edge
/// by which it was first settled (`None` for the root) and its distance. The
/// iteration is lazy: edges are relaxed as vertices are settled, so driving
/// it partially costs only the explored region. Distances are only correct
/// for non-negative edge weights.
pub struct ClosestFirstIterator<'a, W, G>
where
    W: Ord,
{
    graph: &'a G,
    queue: MinQueue<(usize, Option<EdgeId>), W>,
    best: Vec<Option<W>>,
    settled: Vec<bool>,
}

impl<'a, W, G> ClosestFirstIterator<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Starts a traversal of `graph` from `root`
    pub fn new(graph: &'a G, root: usize) -> Self {
        let n = graph.vertex_count();
        let mut queue = MinQueue::new();
        let mut best = vec![None; n];
        if graph.contains_vertex(root) {
            best[root] = Some(W::zero());
            queue.push((root, None), W::zero());
        }
        ClosestFirstIterator {
            graph,
            queue,
            best,
            settled: vec![false; n],
        }
    }
}

impl<'a, W, G> Iterator for ClosestFirstIterator<'a, W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    type Item = (usize, Option<EdgeId>, W);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(((vertex, via), distance)) = self.queue.pop() {
            // stale queue entries are skipped rather than decreased in place
            if self.settled[vertex] {
                continue;
            }
            self.settled[vertex] = true;

            for edge in self.graph.outgoing_edges(vertex) {
                let next = self.graph.edge_target(edge);
                if self.settled[next] {
                    continue;
                }
                let candidate = distance + self.graph.edge_weight(edge);
                let improves = match self.best[next] {
                    None => true,
                    Some(current) => candidate < current,
                };
                if improves {
                    self.best[next] = Some(candidate);
                    self.queue.push((next, Some(edge)), candidate);
                }
            }
            return Some((vertex, via, distance));
        }
        None
    }
}
