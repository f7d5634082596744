use crate::graph::EdgeId;
use std::rc::Rc;

/// A node of the persistent heap of sidetrack edges.
///
/// Each node carries one sidetrack `(edge, cost)` pair and is heap-ordered on
/// cost against its `left`/`right` children. `rest` hangs the balanced
/// subtree of the owning vertex's non-best sidetracks off the node; it does
/// not take part in heap insertion. Nodes are immutable after creation and
/// shared by `Rc`: the heap of a vertex is derived from the heap of the next
/// vertex on its shortest path by copying only the insertion spine, so the
/// heaps of all vertices together stay linear in total size.
///
/// `size` counts the nodes of the left/right lattice below (and including)
/// a node and steers insertion towards the lighter child.
#[derive(Debug)]
pub struct SidetrackNode<W> {
    pub sidetrack: (EdgeId, W),
    pub left: Option<Rc<SidetrackNode<W>>>,
    pub right: Option<Rc<SidetrackNode<W>>>,
    pub rest: Option<Rc<SidetrackNode<W>>>,
    pub size: usize,
}

impl<W> SidetrackNode<W>
where
    W: Ord + Copy,
{
    /// Builds the heap of a single vertex from its sidetracks: the root
    /// entry on top, the sorted remainder as the `rest` subtree.
    pub fn from_sidetracks(
        root: (EdgeId, W),
        sorted_rest: &[(EdgeId, W)],
    ) -> Rc<SidetrackNode<W>> {
        Rc::new(SidetrackNode {
            sidetrack: root,
            left: None,
            right: None,
            rest: Self::balanced(sorted_rest),
            size: 1,
        })
    }

    /// Builds a heap-ordered tree of deterministic shape from entries sorted
    /// by ascending cost: the first entry is the root, the first half of the
    /// remainder goes left, the second half right.
    fn balanced(entries: &[(EdgeId, W)]) -> Option<Rc<SidetrackNode<W>>> {
        let (&first, tail) = entries.split_first()?;
        let mid = (entries.len() - 1) / 2;
        Some(Rc::new(SidetrackNode {
            sidetrack: first,
            left: Self::balanced(&tail[..mid]),
            right: Self::balanced(&tail[mid..]),
            rest: None,
            size: entries.len(),
        }))
    }

    /// Derives the heap of a vertex from the heap of the next vertex on its
    /// shortest path by inserting the vertex's own sidetracks: the root entry
    /// as the carried payload, the sorted remainder as its `rest` subtree.
    pub fn insert_sidetracks(
        node: &Rc<SidetrackNode<W>>,
        root: (EdgeId, W),
        sorted_rest: &[(EdgeId, W)],
    ) -> Rc<SidetrackNode<W>> {
        Self::insert(Some(node), root, Self::balanced(sorted_rest))
    }

    /// Inserts a `(sidetrack, rest)` payload into the heap rooted at `node`,
    /// returning the new root.
    ///
    /// Only nodes along the insertion spine are allocated; the untouched
    /// child of every visited node is shared by reference with the input
    /// heap. The cheaper of the incoming payload and the resident one keeps
    /// the current position, the other sinks towards the strictly lighter
    /// subtree; equal child sizes send it right.
    fn insert(
        node: Option<&Rc<SidetrackNode<W>>>,
        sidetrack: (EdgeId, W),
        rest: Option<Rc<SidetrackNode<W>>>,
    ) -> Rc<SidetrackNode<W>> {
        let Some(node) = node else {
            return Rc::new(SidetrackNode {
                sidetrack,
                left: None,
                right: None,
                rest,
                size: 1,
            });
        };

        let go_left = match (&node.left, &node.right) {
            (None, _) => true,
            (Some(left), Some(right)) => right.size > left.size,
            (Some(_), None) => false,
        };

        // the cheaper payload claims this position; the other one sinks
        let ((top, top_rest), (sink, sink_rest)) = if sidetrack.1 < node.sidetrack.1 {
            ((sidetrack, rest), (node.sidetrack, node.rest.clone()))
        } else {
            ((node.sidetrack, node.rest.clone()), (sidetrack, rest))
        };

        let (left, right) = if go_left {
            (
                Some(Self::insert(node.left.as_ref(), sink, sink_rest)),
                node.right.clone(),
            )
        } else {
            (
                node.left.clone(),
                Some(Self::insert(node.right.as_ref(), sink, sink_rest)),
            )
        };

        Rc::new(SidetrackNode {
            sidetrack: top,
            left,
            right,
            rest: top_rest,
            size: node.size + 1,
        })
    }
}
