//! Node storage for the linked representations.
//!
//! Nodes live in a `Vec` and refer to each other by index, so a chain never
//! holds a reference into itself. The arena is append-only: a node that no
//! handle reaches any more stays allocated until the last handle sharing the
//! arena is dropped.

use std::cell::RefCell;
use std::rc::Rc;

/// Index into the node array.
pub(crate) type NodeIdx = u32;
/// Sentinel value for no node.
pub(crate) const NONE: NodeIdx = u32::MAX;

/// Node count below which a lone handle never compacts.
pub(crate) const COMPACT_MIN: usize = 32;

/// Behaviour the arena needs from a node type.
pub(crate) trait Link {
    type Elem;

    fn new(elem: Self::Elem) -> Self;

    fn elem(&self) -> &Self::Elem;

    fn elem_mut(&mut self) -> &mut Self::Elem;

    fn next(&self) -> NodeIdx;

    fn set_next(&mut self, next: NodeIdx);

    /// Record the predecessor. Forward-only nodes ignore it.
    fn set_prev(&mut self, _prev: NodeIdx) {}
}

/// A freshly linked run of nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Chain {
    pub first: NodeIdx,
    pub last: NodeIdx,
    pub len: usize,
}

pub(crate) struct Arena<N> {
    nodes: Vec<N>,
}

pub(crate) type SharedArena<N> = Rc<RefCell<Arena<N>>>;

impl<N: Link> Arena<N> {
    pub(crate) fn with_capacity(capacity: usize) -> Arena<N> {
        return Arena {
            nodes: Vec::with_capacity(capacity),
        };
    }

    pub(crate) fn shared(capacity: usize) -> SharedArena<N> {
        return Rc::new(RefCell::new(Arena::with_capacity(capacity)));
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        return self.nodes.len();
    }

    /// Allocate an unlinked node.
    pub(crate) fn alloc(&mut self, elem: N::Elem) -> NodeIdx {
        let idx = self.len();
        assert!(idx < NONE as usize, "node arena exhausted");
        self.nodes.push(N::new(elem));
        return idx as NodeIdx;
    }

    #[inline(always)]
    pub(crate) fn node(&self, idx: NodeIdx) -> &N {
        return &self.nodes[idx as usize];
    }

    #[inline(always)]
    pub(crate) fn node_mut(&mut self, idx: NodeIdx) -> &mut N {
        return &mut self.nodes[idx as usize];
    }

    /// Connect `left -> right`, setting the back-link where the node type has one.
    #[inline]
    pub(crate) fn link(&mut self, left: NodeIdx, right: NodeIdx) {
        self.node_mut(left).set_next(right);
        self.node_mut(right).set_prev(left);
    }

    /// Allocate and link a run of nodes holding `elems`, in order.
    /// Returns `None` for an empty input.
    pub(crate) fn chain<I>(&mut self, elems: I) -> Option<Chain>
    where
        I: IntoIterator<Item = N::Elem>,
    {
        let mut chain: Option<Chain> = None;
        for elem in elems {
            let idx = self.alloc(elem);
            chain = match chain {
                None => Some(Chain { first: idx, last: idx, len: 1 }),
                Some(c) => {
                    self.link(c.last, idx);
                    Some(Chain { first: c.first, last: idx, len: c.len + 1 })
                }
            };
        }
        return chain;
    }

    /// Follow `next` links `steps` times from `from`.
    pub(crate) fn walk_forward(&self, from: NodeIdx, steps: usize) -> NodeIdx {
        let mut idx = from;
        for _ in 0..steps {
            idx = self.node(idx).next();
        }
        return idx;
    }
}

/// Whether the only handle on `arena` reaches less than half of its nodes.
pub(crate) fn is_sparse<N: Link>(arena: &SharedArena<N>, live: usize) -> bool {
    let nodes = arena.borrow().len();
    return Rc::strong_count(arena) == 1 && nodes >= COMPACT_MIN && nodes > 2 * live;
}
