//! Singly linked sequence.
//!
//! - append/prepend: O(1) per element
//! - get/set/node(i): O(i), always scanned from `start`
//! - slice: O(j), shares the chain
//!
//! Cursors only move forward: `has_prev`/`move_prev` always report that there
//! is no previous element. An end cursor therefore cannot be driven at all,
//! and `reverse_iter_start` yields nothing.

use std::fmt;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::cursor::Position;
use crate::cursor::Reversed;
use crate::error::Result;
use crate::error::SequenceError;
use crate::error::check_index;
use crate::error::check_range;
use crate::linked::arena::Arena;
use crate::linked::arena::Link;
use crate::linked::arena::NONE;
use crate::linked::arena::NodeIdx;
use crate::linked::arena::SharedArena;
use crate::linked::arena::is_sparse;
use crate::sequence::Sequence;

pub(crate) struct SinglyNode<T> {
    elem: T,
    next: NodeIdx,
}

impl<T> Link for SinglyNode<T> {
    type Elem = T;

    fn new(elem: T) -> Self {
        return SinglyNode { elem, next: NONE };
    }

    #[inline(always)]
    fn elem(&self) -> &T {
        return &self.elem;
    }

    #[inline(always)]
    fn elem_mut(&mut self) -> &mut T {
        return &mut self.elem;
    }

    #[inline(always)]
    fn next(&self) -> NodeIdx {
        return self.next;
    }

    #[inline(always)]
    fn set_next(&mut self, next: NodeIdx) {
        self.next = next;
    }
}

/// A sequence backed by a forward-linked chain of nodes.
pub struct Singly<T> {
    arena: SharedArena<SinglyNode<T>>,
    start: NodeIdx,
    end: NodeIdx,
    len: usize,
}

impl<T: Clone + Default> Singly<T> {
    /// `len` default elements.
    pub fn empty(len: usize) -> Singly<T> {
        return Singly::from_vec(vec![T::default(); len]);
    }

    pub fn from_vec(elems: Vec<T>) -> Singly<T> {
        let arena: SharedArena<SinglyNode<T>> = Arena::shared(elems.len());
        let chain = arena.borrow_mut().chain(elems);
        return match chain {
            Some(chain) => Singly {
                arena,
                start: chain.first,
                end: chain.last,
                len: chain.len,
            },
            None => Singly {
                arena,
                start: NONE,
                end: NONE,
                len: 0,
            },
        };
    }

    /// The node holding element `index`.
    pub fn node(&self, index: usize) -> Result<NodeRef<'_, T>> {
        let idx = self.node_idx(index)?;
        return Ok(NodeRef { list: self, idx, index });
    }

    /// Counting walk from `start`.
    fn node_idx(&self, index: usize) -> Result<NodeIdx> {
        check_index(index, self.len)?;
        return Ok(self.arena.borrow().walk_forward(self.start, index));
    }

    /// An empty handle sharing this arena.
    fn empty_view(&self) -> Singly<T> {
        return Singly {
            arena: Rc::clone(&self.arena),
            start: NONE,
            end: NONE,
            len: 0,
        };
    }

    /// Whether `end` is the last node of its chain.
    fn at_tail(&self) -> bool {
        return self.len == 0 || self.arena.borrow().node(self.end).next() == NONE;
    }

    /// Move this handle onto a private arena holding a copy of its elements.
    fn detach(&mut self) {
        tracing::trace!(len = self.len, "singly: copy chain before splice");
        *self = Singly::from_vec(self.to_vec());
    }

    fn push_back(&mut self, elem: T) {
        if !self.at_tail() || is_sparse(&self.arena, self.len) {
            self.detach();
        }
        let mut arena = self.arena.borrow_mut();
        let idx = arena.alloc(elem);
        if self.len == 0 {
            self.start = idx;
        } else {
            arena.link(self.end, idx);
        }
        self.end = idx;
        self.len += 1;
    }
}

impl<T> Clone for Singly<T> {
    fn clone(&self) -> Self {
        return Singly {
            arena: Rc::clone(&self.arena),
            start: self.start,
            end: self.end,
            len: self.len,
        };
    }
}

impl<T: Clone + Default> Sequence for Singly<T> {
    type Item = T;
    type Cursor<'a>
        = SinglyCursor<'a, T>
    where
        Self: 'a;

    fn append<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        for elem in elems {
            self.push_back(elem);
        }
    }

    fn prepend<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        let elems: Vec<T> = elems.into_iter().collect();
        if elems.is_empty() {
            return;
        }
        if is_sparse(&self.arena, self.len) {
            self.detach();
        }
        let mut arena = self.arena.borrow_mut();
        let Some(chain) = arena.chain(elems) else {
            return;
        };
        // Only the fresh tail node is written, never an existing one.
        if self.len == 0 {
            self.end = chain.last;
        } else {
            arena.node_mut(chain.last).set_next(self.start);
        }
        self.start = chain.first;
        self.len += chain.len;
    }

    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        check_range(start, end)?;
        if end > self.len {
            let mut grown = self.clone();
            tracing::trace!(len = self.len, end, "singly: grow on high bound");
            grown.append(std::iter::repeat_with(T::default).take(end - self.len));
            return grown.slice(start, end);
        }
        if start == end {
            return Ok(self.empty_view());
        }

        let arena = self.arena.borrow();
        let first = arena.walk_forward(self.start, start);
        let last = arena.walk_forward(first, end - 1 - start);
        return Ok(Singly {
            arena: Rc::clone(&self.arena),
            start: first,
            end: last,
            len: end - start,
        });
    }

    fn get(&self, index: usize) -> Result<T> {
        let idx = self.node_idx(index)?;
        return Ok(self.arena.borrow().node(idx).elem().clone());
    }

    fn set(&self, index: usize, elem: T) -> Result<()> {
        let idx = self.node_idx(index)?;
        *self.arena.borrow_mut().node_mut(idx).elem_mut() = elem;
        return Ok(());
    }

    fn iter_start(&self) -> SinglyCursor<'_, T> {
        return SinglyCursor {
            list: self,
            pos: Position::before_start(self.len),
            node: NONE,
        };
    }

    fn iter_end(&self) -> SinglyCursor<'_, T> {
        return SinglyCursor {
            list: self,
            pos: Position::after_end(self.len),
            node: NONE,
        };
    }

    fn deep_copy(&self) -> Self {
        tracing::debug!(len = self.len, "singly: deep copy");
        return Singly::from_vec(self.to_vec());
    }

    #[inline]
    fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    fn cap(&self) -> usize {
        return self.len;
    }
}

/// Borrowed handle to one node of a [`Singly`] list.
pub struct NodeRef<'a, T> {
    list: &'a Singly<T>,
    idx: NodeIdx,
    index: usize,
}

impl<'a, T: Clone + Default> NodeRef<'a, T> {
    pub fn elem(&self) -> T {
        return self.list.arena.borrow().node(self.idx).elem().clone();
    }

    pub fn set(&self, elem: T) {
        *self.list.arena.borrow_mut().node_mut(self.idx).elem_mut() = elem;
    }

    /// Position of this node within the list it was obtained from.
    pub fn index(&self) -> usize {
        return self.index;
    }

    /// The following node, or `None` past the end of the list.
    pub fn next(&self) -> Option<NodeRef<'a, T>> {
        if self.index + 1 >= self.list.len {
            return None;
        }
        let idx = self.list.arena.borrow().node(self.idx).next();
        return Some(NodeRef { list: self.list, idx, index: self.index + 1 });
    }
}

/// Forward-only cursor over a [`Singly`] list.
pub struct SinglyCursor<'a, T> {
    list: &'a Singly<T>,
    pos: Position,
    node: NodeIdx,
}

impl<'a, T: Clone + Default> SinglyCursor<'a, T> {
    /// The node under the cursor.
    pub fn node(&self) -> Option<NodeRef<'a, T>> {
        let index = self.pos.index()?;
        return Some(NodeRef { list: self.list, idx: self.node, index });
    }
}

impl<'a, T: Clone + Default> Cursor for SinglyCursor<'a, T> {
    type Item = T;
    type Reversed = Reversed<Self>;

    #[inline]
    fn has_next(&self) -> bool {
        return self.pos.has_next();
    }

    fn move_next(&mut self) -> bool {
        if !self.pos.step_next() {
            return false;
        }
        self.node = if self.pos.is_first() {
            self.list.start
        } else {
            self.list.arena.borrow().node(self.node).next()
        };
        return true;
    }

    /// Always false: nodes carry no back-link.
    #[inline]
    fn has_prev(&self) -> bool {
        return false;
    }

    /// Always false: nodes carry no back-link.
    #[inline]
    fn move_prev(&mut self) -> bool {
        return false;
    }

    fn get(&self) -> Option<T> {
        self.pos.index()?;
        return Some(self.list.arena.borrow().node(self.node).elem().clone());
    }

    fn set(&mut self, elem: T) -> Result<()> {
        if self.pos.index().is_none() {
            return Err(SequenceError::NoElement);
        }
        *self.list.arena.borrow_mut().node_mut(self.node).elem_mut() = elem;
        return Ok(());
    }

    fn reverse(self) -> Reversed<Self> {
        return Reversed::new(self);
    }
}

impl<T: Clone + Default> From<Vec<T>> for Singly<T> {
    fn from(elems: Vec<T>) -> Self {
        return Singly::from_vec(elems);
    }
}

impl<T: Clone + Default> FromIterator<T> for Singly<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Singly::from_vec(iter.into_iter().collect());
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for Singly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}
