//! Doubly linked sequence.
//!
//! - append/prepend: O(1) per element
//! - get/set/node(i): O(min(i, len - i)), scanned from the nearer end
//! - slice: O(min(i, len - i) + min(j, len - j)), shares the chain
//!
//! Back-links make cursors fully bidirectional.

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

pub(crate) struct DoublyNode<T> {
    elem: T,
    next: NodeIdx,
    prev: NodeIdx,
}

impl<T> DoublyNode<T> {
    #[inline(always)]
    fn prev(&self) -> NodeIdx {
        return self.prev;
    }
}

impl<T> Link for DoublyNode<T> {
    type Elem = T;

    fn new(elem: T) -> Self {
        return DoublyNode {
            elem,
            next: NONE,
            prev: NONE,
        };
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

    #[inline(always)]
    fn set_prev(&mut self, prev: NodeIdx) {
        self.prev = prev;
    }
}

/// Follow `prev` links `steps` times from `from`.
fn walk_backward<T>(arena: &Arena<DoublyNode<T>>, from: NodeIdx, steps: usize) -> NodeIdx {
    let mut idx = from;
    for _ in 0..steps {
        idx = arena.node(idx).prev();
    }
    return idx;
}

/// A sequence backed by a doubly linked chain of nodes.
pub struct Doubly<T> {
    arena: SharedArena<DoublyNode<T>>,
    start: NodeIdx,
    end: NodeIdx,
    len: usize,
}

impl<T: Clone + Default> Doubly<T> {
    /// `len` default elements.
    pub fn empty(len: usize) -> Doubly<T> {
        return Doubly::from_vec(vec![T::default(); len]);
    }

    pub fn from_vec(elems: Vec<T>) -> Doubly<T> {
        let arena: SharedArena<DoublyNode<T>> = Arena::shared(elems.len());
        let chain = arena.borrow_mut().chain(elems);
        return match chain {
            Some(chain) => Doubly {
                arena,
                start: chain.first,
                end: chain.last,
                len: chain.len,
            },
            None => Doubly {
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

    fn node_idx(&self, index: usize) -> Result<NodeIdx> {
        check_index(index, self.len)?;
        let arena = self.arena.borrow();
        if index <= self.len / 2 {
            return Ok(arena.walk_forward(self.start, index));
        }
        return Ok(walk_backward(&arena, self.end, self.len - 1 - index));
    }

    fn empty_view(&self) -> Doubly<T> {
        return Doubly {
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

    /// Whether `start` is the first node of its chain.
    fn at_head(&self) -> bool {
        return self.len == 0 || self.arena.borrow().node(self.start).prev() == NONE;
    }

    fn detach(&mut self) {
        tracing::trace!(len = self.len, "doubly: copy chain before splice");
        *self = Doubly::from_vec(self.to_vec());
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

impl<T> Clone for Doubly<T> {
    fn clone(&self) -> Self {
        return Doubly {
            arena: Rc::clone(&self.arena),
            start: self.start,
            end: self.end,
            len: self.len,
        };
    }
}

impl<T: Clone + Default> Sequence for Doubly<T> {
    type Item = T;
    type Cursor<'a>
        = DoublyCursor<'a, T>
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
        if !self.at_head() || is_sparse(&self.arena, self.len) {
            self.detach();
        }
        let mut arena = self.arena.borrow_mut();
        let Some(chain) = arena.chain(elems) else {
            return;
        };
        if self.len == 0 {
            self.end = chain.last;
        } else {
            arena.link(chain.last, self.start);
        }
        self.start = chain.first;
        self.len += chain.len;
    }

    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        check_range(start, end)?;
        if end > self.len {
            let mut grown = self.clone();
            tracing::trace!(len = self.len, end, "doubly: grow on high bound");
            grown.append(std::iter::repeat_with(T::default).take(end - self.len));
            return grown.slice(start, end);
        }
        if start == end {
            return Ok(self.empty_view());
        }
        return Ok(Doubly {
            arena: Rc::clone(&self.arena),
            start: self.node_idx(start)?,
            end: self.node_idx(end - 1)?,
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

    fn iter_start(&self) -> DoublyCursor<'_, T> {
        return DoublyCursor {
            list: self,
            pos: Position::before_start(self.len),
            node: NONE,
        };
    }

    fn iter_end(&self) -> DoublyCursor<'_, T> {
        return DoublyCursor {
            list: self,
            pos: Position::after_end(self.len),
            node: NONE,
        };
    }

    fn deep_copy(&self) -> Self {
        tracing::debug!(len = self.len, "doubly: deep copy");
        return Doubly::from_vec(self.to_vec());
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

/// Borrowed handle to one node of a [`Doubly`] list.
pub struct NodeRef<'a, T> {
    list: &'a Doubly<T>,
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

    /// The preceding node, or `None` before the start of the list.
    pub fn prev(&self) -> Option<NodeRef<'a, T>> {
        if self.index == 0 {
            return None;
        }
        let idx = self.list.arena.borrow().node(self.idx).prev();
        return Some(NodeRef { list: self.list, idx, index: self.index - 1 });
    }
}

/// Bidirectional cursor over a [`Doubly`] list.
pub struct DoublyCursor<'a, T> {
    list: &'a Doubly<T>,
    pos: Position,
    node: NodeIdx,
}

impl<'a, T: Clone + Default> DoublyCursor<'a, T> {
    /// The node under the cursor.
    pub fn node(&self) -> Option<NodeRef<'a, T>> {
        let index = self.pos.index()?;
        return Some(NodeRef { list: self.list, idx: self.node, index });
    }
}

impl<'a, T: Clone + Default> Cursor for DoublyCursor<'a, T> {
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

    #[inline]
    fn has_prev(&self) -> bool {
        return self.pos.has_prev();
    }

    fn move_prev(&mut self) -> bool {
        if !self.pos.step_prev() {
            return false;
        }
        self.node = if self.pos.is_last() {
            self.list.end
        } else {
            self.list.arena.borrow().node(self.node).prev()
        };
        return true;
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

impl<T: Clone + Default> From<Vec<T>> for Doubly<T> {
    fn from(elems: Vec<T>) -> Self {
        return Doubly::from_vec(elems);
    }
}

impl<T: Clone + Default> FromIterator<T> for Doubly<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Doubly::from_vec(iter.into_iter().collect());
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for Doubly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}
