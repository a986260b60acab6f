//! Contiguous sequence: a thin view onto one growable vector.
//!
//! - get/set: O(1)
//! - append: O(1) amortized
//! - prepend: O(n), always builds a new vector
//! - slice: O(1), the view shares the vector
//!
//! Several handles can share one vector. Each handle covers the window
//! `[offset, offset + len)`. An append writes in place only when the handle's
//! window ends exactly at the vector's end; otherwise the slots after the
//! window may belong to another handle, so the window is first copied into a
//! vector of its own.
//!
//! A handle that is the vector's only owner but covers less than half of it
//! also moves onto a copy of its window before growing, so slots dropped by
//! slicing do not pile up.

use std::cell::Ref;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::cursor::Position;
use crate::cursor::Reversed;
use crate::error::Result;
use crate::error::SequenceError;
use crate::error::check_index;
use crate::error::check_range;
use crate::sequence::Sequence;

/// Vector length below which a lone handle never compacts.
const COMPACT_MIN: usize = 32;

/// A sequence backed by a shared `Vec<T>`.
pub struct Contiguous<T> {
    buf: Rc<RefCell<Vec<T>>>,
    offset: usize,
    len: usize,
}

impl<T: Clone + Default> Contiguous<T> {
    /// `len` default elements with room for at least `cap`.
    pub fn empty(len: usize, cap: usize) -> Contiguous<T> {
        let mut buf = Vec::with_capacity(cap.max(len));
        buf.resize(len, T::default());
        return Contiguous::from_vec(buf);
    }

    /// Take ownership of a vector without copying it.
    pub fn from_vec(buf: Vec<T>) -> Contiguous<T> {
        let len = buf.len();
        return Contiguous {
            buf: Rc::new(RefCell::new(buf)),
            offset: 0,
            len,
        };
    }

    /// Borrow the covered window as a plain slice.
    ///
    /// Panics if a cursor `set` or `Sequence::set` on a sharing handle
    /// happens while the borrow is alive.
    pub fn as_slice(&self) -> Ref<'_, [T]> {
        let (offset, len) = (self.offset, self.len);
        return Ref::map(self.buf.borrow(), |buf| &buf[offset..offset + len]);
    }

    /// Whether another vector slot lies between this window and the vector end.
    #[inline]
    fn at_frontier(&self) -> bool {
        return self.offset + self.len == self.buf.borrow().len();
    }

    /// Whether this handle alone owns a vector that is mostly unreachable.
    fn is_sparse(&self) -> bool {
        let buf_len = self.buf.borrow().len();
        return Rc::strong_count(&self.buf) == 1 && buf_len >= COMPACT_MIN && buf_len > 2 * self.len;
    }

    /// Move this handle onto a private copy of its window.
    fn detach(&mut self, extra: usize) {
        let fresh = {
            let buf = self.buf.borrow();
            let mut fresh = Vec::with_capacity((self.len + extra).max(self.len * 2));
            fresh.extend_from_slice(&buf[self.offset..self.offset + self.len]);
            fresh
        };
        tracing::trace!(len = self.len, "contiguous: copy window before append");
        self.buf = Rc::new(RefCell::new(fresh));
        self.offset = 0;
    }

    fn push_one(&mut self, elem: T) {
        if !self.at_frontier() || self.is_sparse() {
            self.detach(1);
        }
        self.buf.borrow_mut().push(elem);
        self.len += 1;
    }
}

impl<T> Clone for Contiguous<T> {
    fn clone(&self) -> Self {
        return Contiguous {
            buf: Rc::clone(&self.buf),
            offset: self.offset,
            len: self.len,
        };
    }
}

impl<T: Clone + Default> Sequence for Contiguous<T> {
    type Item = T;
    type Cursor<'a>
        = ContiguousCursor<'a, T>
    where
        Self: 'a;

    fn append<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        for elem in elems {
            self.push_one(elem);
        }
    }

    fn prepend<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut fresh: Vec<T> = elems.into_iter().collect();
        if fresh.is_empty() {
            return;
        }
        let added = fresh.len();
        fresh.reserve(self.len);
        fresh.extend_from_slice(&self.as_slice());
        self.buf = Rc::new(RefCell::new(fresh));
        self.offset = 0;
        self.len += added;
    }

    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        check_range(start, end)?;
        if end > self.len {
            let mut grown = self.clone();
            tracing::trace!(len = self.len, end, "contiguous: grow on high bound");
            grown.append(std::iter::repeat_with(T::default).take(end - self.len));
            return grown.slice(start, end);
        }
        return Ok(Contiguous {
            buf: Rc::clone(&self.buf),
            offset: self.offset + start,
            len: end - start,
        });
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len)?;
        return Ok(self.buf.borrow()[self.offset + index].clone());
    }

    fn set(&self, index: usize, elem: T) -> Result<()> {
        check_index(index, self.len)?;
        self.buf.borrow_mut()[self.offset + index] = elem;
        return Ok(());
    }

    fn iter_start(&self) -> ContiguousCursor<'_, T> {
        return ContiguousCursor {
            seq: self,
            pos: Position::before_start(self.len),
        };
    }

    fn iter_end(&self) -> ContiguousCursor<'_, T> {
        return ContiguousCursor {
            seq: self,
            pos: Position::after_end(self.len),
        };
    }

    fn deep_copy(&self) -> Self {
        tracing::debug!(len = self.len, "contiguous: deep copy");
        return Contiguous::from_vec(self.as_slice().to_vec());
    }

    #[inline]
    fn len(&self) -> usize {
        return self.len;
    }

    fn cap(&self) -> usize {
        return self.buf.borrow().capacity() - self.offset;
    }
}

/// Cursor over a [`Contiguous`] sequence.
pub struct ContiguousCursor<'a, T> {
    seq: &'a Contiguous<T>,
    pos: Position,
}

impl<'a, T> ContiguousCursor<'a, T> {
    /// Index of the element under the cursor, relative to the view.
    pub fn index(&self) -> Option<usize> {
        return self.pos.index();
    }
}

impl<'a, T: Clone + Default> Cursor for ContiguousCursor<'a, T> {
    type Item = T;
    type Reversed = Reversed<Self>;

    #[inline]
    fn has_next(&self) -> bool {
        return self.pos.has_next();
    }

    #[inline]
    fn move_next(&mut self) -> bool {
        return self.pos.step_next();
    }

    #[inline]
    fn has_prev(&self) -> bool {
        return self.pos.has_prev();
    }

    #[inline]
    fn move_prev(&mut self) -> bool {
        return self.pos.step_prev();
    }

    fn get(&self) -> Option<T> {
        let index = self.pos.index()?;
        return Some(self.seq.buf.borrow()[self.seq.offset + index].clone());
    }

    fn set(&mut self, elem: T) -> Result<()> {
        let index = self.pos.index().ok_or(SequenceError::NoElement)?;
        self.seq.buf.borrow_mut()[self.seq.offset + index] = elem;
        return Ok(());
    }

    fn reverse(self) -> Reversed<Self> {
        return Reversed::new(self);
    }
}

impl<T: Clone + Default> From<Vec<T>> for Contiguous<T> {
    fn from(buf: Vec<T>) -> Self {
        return Contiguous::from_vec(buf);
    }
}

impl<T: Clone + Default> FromIterator<T> for Contiguous<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Contiguous::from_vec(iter.into_iter().collect());
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for Contiguous<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice().iter()).finish();
    }
}
