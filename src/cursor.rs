//! Bidirectional cursors over a sequence.
//!
//! A cursor sits either on an element or on one of two sentinels: one step
//! before the first element, or one step after the last. A fresh start cursor
//! sits on the first sentinel, so the first `move_next` lands on element 0;
//! a fresh end cursor sits on the second, so the first `move_prev` lands on
//! the last element.
//!
//! ```
//! use quartet::Cursor;
//! use quartet::Sequence;
//! use quartet::contiguous::Contiguous;
//!
//! let seq = Contiguous::from_vec(vec![1, 2, 3]);
//! let mut cursor = seq.iter_start();
//! let mut seen = Vec::new();
//! while cursor.move_next() {
//!     seen.push(cursor.get().unwrap());
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

use crate::error::Result;

/// A position marker that can step toward either end of a sequence.
pub trait Cursor {
    /// Element type read and written through the cursor.
    type Item;

    /// The cursor type produced by [`Cursor::reverse`].
    ///
    /// Concrete cursors use [`Reversed<Self>`]; `Reversed<C>` uses `C`, so
    /// reversing twice gives back the original cursor type.
    type Reversed: Cursor<Item = Self::Item>;

    /// Whether a further element exists in the forward direction.
    fn has_next(&self) -> bool;

    /// Step forward. Returns false, without moving, if there is no next element.
    fn move_next(&mut self) -> bool;

    /// Whether a further element exists in the backward direction.
    fn has_prev(&self) -> bool;

    /// Step backward. Returns false, without moving, if there is no previous element.
    fn move_prev(&mut self) -> bool;

    /// The element under the cursor, or `None` at a sentinel.
    fn get(&self) -> Option<Self::Item>;

    /// Overwrite the element under the cursor.
    ///
    /// The write lands in the shared backing storage, so every view that
    /// covers the element observes it.
    fn set(&mut self, elem: Self::Item) -> Result<()>;

    /// Swap the meaning of next and previous.
    fn reverse(self) -> Self::Reversed
    where
        Self: Sized;
}

/// Reverse a cursor. `reverse(reverse(c))` is `c` itself, not a double wrapper.
pub fn reverse<C: Cursor>(cursor: C) -> C::Reversed {
    return cursor.reverse();
}

/// A cursor adapter that walks its inner cursor backwards.
#[derive(Clone, Debug)]
pub struct Reversed<C> {
    inner: C,
}

impl<C> Reversed<C> {
    pub fn new(inner: C) -> Reversed<C> {
        return Reversed { inner };
    }

    /// Unwrap the adapter.
    pub fn into_inner(self) -> C {
        return self.inner;
    }

    pub fn inner(&self) -> &C {
        return &self.inner;
    }
}

impl<C: Cursor> Cursor for Reversed<C> {
    type Item = C::Item;
    type Reversed = C;

    #[inline]
    fn has_next(&self) -> bool {
        return self.inner.has_prev();
    }

    #[inline]
    fn move_next(&mut self) -> bool {
        return self.inner.move_prev();
    }

    #[inline]
    fn has_prev(&self) -> bool {
        return self.inner.has_next();
    }

    #[inline]
    fn move_prev(&mut self) -> bool {
        return self.inner.move_next();
    }

    #[inline]
    fn get(&self) -> Option<C::Item> {
        return self.inner.get();
    }

    #[inline]
    fn set(&mut self, elem: C::Item) -> Result<()> {
        return self.inner.set(elem);
    }

    fn reverse(self) -> C {
        return self.inner;
    }
}

/// Adapts a cursor into a std [`Iterator`] that calls `move_next` until exhausted.
pub struct Walk<C> {
    cursor: C,
}

impl<C: Cursor> Walk<C> {
    pub fn new(cursor: C) -> Walk<C> {
        return Walk { cursor };
    }
}

impl<C: Cursor> Iterator for Walk<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if !self.cursor.move_next() {
            return None;
        }
        return self.cursor.get();
    }
}

/// Sentinel-aware logical position shared by the concrete cursors.
///
/// `pos == 0` is the before-start sentinel, `pos == k` for `1 <= k <= len`
/// is element `k - 1`, and `pos == len + 1` is the after-end sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Position {
    pos: usize,
    len: usize,
}

impl Position {
    pub(crate) fn before_start(len: usize) -> Position {
        return Position { pos: 0, len };
    }

    pub(crate) fn after_end(len: usize) -> Position {
        return Position { pos: len + 1, len };
    }

    #[inline]
    pub(crate) fn has_next(&self) -> bool {
        return self.pos < self.len;
    }

    #[inline]
    pub(crate) fn has_prev(&self) -> bool {
        return self.pos > 1;
    }

    #[inline]
    pub(crate) fn step_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.pos += 1;
        return true;
    }

    #[inline]
    pub(crate) fn step_prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.pos -= 1;
        return true;
    }

    /// Element index under the position, `None` at either sentinel.
    #[inline]
    pub(crate) fn index(&self) -> Option<usize> {
        if self.pos == 0 || self.pos > self.len {
            return None;
        }
        return Some(self.pos - 1);
    }

    #[inline]
    pub(crate) fn is_first(&self) -> bool {
        return self.pos == 1;
    }

    #[inline]
    pub(crate) fn is_last(&self) -> bool {
        return self.pos == self.len;
    }
}
