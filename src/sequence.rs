//! The `Sequence` trait: the capability set every representation implements.
//!
//! Handles are cheap views onto shared backing storage. `Clone` produces a
//! second view of the same elements and `slice` produces a view of a
//! sub-range; writes through any of them are visible through all of them.
//! `deep_copy` is the only operation that yields independent storage.

use crate::cursor::Cursor;
use crate::cursor::Walk;
use crate::error::Result;

/// An ordered, positional collection with sub-range views and cursors.
pub trait Sequence: Sized {
    /// Element type. `Default` supplies the filler used when a slice
    /// request runs past the end and the sequence grows to meet it.
    type Item: Clone + Default;

    /// Cursor type borrowed from this sequence.
    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// Push elements onto the end, in order.
    fn append<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = Self::Item>;

    /// Push elements onto the start. The elements keep their order: after
    /// `prepend([a, b])` the sequence begins with `a, b`.
    fn prepend<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = Self::Item>;

    /// Append every element of another sequence, of any representation.
    fn append_seq<S>(&mut self, other: &S)
    where
        S: Sequence<Item = Self::Item>,
    {
        self.append(other.iter());
    }

    /// Prepend every element of another sequence, of any representation.
    fn prepend_seq<S>(&mut self, other: &S)
    where
        S: Sequence<Item = Self::Item>,
    {
        self.prepend(other.iter());
    }

    /// A view of `[start, end)` sharing this sequence's storage.
    ///
    /// If `end` is past the current length, the returned view is first
    /// grown with default elements so that it has exactly `end - start`
    /// elements. The length of `self` is not changed.
    fn slice(&self, start: usize, end: usize) -> Result<Self>;

    /// Read the element at `index`.
    fn get(&self, index: usize) -> Result<Self::Item>;

    /// Overwrite the element at `index`. Visible through every view that
    /// shares the element.
    fn set(&self, index: usize, elem: Self::Item) -> Result<()>;

    /// A cursor one step before the first element.
    fn iter_start(&self) -> Self::Cursor<'_>;

    /// A cursor one step after the last element.
    fn iter_end(&self) -> Self::Cursor<'_>;

    /// A reversed cursor that starts at the last element and walks toward
    /// the first.
    fn reverse_iter_start(&self) -> <Self::Cursor<'_> as Cursor>::Reversed {
        return self.iter_end().reverse();
    }

    /// A reversed cursor sitting past the first element.
    fn reverse_iter_end(&self) -> <Self::Cursor<'_> as Cursor>::Reversed {
        return self.iter_start().reverse();
    }

    /// A std iterator over the elements, front to back.
    fn iter(&self) -> Walk<Self::Cursor<'_>> {
        return Walk::new(self.iter_start());
    }

    /// A copy with freshly owned storage.
    fn deep_copy(&self) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    /// Allocated capacity of the backing storage, as seen from this view.
    fn cap(&self) -> usize;

    /// Flatten into a plain vector.
    fn to_vec(&self) -> Vec<Self::Item> {
        return crate::algorithm::flatten(self);
    }
}
