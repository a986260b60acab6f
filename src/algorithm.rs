//! Algorithms written once against [`Sequence`].
//!
//! Nothing here knows which representation it is working on. Each result is
//! built by deep-copying a prefix of the input and then appending a
//! (possibly shared) view of the remainder, so the input is never written
//! through an aliased view.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::error::SequenceError;
use crate::error::check_index;
use crate::error::check_range;
use crate::sequence::Sequence;

/// Materialize a sequence into a fresh vector, front to back.
///
/// The vector always has room for at least one element.
pub fn flatten<S: Sequence>(seq: &S) -> Vec<S::Item> {
    let mut out = Vec::with_capacity(seq.len().max(1));
    let mut cursor = seq.iter_start();
    while cursor.move_next() {
        if let Some(elem) = cursor.get() {
            out.push(elem);
        }
    }
    return out;
}

/// A copy of `seq` without the element at `index`.
pub fn erase<S: Sequence>(seq: &S, index: usize) -> Result<S> {
    let len = seq.len();
    check_index(index, len)?;

    let mut out = seq.slice(0, index)?.deep_copy();
    out.append_seq(&seq.slice(index + 1, len)?);
    return Ok(out);
}

/// A copy of `seq` without the elements `start..=end` (both ends inclusive).
pub fn erase_range<S: Sequence>(seq: &S, start: usize, end: usize) -> Result<S> {
    let len = seq.len();
    check_range(start, end)?;
    check_index(end, len)?;

    let mut out = seq.slice(0, start)?.deep_copy();
    out.append_seq(&seq.slice(end + 1, len)?);
    return Ok(out);
}

/// A copy of `seq` with `elem` inserted before position `index`.
///
/// `index == seq.len()` inserts at the end.
pub fn insert<S: Sequence>(seq: &S, index: usize, elem: S::Item) -> Result<S> {
    let len = seq.len();
    if index > len {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }

    // The prefix carries one extra slot, which the new element overwrites.
    let mut out = seq.slice(0, index + 1)?.deep_copy();
    out.append_seq(&seq.slice(index, len)?);
    out.set(index, elem)?;
    return Ok(out);
}

/// A copy of `seq` with every element of `elems` inserted, in order, before
/// position `index`.
pub fn insert_seq<S, E>(seq: &S, index: usize, elems: &E) -> Result<S>
where
    S: Sequence,
    E: Sequence<Item = S::Item>,
{
    let len = seq.len();
    if index > len {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }

    let mut out = seq.slice(0, index + elems.len())?.deep_copy();
    out.append_seq(&seq.slice(index, len)?);

    let mut cursor = elems.iter_start();
    let mut offset = index;
    while cursor.move_next() {
        if let Some(elem) = cursor.get() {
            out.set(offset, elem)?;
        }
        offset += 1;
    }
    return Ok(out);
}
