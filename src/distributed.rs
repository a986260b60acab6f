//! Distributed sequence: a deque of fixed-capacity buckets.
//!
//! Elements are spread over buckets of `bucket_capacity` slots each. The
//! handle records a rolling `start` offset into the first bucket and an
//! `end` offset into the last one, so both ends grow in O(1) amortized time
//! and indexing is a division.
//!
//! Buckets are shared between handles. Each bucket remembers the range of
//! slots `[lo, hi)` that some handle has claimed; a handle may only write a
//! new element into a slot that extends that range. Anything else copies the
//! one bucket involved before writing.

use std::cell::RefCell;
use std::collections::VecDeque;
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

/// Bucket size, in bytes, used when no capacity is given.
pub const DEFAULT_BUCKET_BYTES: usize = 256;

/// Slots per bucket for `T` when no capacity is given.
pub fn default_bucket_capacity<T>() -> usize {
    return (DEFAULT_BUCKET_BYTES / size_of::<T>().max(1)).max(1);
}

struct Bucket<T> {
    slots: Vec<T>,
    lo: usize,
    hi: usize,
}

type SharedBucket<T> = Rc<RefCell<Bucket<T>>>;

impl<T: Clone + Default> Bucket<T> {
    /// A default-filled bucket with nothing claimed yet; `at` is where
    /// claiming will start.
    fn shared(cap: usize, at: usize) -> SharedBucket<T> {
        return Rc::new(RefCell::new(Bucket {
            slots: vec![T::default(); cap],
            lo: at,
            hi: at,
        }));
    }

    fn copy_claiming(&self, lo: usize, hi: usize) -> SharedBucket<T> {
        return Rc::new(RefCell::new(Bucket {
            slots: self.slots.clone(),
            lo,
            hi,
        }));
    }
}

/// A sequence backed by a `VecDeque` of shared buckets.
pub struct Distributed<T> {
    buckets: VecDeque<SharedBucket<T>>,
    bucket_cap: usize,
    start: usize,
    end: usize,
}

impl<T: Clone + Default> Distributed<T> {
    /// `len` default elements. A `bucket_capacity` of 0 picks
    /// [`default_bucket_capacity`].
    pub fn empty(len: usize, bucket_capacity: usize) -> Distributed<T> {
        return Distributed::with_bucket_capacity(vec![T::default(); len], bucket_capacity);
    }

    pub fn from_vec(elems: Vec<T>) -> Distributed<T> {
        return Distributed::with_bucket_capacity(elems, 0);
    }

    /// Lay `elems` out into buckets of `bucket_capacity` slots, starting at
    /// offset 0 of the first bucket. 0 picks the default capacity.
    pub fn with_bucket_capacity(elems: Vec<T>, bucket_capacity: usize) -> Distributed<T> {
        let cap = if bucket_capacity == 0 {
            default_bucket_capacity::<T>()
        } else {
            bucket_capacity
        };
        let len = elems.len();
        let mut buckets = VecDeque::with_capacity(len.div_ceil(cap));
        let mut iter = elems.into_iter();
        loop {
            let mut slots: Vec<T> = iter.by_ref().take(cap).collect();
            if slots.is_empty() {
                break;
            }
            let hi = slots.len();
            slots.resize(cap, T::default());
            buckets.push_back(Rc::new(RefCell::new(Bucket { slots, lo: 0, hi })));
        }
        let end = if len == 0 { 0 } else { (len - 1) % cap + 1 };
        return Distributed {
            buckets,
            bucket_cap: cap,
            start: 0,
            end,
        };
    }

    #[inline(always)]
    pub fn bucket_capacity(&self) -> usize {
        return self.bucket_cap;
    }

    #[inline(always)]
    pub fn bucket_count(&self) -> usize {
        return self.buckets.len();
    }

    /// Offset of the first element inside the first bucket.
    #[inline(always)]
    pub fn start_offset(&self) -> usize {
        return self.start;
    }

    /// Offset one past the last element inside the last bucket.
    #[inline(always)]
    pub fn end_offset(&self) -> usize {
        return self.end;
    }

    /// Raw slot contents of every bucket, unused slots included.
    pub fn bucket_contents(&self) -> Vec<Vec<T>> {
        return self
            .buckets
            .iter()
            .map(|bucket| bucket.borrow().slots.clone())
            .collect();
    }

    fn empty_like(&self) -> Distributed<T> {
        return Distributed {
            buckets: VecDeque::new(),
            bucket_cap: self.bucket_cap,
            start: 0,
            end: 0,
        };
    }

    /// Bucket and slot holding element `index`. Does not bounds-check.
    #[inline]
    fn locate(&self, index: usize) -> (usize, usize) {
        let offset = index + self.start;
        return (offset / self.bucket_cap, offset % self.bucket_cap);
    }

    fn push_back(&mut self, elem: T) {
        let cap = self.bucket_cap;
        if self.buckets.is_empty() || self.end == cap {
            tracing::trace!(buckets = self.buckets.len(), "distributed: new tail bucket");
            if self.buckets.is_empty() {
                self.start = 0;
            }
            self.buckets.push_back(Bucket::shared(cap, 0));
            self.end = 0;
        }

        let last = self.buckets.len() - 1;
        let slot = self.end;
        let lo = if last == 0 { self.start } else { 0 };
        let bucket = &self.buckets[last];
        let in_place = {
            let unique = Rc::strong_count(bucket) == 1;
            let mut b = bucket.borrow_mut();
            if unique {
                b.lo = lo;
                b.hi = slot + 1;
                true
            } else if b.hi == slot {
                b.hi += 1;
                true
            } else {
                false
            }
        };
        if !in_place {
            tracing::trace!(slot, "distributed: copy tail bucket before append");
            let fresh = bucket.borrow().copy_claiming(lo, slot + 1);
            self.buckets[last] = fresh;
        }
        self.buckets[last].borrow_mut().slots[slot] = elem;
        self.end += 1;
    }

    fn push_front(&mut self, elem: T) {
        let cap = self.bucket_cap;
        if self.start == 0 {
            tracing::trace!(buckets = self.buckets.len(), "distributed: new head bucket");
            self.buckets.push_front(Bucket::shared(cap, cap));
            self.start = cap;
        }

        let slot = self.start - 1;
        let hi = if self.buckets.len() == 1 { self.end } else { cap };
        let bucket = &self.buckets[0];
        let in_place = {
            let unique = Rc::strong_count(bucket) == 1;
            let mut b = bucket.borrow_mut();
            if unique {
                b.lo = slot;
                b.hi = hi;
                true
            } else if b.lo == self.start {
                b.lo -= 1;
                true
            } else {
                false
            }
        };
        if !in_place {
            tracing::trace!(slot, "distributed: copy head bucket before prepend");
            let fresh = bucket.borrow().copy_claiming(slot, hi);
            self.buckets[0] = fresh;
        }
        self.buckets[0].borrow_mut().slots[slot] = elem;
        self.start -= 1;
    }
}

impl<T> Clone for Distributed<T> {
    fn clone(&self) -> Self {
        return Distributed {
            buckets: self.buckets.clone(),
            bucket_cap: self.bucket_cap,
            start: self.start,
            end: self.end,
        };
    }
}

impl<T: Clone + Default> Sequence for Distributed<T> {
    type Item = T;
    type Cursor<'a>
        = DistributedCursor<'a, T>
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
        if self.buckets.is_empty() {
            tracing::trace!("distributed: new head bucket");
            self.buckets.push_back(Bucket::shared(self.bucket_cap, self.bucket_cap));
            self.start = self.bucket_cap;
            self.end = self.bucket_cap;
        }
        for elem in elems.into_iter().rev() {
            self.push_front(elem);
        }
    }

    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        check_range(start, end)?;
        let len = self.len();
        if end > len {
            let mut grown = self.clone();
            tracing::trace!(len, end, "distributed: grow on high bound");
            grown.append(std::iter::repeat_with(T::default).take(end - len));
            return grown.slice(start, end);
        }
        if start == end {
            return Ok(self.empty_like());
        }

        let cap = self.bucket_cap;
        let abs_start = start + self.start;
        let abs_end = end + self.start;
        let buckets = self
            .buckets
            .range(abs_start / cap..abs_end.div_ceil(cap))
            .cloned()
            .collect();
        return Ok(Distributed {
            buckets,
            bucket_cap: cap,
            start: abs_start % cap,
            end: (abs_end - 1) % cap + 1,
        });
    }

    fn get(&self, index: usize) -> Result<T> {
        check_index(index, self.len())?;
        let (bucket, slot) = self.locate(index);
        return Ok(self.buckets[bucket].borrow().slots[slot].clone());
    }

    fn set(&self, index: usize, elem: T) -> Result<()> {
        check_index(index, self.len())?;
        let (bucket, slot) = self.locate(index);
        self.buckets[bucket].borrow_mut().slots[slot] = elem;
        return Ok(());
    }

    fn iter_start(&self) -> DistributedCursor<'_, T> {
        return DistributedCursor {
            seq: self,
            pos: Position::before_start(self.len()),
        };
    }

    fn iter_end(&self) -> DistributedCursor<'_, T> {
        return DistributedCursor {
            seq: self,
            pos: Position::after_end(self.len()),
        };
    }

    fn deep_copy(&self) -> Self {
        tracing::debug!(len = self.len(), "distributed: deep copy");
        return Distributed::with_bucket_capacity(self.to_vec(), self.bucket_cap);
    }

    fn len(&self) -> usize {
        let cap = self.bucket_cap;
        return match self.buckets.len() {
            0 => 0,
            1 => self.end - self.start,
            n => (cap - self.start) + (n - 2) * cap + self.end,
        };
    }

    #[inline]
    fn cap(&self) -> usize {
        return self.buckets.len() * self.bucket_cap;
    }
}

pub struct DistributedCursor<'a, T> {
    seq: &'a Distributed<T>,
    pos: Position,
}

impl<'a, T> DistributedCursor<'a, T> {
    pub fn index(&self) -> Option<usize> {
        return self.pos.index();
    }
}

impl<'a, T: Clone + Default> Cursor for DistributedCursor<'a, T> {
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
        let (bucket, slot) = self.seq.locate(self.pos.index()?);
        return Some(self.seq.buckets[bucket].borrow().slots[slot].clone());
    }

    fn set(&mut self, elem: T) -> Result<()> {
        let index = self.pos.index().ok_or(SequenceError::NoElement)?;
        let (bucket, slot) = self.seq.locate(index);
        self.seq.buckets[bucket].borrow_mut().slots[slot] = elem;
        return Ok(());
    }

    fn reverse(self) -> Reversed<Self> {
        return Reversed::new(self);
    }
}

impl<T: Clone + Default> From<Vec<T>> for Distributed<T> {
    fn from(elems: Vec<T>) -> Self {
        return Distributed::from_vec(elems);
    }
}

impl<T: Clone + Default> FromIterator<T> for Distributed<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return Distributed::from_vec(iter.into_iter().collect());
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for Distributed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.iter()).finish();
    }
}
