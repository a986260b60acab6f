//! Conformance test suite for sequence representations.
//!
//! Every implementation of the `Sequence` trait must pass these tests.
//! They cover:
//!
//! 1. Growing at either end, alone and from other sequences
//! 2. Views: shared writes, nested slices, growth past the end
//! 3. Copy isolation: deep copies and appends onto views
//! 4. Cursors and the generic algorithms
//!
//! # Usage
//!
//! To test a new representation, add a `run_conformance_tests!` line at the
//! bottom of this file. Representations whose cursors can walk backwards
//! also get a `run_bidirectional_tests!` line.

use quartet::AnySequence;
use quartet::Cursor;
use quartet::Kind;
use quartet::Sequence;
use quartet::SequenceError;
use quartet::contiguous::Contiguous;
use quartet::distributed::Distributed;
use quartet::linked::doubly::Doubly;
use quartet::linked::singly::Singly;

// =============================================================================
// Growing
// =============================================================================

/// Elements come back out in the order they went in.
pub fn test_round_trip<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![5, 6, 7]);
    assert_eq!(seq.to_vec(), vec![5, 6, 7]);
    assert_eq!(seq.len(), 3);
    assert!(seq.cap() >= seq.len());

    let empty = make(Vec::new());
    assert!(empty.is_empty());
    assert_eq!(empty.to_vec(), Vec::<i64>::new());
}

pub fn test_append_and_prepend<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let mut seq = make(vec![3]);
    seq.append([4, 5]);
    seq.prepend([1, 2]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
    assert_eq!(seq.len(), 5);

    seq.append(Vec::new());
    seq.prepend(Vec::new());
    assert_eq!(seq.len(), 5);
}

/// Growing an empty sequence from either end.
pub fn test_grow_from_empty<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let mut front = make(Vec::new());
    front.prepend([1, 2, 3]);
    front.prepend([0]);
    assert_eq!(front.to_vec(), vec![0, 1, 2, 3]);

    let mut back = make(Vec::new());
    for i in 0..40 {
        back.append([i]);
    }
    assert_eq!(back.to_vec(), (0..40).collect::<Vec<_>>());
}

/// Appending a clone of itself doubles the sequence once, no more.
pub fn test_append_self<S: Sequence<Item = i64> + Clone>(make: impl Fn(Vec<i64>) -> S) {
    let mut seq = make(vec![1, 2, 3]);
    let same = seq.clone();
    seq.append_seq(&same);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 1, 2, 3]);
    assert_eq!(same.to_vec(), vec![1, 2, 3]);
}

pub fn test_sequences_from_other_representations<S: Sequence<Item = i64>>(
    make: impl Fn(Vec<i64>) -> S,
) {
    let mut seq = make(vec![3]);
    seq.append_seq(&Distributed::with_bucket_capacity(vec![4, 5], 1));
    seq.prepend_seq(&Singly::from_vec(vec![1, 2]));
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Views
// =============================================================================

/// Writes through a view are visible in the source and the other way round.
pub fn test_view_shares_writes<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3, 4]);
    let view = seq.slice(1, 3).unwrap();
    assert_eq!(view.to_vec(), vec![2, 3]);

    view.set(0, 20).unwrap();
    assert_eq!(seq.get(1).unwrap(), 20);
    seq.set(2, 30).unwrap();
    assert_eq!(view.get(1).unwrap(), 30);
}

pub fn test_slice_of_slice<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make((0..20).collect());
    let outer = seq.slice(3, 17).unwrap();
    let inner = outer.slice(2, 9).unwrap();
    assert_eq!(inner.to_vec(), (5..12).collect::<Vec<_>>());
    inner.set(6, -1).unwrap();
    assert_eq!(seq.get(11).unwrap(), -1);
}

pub fn test_empty_slice<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3, 4]);
    assert_eq!(seq.slice(4, 4).unwrap().len(), 0);
    assert_eq!(seq.slice(0, 0).unwrap().len(), 0);

    let mut view = seq.slice(2, 2).unwrap();
    view.append([9]);
    assert_eq!(view.to_vec(), vec![9]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
}

/// A slice running past the end is padded with defaults; the source keeps its length.
pub fn test_slice_grows<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3]);
    let grown = seq.slice(1, 6).unwrap();
    assert_eq!(grown.len(), 5);
    assert_eq!(grown.to_vec(), vec![2, 3, 0, 0, 0]);
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);
}

pub fn test_errors<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2]);
    assert_eq!(
        seq.slice(2, 1).err(),
        Some(SequenceError::InvalidRange { start: 2, end: 1 })
    );
    assert_eq!(
        seq.get(2).unwrap_err(),
        SequenceError::IndexOutOfRange { index: 2, len: 2 }
    );
    assert_eq!(
        seq.set(5, 0).unwrap_err(),
        SequenceError::IndexOutOfRange { index: 5, len: 2 }
    );
    assert_eq!(seq.to_vec(), vec![1, 2]);
}

// =============================================================================
// Copy isolation
// =============================================================================

pub fn test_deep_copy_is_independent<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3]);
    let mut copy = seq.deep_copy();
    copy.set(0, 100).unwrap();
    copy.append([4]);
    copy.prepend([0]);
    assert_eq!(copy.to_vec(), vec![0, 100, 2, 3, 4]);
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);

    seq.set(1, 200).unwrap();
    assert_eq!(copy.get(2).unwrap(), 2);
}

/// Growing a view never overwrites elements the source can see.
pub fn test_growing_view_keeps_source<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3, 4]);

    let mut head = seq.slice(0, 2).unwrap();
    head.append([8, 9]);
    assert_eq!(head.to_vec(), vec![1, 2, 8, 9]);

    let mut tail = seq.slice(2, 4).unwrap();
    tail.prepend([7]);
    assert_eq!(tail.to_vec(), vec![7, 3, 4]);

    let mut middle = seq.slice(1, 3).unwrap();
    middle.append([5]);
    middle.prepend([6]);
    assert_eq!(middle.to_vec(), vec![6, 2, 3, 5]);

    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
}

/// Dropping from one end while growing at the other keeps the contents right.
pub fn test_sliding_window<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let mut queue = make(vec![0, 1, 2, 3]);
    for i in 4..2_000 {
        queue = queue.slice(1, queue.len()).unwrap();
        queue.append([i]);
    }
    assert_eq!(queue.to_vec(), vec![1_996, 1_997, 1_998, 1_999]);

    let mut stack = make(vec![3, 2, 1, 0]);
    for i in 4..2_000 {
        stack = stack.slice(0, stack.len() - 1).unwrap();
        stack.prepend([i]);
    }
    assert_eq!(stack.to_vec(), vec![1_999, 1_998, 1_997, 1_996]);
}

// =============================================================================
// Cursors
// =============================================================================

/// A start-to-end walk visits exactly `len` elements, in order.
pub fn test_forward_walk<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make((0..50).collect());
    let mut cursor = seq.iter_start();
    assert_eq!(cursor.get(), None);
    let mut count = 0;
    while cursor.move_next() {
        assert_eq!(cursor.get(), Some(count));
        count += 1;
    }
    assert_eq!(count as usize, seq.len());
    assert!(!cursor.has_next());
    assert_eq!(seq.iter().collect::<Vec<_>>(), seq.to_vec());
}

pub fn test_cursor_set<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3]);
    let view = seq.slice(1, 3).unwrap();
    let mut cursor = view.iter_start();
    assert_eq!(cursor.set(0), Err(SequenceError::NoElement));
    while cursor.move_next() {
        let value = cursor.get().unwrap();
        cursor.set(value * 10).unwrap();
    }
    assert_eq!(seq.to_vec(), vec![1, 20, 30]);
}

/// Walking `reverse(iter_end())` yields the elements back to front.
pub fn test_reverse_walk<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make((0..30).collect());
    let mut cursor = seq.reverse_iter_start();
    let mut seen = Vec::new();
    while cursor.move_next() {
        seen.push(cursor.get().unwrap());
    }
    let mut expected = seq.to_vec();
    expected.reverse();
    assert_eq!(seen, expected);

    // And back again from where the reversed walk stopped.
    let mut forward = Vec::new();
    while cursor.move_prev() {
        forward.push(cursor.get().unwrap());
    }
    assert_eq!(forward, (1..30).collect::<Vec<_>>());
}

pub fn test_cursor_turns_around<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3, 4]);
    let mut cursor = seq.iter_start();
    assert!(cursor.move_next());
    assert!(cursor.move_next());
    assert!(cursor.move_next());
    assert!(cursor.move_prev());
    assert_eq!(cursor.get(), Some(2));
    assert!(cursor.move_prev());
    assert!(!cursor.move_prev());
    assert_eq!(cursor.get(), Some(1));
}

// =============================================================================
// Algorithms
// =============================================================================

pub fn test_erase<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3, 4]);
    for i in 0..4 {
        let mut expected = vec![1, 2, 3, 4];
        expected.remove(i);
        assert_eq!(quartet::erase(&seq, i).unwrap().to_vec(), expected);
    }
    assert_eq!(quartet::erase(&seq.slice(1, 4).unwrap(), 0).unwrap().to_vec(), vec![3, 4]);
    assert!(quartet::erase(&seq, 4).is_err());
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
}

pub fn test_erase_range<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3, 4, 5]);
    assert_eq!(quartet::erase_range(&seq, 1, 3).unwrap().to_vec(), vec![1, 5]);
    assert_eq!(quartet::erase_range(&seq, 0, 4).unwrap().len(), 0);
    assert_eq!(
        quartet::erase_range(&seq, 3, 1).err(),
        Some(SequenceError::InvalidRange { start: 3, end: 1 })
    );
    assert_eq!(
        quartet::erase_range(&seq, 3, 5).err(),
        Some(SequenceError::IndexOutOfRange { index: 5, len: 5 })
    );
}

pub fn test_insert<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 2, 3, 4]);
    assert_eq!(quartet::insert(&seq, 2, 99).unwrap().to_vec(), vec![1, 2, 99, 3, 4]);
    for i in 0..=4 {
        let inserted = quartet::insert(&seq, i, -7).unwrap();
        assert_eq!(inserted.len(), 5);
        assert_eq!(inserted.get(i).unwrap(), -7);
    }
    assert!(quartet::insert(&seq, 5, 0).is_err());
    assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
}

pub fn test_insert_seq<S: Sequence<Item = i64>>(make: impl Fn(Vec<i64>) -> S) {
    let seq = make(vec![1, 6]);
    let elems = Doubly::from_vec(vec![2, 3, 4, 5]);
    assert_eq!(quartet::insert_seq(&seq, 1, &elems).unwrap().to_vec(), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(quartet::insert_seq(&seq, 0, &elems).unwrap().to_vec(), vec![2, 3, 4, 5, 1, 6]);
    assert_eq!(seq.to_vec(), vec![1, 6]);
}

// =============================================================================
// Test runner macros
// =============================================================================

macro_rules! run_conformance_tests {
    ($impl_name:ident, $make:expr) => {
        mod $impl_name {
            use super::*;

            #[test]
            fn round_trip() {
                test_round_trip($make);
            }

            #[test]
            fn append_and_prepend() {
                test_append_and_prepend($make);
            }

            #[test]
            fn grow_from_empty() {
                test_grow_from_empty($make);
            }

            #[test]
            fn append_self() {
                test_append_self($make);
            }

            #[test]
            fn sequences_from_other_representations() {
                test_sequences_from_other_representations($make);
            }

            #[test]
            fn view_shares_writes() {
                test_view_shares_writes($make);
            }

            #[test]
            fn slice_of_slice() {
                test_slice_of_slice($make);
            }

            #[test]
            fn empty_slice() {
                test_empty_slice($make);
            }

            #[test]
            fn slice_grows() {
                test_slice_grows($make);
            }

            #[test]
            fn errors() {
                test_errors($make);
            }

            #[test]
            fn deep_copy_is_independent() {
                test_deep_copy_is_independent($make);
            }

            #[test]
            fn growing_view_keeps_source() {
                test_growing_view_keeps_source($make);
            }

            #[test]
            fn sliding_window() {
                test_sliding_window($make);
            }

            #[test]
            fn forward_walk() {
                test_forward_walk($make);
            }

            #[test]
            fn cursor_set() {
                test_cursor_set($make);
            }

            #[test]
            fn erase() {
                test_erase($make);
            }

            #[test]
            fn erase_range() {
                test_erase_range($make);
            }

            #[test]
            fn insert() {
                test_insert($make);
            }

            #[test]
            fn insert_seq() {
                test_insert_seq($make);
            }
        }
    };
}

macro_rules! run_bidirectional_tests {
    ($impl_name:ident, $make:expr) => {
        mod $impl_name {
            use super::*;

            #[test]
            fn reverse_walk() {
                test_reverse_walk($make);
            }

            #[test]
            fn cursor_turns_around() {
                test_cursor_turns_around($make);
            }
        }
    };
}

fn small_buckets(elems: Vec<i64>) -> Distributed<i64> {
    return Distributed::with_bucket_capacity(elems, 2);
}

fn any_doubly(elems: Vec<i64>) -> AnySequence<i64> {
    return AnySequence::from_vec(Kind::Doubly, elems);
}

fn any_distributed(elems: Vec<i64>) -> AnySequence<i64> {
    return AnySequence::from_vec(Kind::Distributed, elems);
}

run_conformance_tests!(contiguous, Contiguous::from_vec);
run_conformance_tests!(singly, Singly::from_vec);
run_conformance_tests!(doubly, Doubly::from_vec);
run_conformance_tests!(distributed, Distributed::from_vec);
run_conformance_tests!(distributed_small_buckets, small_buckets);
run_conformance_tests!(any_doubly_seq, any_doubly);
run_conformance_tests!(any_distributed_seq, any_distributed);

run_bidirectional_tests!(contiguous_bidirectional, Contiguous::from_vec);
run_bidirectional_tests!(doubly_bidirectional, Doubly::from_vec);
run_bidirectional_tests!(distributed_bidirectional, Distributed::from_vec);
run_bidirectional_tests!(distributed_small_buckets_bidirectional, small_buckets);

/// Singly cursors only move forward: a reversed start walk yields nothing.
#[test]
fn singly_reverse_walk_is_empty() {
    let seq = Singly::from_vec(vec![1, 2, 3]);
    let mut cursor = seq.reverse_iter_start();
    assert!(!cursor.has_next());
    assert!(!cursor.move_next());
}

#[test]
fn distributed_bucket_layout() {
    let mut seq: Distributed<i64> = Distributed::empty(0, 2);
    seq.append([1, 2, 3]);
    assert_eq!(seq.bucket_count(), 2);
    assert_eq!(seq.end_offset(), 1);
    assert_eq!(seq.get(2).unwrap(), 3);
}
