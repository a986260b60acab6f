//! Quartet - one sequence interface, four backing representations.
//!
//! | Representation | Storage | Index | Append | Prepend |
//! |---|---|---|---|---|
//! | [`Contiguous`](contiguous::Contiguous) | one shared `Vec` | O(1) | O(1)* | O(n) |
//! | [`Singly`](linked::singly::Singly) | singly linked nodes | O(i) | O(1) | O(1) |
//! | [`Doubly`](linked::doubly::Doubly) | doubly linked nodes | O(min(i, n - i)) | O(1) | O(1) |
//! | [`Distributed`](distributed::Distributed) | deque of fixed buckets | O(1) | O(1)* | O(1)* |
//!
//! Handles are views: `clone` and `slice` share storage, and a write through
//! one view is seen by every other view of the same element. Algorithms in
//! [`algorithm`] are written once against [`Sequence`] and work on any of
//! them.
//!
//! # Quick Start
//!
//! ```
//! use quartet::Sequence;
//! use quartet::linked::doubly::Doubly;
//!
//! let mut seq = Doubly::from_vec(vec![2, 3]);
//! seq.prepend([1]);
//! seq.append([4]);
//!
//! let view = seq.slice(1, 3).unwrap();
//! view.set(0, 20).unwrap();
//! assert_eq!(seq.to_vec(), vec![1, 20, 3, 4]);
//!
//! let erased = quartet::erase(&seq, 0).unwrap();
//! assert_eq!(erased.to_vec(), vec![20, 3, 4]);
//! ```

pub mod algorithm;
pub mod any;
pub mod contiguous;
pub mod cursor;
pub mod distributed;
pub mod error;
pub mod linked;
pub mod sequence;

pub use algorithm::erase;
pub use algorithm::erase_range;
pub use algorithm::flatten;
pub use algorithm::insert;
pub use algorithm::insert_seq;
pub use any::AnySequence;
pub use any::Kind;
pub use cursor::Cursor;
pub use cursor::Reversed;
pub use cursor::Walk;
pub use cursor::reverse;
pub use error::Result;
pub use error::SequenceError;
pub use sequence::Sequence;
