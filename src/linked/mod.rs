//! Linked representations.
//!
//! Both lists keep their nodes in a shared arena and address them by index.
//! A handle is `(arena, start, end, len)`; slicing picks new `start`/`end`
//! nodes inside the same arena without copying anything.
//!
//! Writes follow one rule: an existing node's link is only changed when no
//! other handle can be relying on it. Appending links onto `end` in place
//! only when `end` is the tail of its chain; otherwise the handle first moves
//! to a private copy of its elements. New elements always go into freshly
//! allocated nodes, so a chain can never loop back on itself.
//!
//! Nodes cut off by slicing stay in the arena. When a handle owns its arena
//! alone and reaches less than half of the nodes, it compacts onto a fresh
//! arena before growing.

mod arena;
pub mod doubly;
pub mod singly;
