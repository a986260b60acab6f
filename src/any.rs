//! Runtime choice of representation.
//!
//! [`AnySequence`] wraps one of the four representations behind a single
//! type, for callers that pick the representation from data rather than at
//! compile time.

use std::fmt;

use crate::contiguous::Contiguous;
use crate::contiguous::ContiguousCursor;
use crate::cursor::Cursor;
use crate::cursor::Reversed;
use crate::distributed::Distributed;
use crate::distributed::DistributedCursor;
use crate::error::Result;
use crate::linked::doubly::Doubly;
use crate::linked::doubly::DoublyCursor;
use crate::linked::singly::Singly;
use crate::linked::singly::SinglyCursor;
use crate::sequence::Sequence;

/// Which representation backs an [`AnySequence`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Contiguous,
    Singly,
    Doubly,
    Distributed,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Contiguous, Kind::Singly, Kind::Doubly, Kind::Distributed];

    pub fn name(self) -> &'static str {
        return match self {
            Kind::Contiguous => "contiguous",
            Kind::Singly => "singly",
            Kind::Doubly => "doubly",
            Kind::Distributed => "distributed",
        };
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(self.name());
    }
}

/// One of the four representations, chosen at runtime.
#[derive(Clone)]
pub enum AnySequence<T> {
    Contiguous(Contiguous<T>),
    Singly(Singly<T>),
    Doubly(Doubly<T>),
    Distributed(Distributed<T>),
}

/// Run the same expression against whichever representation is inside.
macro_rules! dispatch {
    ($value:expr, $enum:ident, $inner:ident => $body:expr) => {
        match $value {
            $enum::Contiguous($inner) => $body,
            $enum::Singly($inner) => $body,
            $enum::Doubly($inner) => $body,
            $enum::Distributed($inner) => $body,
        }
    };
}

/// Like `dispatch!`, but wraps the result in the same variant of `$to`.
macro_rules! dispatch_wrap {
    ($value:expr, $from:ident => $to:ident, $inner:ident => $body:expr) => {
        match $value {
            $from::Contiguous($inner) => $to::Contiguous($body),
            $from::Singly($inner) => $to::Singly($body),
            $from::Doubly($inner) => $to::Doubly($body),
            $from::Distributed($inner) => $to::Distributed($body),
        }
    };
}

impl<T: Clone + Default> AnySequence<T> {
    /// `len` default elements in the chosen representation.
    pub fn empty(kind: Kind, len: usize) -> AnySequence<T> {
        return match kind {
            Kind::Contiguous => AnySequence::Contiguous(Contiguous::empty(len, len)),
            Kind::Singly => AnySequence::Singly(Singly::empty(len)),
            Kind::Doubly => AnySequence::Doubly(Doubly::empty(len)),
            Kind::Distributed => AnySequence::Distributed(Distributed::empty(len, 0)),
        };
    }

    pub fn from_vec(kind: Kind, elems: Vec<T>) -> AnySequence<T> {
        return match kind {
            Kind::Contiguous => AnySequence::Contiguous(Contiguous::from_vec(elems)),
            Kind::Singly => AnySequence::Singly(Singly::from_vec(elems)),
            Kind::Doubly => AnySequence::Doubly(Doubly::from_vec(elems)),
            Kind::Distributed => AnySequence::Distributed(Distributed::from_vec(elems)),
        };
    }

    pub fn kind(&self) -> Kind {
        return match self {
            AnySequence::Contiguous(_) => Kind::Contiguous,
            AnySequence::Singly(_) => Kind::Singly,
            AnySequence::Doubly(_) => Kind::Doubly,
            AnySequence::Distributed(_) => Kind::Distributed,
        };
    }
}

impl<T: Clone + Default> Sequence for AnySequence<T> {
    type Item = T;
    type Cursor<'a>
        = AnyCursor<'a, T>
    where
        Self: 'a;

    fn append<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        dispatch!(self, AnySequence, seq => seq.append(elems));
    }

    fn prepend<I>(&mut self, elems: I)
    where
        I: IntoIterator<Item = T>,
    {
        dispatch!(self, AnySequence, seq => seq.prepend(elems));
    }

    fn slice(&self, start: usize, end: usize) -> Result<Self> {
        return Ok(dispatch_wrap!(self, AnySequence => AnySequence, seq => seq.slice(start, end)?));
    }

    fn get(&self, index: usize) -> Result<T> {
        return dispatch!(self, AnySequence, seq => seq.get(index));
    }

    fn set(&self, index: usize, elem: T) -> Result<()> {
        return dispatch!(self, AnySequence, seq => seq.set(index, elem));
    }

    fn iter_start(&self) -> AnyCursor<'_, T> {
        return dispatch_wrap!(self, AnySequence => AnyCursor, seq => seq.iter_start());
    }

    fn iter_end(&self) -> AnyCursor<'_, T> {
        return dispatch_wrap!(self, AnySequence => AnyCursor, seq => seq.iter_end());
    }

    fn deep_copy(&self) -> Self {
        return dispatch_wrap!(self, AnySequence => AnySequence, seq => seq.deep_copy());
    }

    fn len(&self) -> usize {
        return dispatch!(self, AnySequence, seq => seq.len());
    }

    fn cap(&self) -> usize {
        return dispatch!(self, AnySequence, seq => seq.cap());
    }
}

/// Cursor over an [`AnySequence`].
pub enum AnyCursor<'a, T> {
    Contiguous(ContiguousCursor<'a, T>),
    Singly(SinglyCursor<'a, T>),
    Doubly(DoublyCursor<'a, T>),
    Distributed(DistributedCursor<'a, T>),
}

impl<'a, T: Clone + Default> Cursor for AnyCursor<'a, T> {
    type Item = T;
    type Reversed = Reversed<Self>;

    fn has_next(&self) -> bool {
        return dispatch!(self, AnyCursor, c => c.has_next());
    }

    fn move_next(&mut self) -> bool {
        return dispatch!(self, AnyCursor, c => c.move_next());
    }

    fn has_prev(&self) -> bool {
        return dispatch!(self, AnyCursor, c => c.has_prev());
    }

    fn move_prev(&mut self) -> bool {
        return dispatch!(self, AnyCursor, c => c.move_prev());
    }

    fn get(&self) -> Option<T> {
        return dispatch!(self, AnyCursor, c => c.get());
    }

    fn set(&mut self, elem: T) -> Result<()> {
        return dispatch!(self, AnyCursor, c => c.set(elem));
    }

    fn reverse(self) -> Reversed<Self> {
        return Reversed::new(self);
    }
}

impl<T: Clone + Default + fmt::Debug> fmt::Debug for AnySequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_tuple(self.kind().name())
            .field(&self.to_vec())
            .finish();
    }
}
