//! Errors raised by sequence operations.
//!
//! Every failure is reported before any shared storage is touched, so a
//! returned error never leaves a half-applied operation behind.

/// Error returned by fallible sequence and cursor operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// An element index at or past the current length.
    #[error("index [{index}] out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A range whose end lies before its start.
    #[error("invalid slice index: {start} > {end}")]
    InvalidRange { start: usize, end: usize },

    /// A cursor was read or written while sitting on a sentinel.
    #[error("cursor is not positioned on an element")]
    NoElement,
}

pub type Result<T> = std::result::Result<T, SequenceError>;

/// Check that `index` addresses an element of a sequence of length `len`.
#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(SequenceError::IndexOutOfRange { index, len });
    }
    return Ok(());
}

/// Check that `start..end` is a well-formed range.
#[inline]
pub(crate) fn check_range(start: usize, end: usize) -> Result<()> {
    if end < start {
        return Err(SequenceError::InvalidRange { start, end });
    }
    return Ok(());
}
