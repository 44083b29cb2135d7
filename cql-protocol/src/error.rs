//! Error types for the CQL primitive codecs
//!
//! Leaf errors describe the single unit that could not be read or written.
//! Composite codecs never create leaves of their own; they wrap whatever their
//! sub-call returned in [`Error::Context`], so a failure deep inside a map
//! renders as a breadcrumb trail such as
//! `cannot read [string map] value: not enough bytes to read [string] content`.

use std::fmt;
use std::iter;

use thiserror::Error;

/// A specialized `Result` type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// The direction of the operation a context label refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Decoding from a source buffer
    Read,
    /// Encoding into a destination buffer
    Write,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Read => f.write_str("read"),
            Op::Write => f.write_str("write"),
        }
    }
}

/// Coarse classification of a failure, taken from the innermost error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Not enough bytes remain in the source buffer
    InsufficientSource,
    /// Not enough capacity remains in the destination buffer
    InsufficientCapacity,
    /// The value has no valid wire representation
    InvalidValue,
}

/// The error type for codec operations
///
/// Every variant that refers to a buffer records `remaining`: the number of
/// bytes left in that buffer at the point of failure. All remainders are
/// suffixes of the caller's buffer, so the count locates the failure even
/// after several layers of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer bytes remain than the unit being decoded requires
    #[error("not enough bytes to read {what}")]
    InsufficientSource { what: &'static str, remaining: usize },

    /// Less capacity remains than the unit being encoded requires
    #[error("not enough capacity to write {what}")]
    InsufficientCapacity { what: &'static str, remaining: usize },

    /// An absent value was given to a codec that has no null form
    #[error("cannot write nil as {what}")]
    NilValue { what: &'static str, remaining: usize },

    /// An absent value was given to a length utility that has no null form
    #[error("cannot compute nil {what} length")]
    NilLength { what: &'static str },

    /// A decoded length field is outside the values the type allows
    #[error("invalid {what} length {length}")]
    InvalidLength {
        what: &'static str,
        length: i32,
        remaining: usize,
    },

    /// The value does not fit in the width of its length or count prefix
    #[error("{what} too long: {length} exceeds {max}")]
    TooLong {
        what: &'static str,
        length: usize,
        max: usize,
        remaining: usize,
    },

    /// A complete value was decoded but input was left over
    #[error("{remaining} trailing bytes after decoded value")]
    TrailingBytes { remaining: usize },

    /// A failure inside a named field of a larger structure
    #[error("cannot {op} {field}: {source}")]
    Context {
        op: Op,
        field: &'static str,
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap this error with the name of the field being processed.
    pub fn wrap(self, op: Op, field: &'static str) -> Self {
        Error::Context {
            op,
            field,
            source: Box::new(self),
        }
    }

    /// The classification of the innermost error in the chain.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InsufficientSource { .. } => ErrorKind::InsufficientSource,
            Error::InsufficientCapacity { .. } => ErrorKind::InsufficientCapacity,
            Error::NilValue { .. }
            | Error::NilLength { .. }
            | Error::InvalidLength { .. }
            | Error::TooLong { .. }
            | Error::TrailingBytes { .. } => ErrorKind::InvalidValue,
            Error::Context { source, .. } => source.kind(),
        }
    }

    /// The wrapped error, if this is a context layer.
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Error::Context { source, .. } => Some(&**source),
            _ => None,
        }
    }

    /// The field label of this layer, if it is a context layer.
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Error::Context { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Iterate over the chain from this error down to the leaf.
    pub fn chain(&self) -> impl Iterator<Item = &Error> {
        iter::successors(Some(self), |e| e.cause())
    }

    /// The innermost error of the chain.
    pub fn leaf(&self) -> &Error {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }

    /// Bytes left in the buffer at the point of failure.
    ///
    /// Length utilities do not operate on a buffer and report zero.
    pub fn remaining(&self) -> usize {
        match self {
            Error::InsufficientSource { remaining, .. }
            | Error::InsufficientCapacity { remaining, .. }
            | Error::NilValue { remaining, .. }
            | Error::InvalidLength { remaining, .. }
            | Error::TooLong { remaining, .. }
            | Error::TrailingBytes { remaining } => *remaining,
            Error::NilLength { .. } => 0,
            Error::Context { source, .. } => source.remaining(),
        }
    }

    /// The unconsumed suffix of `input` at the point of failure.
    ///
    /// `input` must be the buffer the failed operation was called with.
    pub fn remainder<'a>(&self, input: &'a [u8]) -> &'a [u8] {
        &input[input.len().saturating_sub(self.remaining())..]
    }

    /// Byte offset into `input` at which the failure occurred.
    pub fn offset(&self, input_len: usize) -> usize {
        input_len.saturating_sub(self.remaining())
    }
}

/// Attach a field label to the error of a `Result`
pub trait ResultExt<T> {
    /// Wrap the error, if any, as a failure to `op` the named `field`.
    fn in_context(self, op: Op, field: &'static str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn in_context(self, op: Op, field: &'static str) -> Result<T> {
        self.map_err(|e| e.wrap(op, field))
    }
}
