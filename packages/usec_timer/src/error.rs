use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Errors that can occur when creating a [`Timer`][crate::Timer] or running a benchmark.
///
/// A unit of work reporting failure is not an error. That is a regular benchmark outcome,
/// visible through [`BenchOutcome::failed_at()`][crate::BenchOutcome::failed_at].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The platform clock could not be read or its frequency could not be resolved
    /// when constructing a timer.
    #[error("high-resolution clock is unavailable: {source}")]
    ClockUnavailable {
        /// The error reported by the operating system.
        source: io::Error,
    },

    /// The caller passed an argument the operation cannot work with, such as a zero
    /// iteration count. Detected before any work is performed.
    #[error("invalid argument: {problem}")]
    InvalidArgument {
        /// A human-readable description of the problem.
        problem: &'static str,
    },

    /// The buffer for recording per-iteration durations could not be allocated.
    #[error("cannot allocate a buffer for {iterations} recorded durations")]
    ResourceExhausted {
        /// The number of iterations the buffer was sized for.
        iterations: usize,

        /// The allocation error.
        source: TryReserveError,
    },
}

impl Error {
    /// The category of this error, as a plain copyable value.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ClockUnavailable { .. } => ErrorKind::ClockUnavailable,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::ResourceExhausted { .. } => ErrorKind::ResourceExhausted,
        }
    }
}

/// Category of an [`Error`], used where an error indicator has to be copied around
/// alongside a sentinel value (see [`compat::Status`][crate::compat::Status]).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`Error::ClockUnavailable`].
    ClockUnavailable,

    /// See [`Error::InvalidArgument`].
    InvalidArgument,

    /// See [`Error::ResourceExhausted`].
    ResourceExhausted,
}

/// A specialized `Result` type for timer operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
