//! Diagnostic reporting for timers and benchmark reducers.
//!
//! Every timer carries a [`DiagnosticSink`] that receives a [`Diagnostic`] whenever an
//! operation is rejected or a benchmark stops early. The default sink, [`TracingSink`],
//! forwards these as `tracing` events. Callers that want to inspect diagnostics directly
//! can supply their own sink via [`TimerBuilder::diagnostics()`][crate::TimerBuilder::diagnostics].

use std::fmt::{self, Debug};
use std::sync::Arc;

/// How serious a [`Diagnostic`] is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Severity {
    /// Something unusual happened but the operation produced a meaningful result.
    Warning,

    /// The operation could not be performed.
    Error,
}

/// A diagnostic event reported by a timer operation.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// A timer could not be constructed because the platform clock is unavailable.
    ConstructionFailed {
        /// The error reported by the platform.
        reason: String,
    },

    /// The platform clock failed to produce a sample on an already constructed timer.
    ClockReadFailed {
        /// The error reported by the platform.
        reason: String,
    },

    /// An operation was called with an argument it cannot work with.
    InvalidArgument {
        /// The name of the rejected operation.
        operation: &'static str,

        /// A human-readable description of the problem.
        problem: &'static str,
    },

    /// A benchmark unit of work reported failure before all iterations were executed.
    WorkFailed {
        /// The name of the benchmark reducer.
        operation: &'static str,

        /// The number of iterations that were requested.
        requested: usize,

        /// The zero-based index of the iteration that failed.
        failed_at: usize,
    },

    /// The buffer for recording per-iteration durations could not be allocated.
    BufferAllocationFailed {
        /// The number of iterations the buffer was sized for.
        iterations: usize,
    },
}

impl Diagnostic {
    /// How serious this diagnostic is.
    ///
    /// A zero iteration count is reported as a warning, every other rejected argument
    /// as an error.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Self::WorkFailed { .. } => Severity::Warning,
            Self::InvalidArgument { problem, .. } if *problem == ZERO_ITERATIONS => {
                Severity::Warning
            }
            Self::ConstructionFailed { .. }
            | Self::ClockReadFailed { .. }
            | Self::InvalidArgument { .. }
            | Self::BufferAllocationFailed { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstructionFailed { reason } => {
                write!(f, "timer construction failed: {reason}")
            }
            Self::ClockReadFailed { reason } => {
                write!(f, "clock read failed, keeping previous sample: {reason}")
            }
            Self::InvalidArgument { operation, problem } => {
                write!(f, "{operation}() rejected its arguments: {problem}")
            }
            Self::WorkFailed {
                operation,
                requested,
                failed_at,
            } => write!(
                f,
                "{operation}() requested {requested} iterations but the work failed at iteration {failed_at}"
            ),
            Self::BufferAllocationFailed { iterations } => write!(
                f,
                "cannot allocate a buffer for {iterations} recorded durations"
            ),
        }
    }
}

pub(crate) const ZERO_ITERATIONS: &str = "iteration count must be at least 1";

/// Receives diagnostics reported by timer operations.
///
/// Implementations must be cheap to call because diagnostics may be reported from within
/// a benchmark run (though never from inside a timed interval).
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Debug + Send + Sync + 'static {
    /// Handles one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

impl<T: DiagnosticSink> DiagnosticSink for Arc<T> {
    fn report(&self, diagnostic: &Diagnostic) {
        T::report(self, diagnostic);
    }
}

/// Forwards diagnostics to the `tracing` ecosystem.
///
/// Errors are emitted at the `ERROR` level and warnings at the `WARN` level, with target
/// `usec_timer`. Without an installed subscriber, the events go nowhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    #[cfg_attr(test, mutants::skip)] // Output goes to whatever subscriber is installed.
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => {
                tracing::warn!(target: "usec_timer", kind = diagnostic_name(diagnostic), "{diagnostic}");
            }
            Severity::Error => {
                tracing::error!(target: "usec_timer", kind = diagnostic_name(diagnostic), "{diagnostic}");
            }
        }
    }
}

fn diagnostic_name(diagnostic: &Diagnostic) -> &'static str {
    match diagnostic {
        Diagnostic::ConstructionFailed { .. } => "construction_failed",
        Diagnostic::ClockReadFailed { .. } => "clock_read_failed",
        Diagnostic::InvalidArgument { .. } => "invalid_argument",
        Diagnostic::WorkFailed { .. } => "work_failed",
        Diagnostic::BufferAllocationFailed { .. } => "buffer_allocation_failed",
    }
}
