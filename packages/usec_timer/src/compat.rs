//! Procedural API with sentinel-encoded results, for callers ported from the classic
//! "timer handle plus callback" style of benchmarking API.
//!
//! Differences from the primary API:
//!
//! * Timer handles and callbacks are `Option`s. An absent one is an invalid argument.
//! * Callbacks receive an opaque user data value, passed through untouched.
//! * Results are a [`Status`]: a plain `f64` plus an optional error indicator. Time-returning
//!   functions return [`TIME_ERROR`] on error and reducers return `0.0`, so the indicator
//!   is what tells a legitimate zero apart from a failure.
//! * Reducers encode an early stop as a negative duration and report the index of the failed
//!   iteration through an optional output slot.
//!
//! # Examples
//!
//! ```
//! use usec_timer::{Timer, compat};
//!
//! fn push(values: &mut Vec<u32>) -> bool {
//!     values.push(1);
//!     values.len() < 100
//! }
//!
//! let mut timer = Timer::new().ok();
//! let mut values = Vec::new();
//! let mut erepeat = 0;
//!
//! let status = compat::bench(timer.as_mut(), 1000, Some(push), &mut values, Some(&mut erepeat));
//!
//! assert!(status.error().is_none());
//! assert!(status.value() <= 0.0); // Stopped early.
//! assert_eq!(erepeat, 99);
//! ```

use crate::{Diagnostic, DiagnosticSink, ErrorKind, EvenMedian, Timer, TracingSink};

/// The value returned by time-returning functions when they fail.
pub const TIME_ERROR: f64 = -f64::MAX;

const TIMER_ABSENT: &str = "timer is absent";
const CALLBACK_ABSENT: &str = "callback is absent";

/// A sentinel-encoded result: a value plus an error indicator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Status {
    value: f64,
    error: Option<ErrorKind>,
}

impl Status {
    fn ok(value: f64) -> Self {
        Self { value, error: None }
    }

    fn failed(value: f64, error: ErrorKind) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    /// The returned value. On error this is the sentinel of the function that failed.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The error indicator, `None` if the function succeeded.
    #[must_use]
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Whether the function failed.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Converts microseconds to milliseconds.
#[must_use]
pub const fn us_to_ms(usecs: f64) -> f64 {
    usecs * 0.001
}

/// Converts microseconds to seconds.
#[must_use]
pub const fn us_to_s(usecs: f64) -> f64 {
    usecs * 0.000_001
}

/// Samples the timer and returns the current time in absolute microseconds.
///
/// See [`Timer::sample_now()`].
pub fn gettime(timer: Option<&mut Timer>) -> Status {
    match timer {
        Some(timer) => Status::ok(timer.sample_now()),
        None => time_error("gettime"),
    }
}

/// The delta recorded by the most recent [`gettime()`], in microseconds.
#[must_use]
pub fn diff_usecs(timer: Option<&Timer>) -> Status {
    timer.map_or_else(
        || time_error("diff_usecs"),
        |timer| Status::ok(timer.last_delta_micros()),
    )
}

/// The delta recorded by the most recent [`gettime()`], in milliseconds.
#[must_use]
pub fn diff_msecs(timer: Option<&Timer>) -> Status {
    timer.map_or_else(
        || time_error("diff_msecs"),
        |timer| Status::ok(timer.last_delta_millis()),
    )
}

/// The delta recorded by the most recent [`gettime()`], in seconds.
#[must_use]
pub fn diff_secs(timer: Option<&Timer>) -> Status {
    timer.map_or_else(
        || time_error("diff_secs"),
        |timer| Status::ok(timer.last_delta_secs()),
    )
}

/// The smallest time increment observable with the timer, in microseconds.
///
/// See [`Timer::measure_resolution()`].
pub fn accuracy_usecs(timer: Option<&mut Timer>) -> Status {
    match timer {
        Some(timer) => Status::ok(timer.measure_resolution()),
        None => time_error("accuracy_usecs"),
    }
}

/// Total time of up to `iterations` calls of `callback`, in microseconds.
///
/// `erepeat` is reset to zero first. If the callback returns `false`, the result is negative
/// and `erepeat` receives the zero-based index of the failed call.
///
/// See [`Timer::bench()`].
pub fn bench<D>(
    timer: Option<&mut Timer>,
    iterations: usize,
    callback: Option<impl FnMut(&mut D) -> bool>,
    userdata: &mut D,
    mut erepeat: Option<&mut usize>,
) -> Status {
    if let Some(slot) = erepeat.as_deref_mut() {
        *slot = 0;
    }

    reduce(
        Reduction::Total,
        timer,
        iterations,
        callback,
        userdata,
        erepeat,
    )
}

/// Mean time of one call of `callback` over up to `iterations` calls, in microseconds.
///
/// If the callback returns `false`, the result is negative and `erepeat` receives the
/// zero-based index of the failed call. Otherwise `erepeat` is left untouched.
///
/// See [`Timer::bench_average()`].
pub fn bench_average<D>(
    timer: Option<&mut Timer>,
    iterations: usize,
    callback: Option<impl FnMut(&mut D) -> bool>,
    userdata: &mut D,
    erepeat: Option<&mut usize>,
) -> Status {
    reduce(
        Reduction::Average,
        timer,
        iterations,
        callback,
        userdata,
        erepeat,
    )
}

/// Median time of one call of `callback` over up to `iterations` calls, in microseconds.
///
/// If the callback returns `false`, the result is negative and `erepeat` receives the
/// zero-based index of the failed call. Otherwise `erepeat` is left untouched.
///
/// An even number of samples is always reduced with [`EvenMedian::UpperPair`], whatever
/// policy the timer was built with.
///
/// See [`Timer::bench_median()`].
pub fn bench_median<D>(
    timer: Option<&mut Timer>,
    iterations: usize,
    callback: Option<impl FnMut(&mut D) -> bool>,
    userdata: &mut D,
    erepeat: Option<&mut usize>,
) -> Status {
    reduce(
        Reduction::Median,
        timer,
        iterations,
        callback,
        userdata,
        erepeat,
    )
}

#[derive(Clone, Copy, Debug)]
enum Reduction {
    Total,
    Average,
    Median,
}

impl Reduction {
    fn operation(self) -> &'static str {
        match self {
            Self::Total => "bench",
            Self::Average => "bench_average",
            Self::Median => "bench_median",
        }
    }
}

fn reduce<D>(
    reduction: Reduction,
    timer: Option<&mut Timer>,
    iterations: usize,
    callback: Option<impl FnMut(&mut D) -> bool>,
    userdata: &mut D,
    erepeat: Option<&mut usize>,
) -> Status {
    let Some(timer) = timer else {
        return invalid_argument(None, reduction.operation(), TIMER_ABSENT);
    };

    let Some(mut callback) = callback else {
        return invalid_argument(Some(&*timer), reduction.operation(), CALLBACK_ABSENT);
    };

    let work = || callback(userdata);

    let result = match reduction {
        Reduction::Total => timer.bench(iterations, work),
        Reduction::Average => timer.bench_average(iterations, work),
        Reduction::Median => timer.bench_median_with(iterations, work, EvenMedian::UpperPair),
    };

    match result {
        Ok(outcome) => {
            if let (Some(failed_at), Some(slot)) = (outcome.failed_at(), erepeat) {
                *slot = failed_at;
            }

            Status::ok(outcome.signed_micros())
        }
        // The reducer has already reported the diagnostic.
        Err(error) => Status::failed(0.0, error.kind()),
    }
}

fn time_error(operation: &'static str) -> Status {
    TracingSink.report(&Diagnostic::InvalidArgument {
        operation,
        problem: TIMER_ABSENT,
    });

    Status::failed(TIME_ERROR, ErrorKind::InvalidArgument)
}

fn invalid_argument(
    timer: Option<&Timer>,
    operation: &'static str,
    problem: &'static str,
) -> Status {
    let diagnostic = Diagnostic::InvalidArgument { operation, problem };

    match timer {
        Some(timer) => timer.report(&diagnostic),
        None => TracingSink.report(&diagnostic),
    }

    Status::failed(0.0, ErrorKind::InvalidArgument)
}
