use std::fmt;

/// The result of a benchmark run: a duration plus whether every iteration succeeded.
///
/// The duration is always a non-negative magnitude. Whether it describes a complete run or
/// a run that stopped early is told by [`failed_at()`][Self::failed_at]. The legacy encoding,
/// where early stop is signaled by a negative duration, is available via
/// [`signed_micros()`][Self::signed_micros].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BenchOutcome {
    micros: f64,
    requested_iterations: usize,
    executed_iterations: usize,
    failed_at: Option<usize>,
}

impl BenchOutcome {
    pub(crate) fn new(micros: f64, requested_iterations: usize, failed_at: Option<usize>) -> Self {
        Self {
            micros,
            requested_iterations,
            executed_iterations: failed_at.map_or(requested_iterations, |i| i.saturating_add(1)),
            failed_at,
        }
    }

    /// The reduced duration in microseconds.
    #[must_use]
    pub fn micros(&self) -> f64 {
        self.micros
    }

    /// The reduced duration in milliseconds.
    #[must_use]
    pub fn millis(&self) -> f64 {
        self.micros * 0.001
    }

    /// The reduced duration in seconds.
    #[must_use]
    pub fn secs(&self) -> f64 {
        self.micros * 0.000_001
    }

    /// The duration in microseconds, negated if the unit of work failed before all
    /// requested iterations were executed.
    ///
    /// A failed run is always strictly negative. If its magnitude is zero (the clock did not
    /// advance), the smallest negative normal `f64` is returned instead.
    #[must_use]
    pub fn signed_micros(&self) -> f64 {
        if self.is_success() {
            self.micros
        } else {
            -self.micros.max(f64::MIN_POSITIVE)
        }
    }

    /// Whether every requested iteration was executed and succeeded.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed_at.is_none()
    }

    /// The zero-based index of the iteration whose unit of work reported failure, if any.
    ///
    /// This equals the number of iterations that succeeded before the failure.
    #[must_use]
    pub fn failed_at(&self) -> Option<usize> {
        self.failed_at
    }

    /// How many iterations were requested.
    #[must_use]
    pub fn requested_iterations(&self) -> usize {
        self.requested_iterations
    }

    /// How many times the unit of work was called, including a call that failed.
    #[must_use]
    pub fn executed_iterations(&self) -> usize {
        self.executed_iterations
    }

    /// How many iterations completed successfully.
    ///
    /// The average and median reducers reduce over these iterations only. The exception is a
    /// failure on the very first call, where the failed call's own duration is used.
    #[must_use]
    pub fn completed_iterations(&self) -> usize {
        self.failed_at.unwrap_or(self.requested_iterations)
    }
}

impl fmt::Display for BenchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} µs", self.micros)?;

        match self.failed_at {
            None => write!(f, " ({} iterations)", self.executed_iterations),
            Some(failed_at) => write!(
                f,
                " (failed at iteration {failed_at} of {})",
                self.requested_iterations
            ),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::float_cmp, reason = "all test values are exact in f64")]

    use super::*;

    #[test]
    fn success_is_non_negative() {
        let outcome = BenchOutcome::new(40.0, 4, None);

        assert!(outcome.is_success());
        assert_eq!(outcome.signed_micros(), 40.0);
        assert_eq!(outcome.executed_iterations(), 4);
        assert_eq!(outcome.failed_at(), None);
    }

    #[test]
    fn failure_is_negative() {
        let outcome = BenchOutcome::new(12.0, 10, Some(2));

        assert!(!outcome.is_success());
        assert_eq!(outcome.signed_micros(), -12.0);
        assert_eq!(outcome.micros(), 12.0);
        assert_eq!(outcome.executed_iterations(), 3);
        assert_eq!(outcome.completed_iterations(), 2);
        assert_eq!(outcome.requested_iterations(), 10);
    }

    #[test]
    fn success_counts_every_iteration_as_completed() {
        let outcome = BenchOutcome::new(40.0, 4, None);

        assert_eq!(outcome.completed_iterations(), 4);
    }

    #[test]
    fn zero_magnitude_failure_is_still_negative() {
        let outcome = BenchOutcome::new(0.0, 5, Some(0));

        assert!(outcome.signed_micros() < 0.0);
        assert_eq!(outcome.micros(), 0.0);
        assert_eq!(outcome.completed_iterations(), 0);
    }

    #[test]
    fn unit_views_are_linear_scalings() {
        let outcome = BenchOutcome::new(2_500.0, 1, None);

        assert_eq!(outcome.millis(), 2_500.0 * 0.001);
        assert_eq!(outcome.secs(), 2_500.0 * 0.000_001);
    }

    #[test]
    fn display_mentions_failure() {
        assert_eq!(
            BenchOutcome::new(1.5, 3, None).to_string(),
            "1.500 µs (3 iterations)"
        );
        assert_eq!(
            BenchOutcome::new(1.5, 3, Some(1)).to_string(),
            "1.500 µs (failed at iteration 1 of 3)"
        );
    }
}
