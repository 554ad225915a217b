//! Benchmark reducers: run a unit of work repeatedly and reduce the timings to one duration.

use crate::diagnostics::ZERO_ITERATIONS;
use crate::median::median;
use crate::{BenchOutcome, Diagnostic, Error, EvenMedian, Result, Timer};

impl Timer {
    /// Runs `work` up to `iterations` times and measures the total time taken.
    ///
    /// The whole run is timed as one interval. If `work` returns `false`, no further iterations
    /// are executed and the outcome covers the time up to and including the failed iteration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without running `work` if `iterations` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use usec_timer::Timer;
    ///
    /// let mut timer = Timer::new()?;
    /// let mut values = Vec::new();
    ///
    /// let outcome = timer.bench(1000, || {
    ///     values.push(values.len());
    ///     true
    /// })?;
    ///
    /// assert!(outcome.is_success());
    /// println!("1000 pushes took {outcome}");
    /// # Ok::<(), usec_timer::Error>(())
    /// ```
    pub fn bench(
        &mut self,
        iterations: usize,
        mut work: impl FnMut() -> bool,
    ) -> Result<BenchOutcome> {
        const OPERATION: &str = "bench";

        self.check_iterations(OPERATION, iterations)?;

        let mut failed_at = None;

        let start = self.sample_now();

        for i in 0..iterations {
            if !work() {
                failed_at = Some(i);
                break;
            }
        }

        let total = self.sample_now() - start;

        Ok(self.finish(OPERATION, total, iterations, failed_at))
    }

    /// Runs `work` up to `iterations` times and measures the mean time of one iteration.
    ///
    /// Each iteration is timed individually. If `work` returns `false`, no further iterations
    /// are executed and the mean is taken over the iterations that completed before the
    /// failure. When the very first call fails there are no completed iterations, so the
    /// outcome is the duration of that failed call.
    ///
    /// Compared to [`bench_median()`][Self::bench_median], occasional slow iterations (e.g.
    /// due to the thread being preempted) pull the result up.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without running `work` if `iterations` is zero.
    pub fn bench_average(
        &mut self,
        iterations: usize,
        work: impl FnMut() -> bool,
    ) -> Result<BenchOutcome> {
        const OPERATION: &str = "bench_average";

        self.check_iterations(OPERATION, iterations)?;

        let mut sum = 0.0;
        let mut recorded = 0_usize;

        let failed_at = self.time_each_iteration(iterations, work, |elapsed| {
            sum += elapsed;
            recorded = recorded.saturating_add(1);
        });

        #[expect(
            clippy::cast_precision_loss,
            reason = "iteration counts beyond 2^52 are not realistic"
        )]
        let mean = sum / recorded as f64;

        Ok(self.finish(OPERATION, mean, iterations, failed_at))
    }

    /// Runs `work` up to `iterations` times and measures the median time of one iteration.
    ///
    /// Each iteration is timed individually and recorded in a buffer sized for `iterations`
    /// samples. If `work` returns `false`, no further iterations are executed and the median is
    /// taken over the iterations that completed before the failure. When the very first call
    /// fails there are no completed iterations, so the outcome is the duration of that failed
    /// call. For an even number of samples, the two middle candidates are averaged as
    /// configured by [`TimerBuilder::even_median()`][crate::TimerBuilder::even_median].
    ///
    /// Compared to [`bench_average()`][Self::bench_average], occasional slow iterations do not
    /// affect the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] without running `work` if `iterations` is zero.
    ///
    /// Returns [`Error::ResourceExhausted`] without running `work` if the buffer for
    /// `iterations` samples cannot be allocated.
    pub fn bench_median(
        &mut self,
        iterations: usize,
        work: impl FnMut() -> bool,
    ) -> Result<BenchOutcome> {
        self.bench_median_with(iterations, work, self.even_median())
    }

    /// [`bench_median()`][Self::bench_median] with an explicit even-count policy instead of
    /// the one the timer was built with.
    pub(crate) fn bench_median_with(
        &mut self,
        iterations: usize,
        work: impl FnMut() -> bool,
        even_median: EvenMedian,
    ) -> Result<BenchOutcome> {
        const OPERATION: &str = "bench_median";

        self.check_iterations(OPERATION, iterations)?;

        let mut durations = Vec::new();

        if let Err(source) = durations.try_reserve_exact(iterations) {
            self.report(&Diagnostic::BufferAllocationFailed { iterations });
            return Err(Error::ResourceExhausted { iterations, source });
        }

        let failed_at = self.time_each_iteration(iterations, work, |elapsed| {
            durations.push(elapsed);
        });

        let middle = median(&mut durations, even_median);

        Ok(self.finish(OPERATION, middle, iterations, failed_at))
    }

    fn check_iterations(&self, operation: &'static str, iterations: usize) -> Result<()> {
        if iterations == 0 {
            self.report(&Diagnostic::InvalidArgument {
                operation,
                problem: ZERO_ITERATIONS,
            });
            return Err(Error::InvalidArgument {
                problem: ZERO_ITERATIONS,
            });
        }

        Ok(())
    }

    /// Times each call to `work` separately, handing the duration of every successful call
    /// to `record`.
    ///
    /// Returns the index of the iteration that failed, if any. A failed call is only recorded
    /// when it is the first call, so that at least one duration is always recorded.
    fn time_each_iteration(
        &mut self,
        iterations: usize,
        mut work: impl FnMut() -> bool,
        mut record: impl FnMut(f64),
    ) -> Option<usize> {
        for i in 0..iterations {
            let start = self.sample_now();
            let succeeded = work();
            let elapsed = self.sample_now() - start;

            if succeeded || i == 0 {
                record(elapsed);
            }

            if !succeeded {
                return Some(i);
            }
        }

        None
    }

    fn finish(
        &self,
        operation: &'static str,
        micros: f64,
        iterations: usize,
        failed_at: Option<usize>,
    ) -> BenchOutcome {
        if let Some(failed_at) = failed_at {
            self.report(&Diagnostic::WorkFailed {
                operation,
                requested: iterations,
                failed_at,
            });
        }

        BenchOutcome::new(micros, iterations, failed_at)
    }
}
