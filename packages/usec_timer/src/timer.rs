use std::sync::Arc;

use crate::pal::{FrequencyFacade, Platform, PlatformFacade, SampleFacade};
use crate::{
    ClockStrategy, Diagnostic, DiagnosticSink, Error, EvenMedian, Result, TimerBuilder,
};

/// A high-resolution timer that measures the elapsed time between consecutive samples.
///
/// Each call to [`sample_now()`][Self::sample_now] reads the platform clock, records the time
/// elapsed since the previous sample (or since construction) and returns the current time in
/// absolute microseconds. The recorded delta can then be read in microseconds, milliseconds
/// or seconds.
///
/// The timer is also the entry point for the benchmark reducers
/// ([`bench()`][Self::bench], [`bench_average()`][Self::bench_average] and
/// [`bench_median()`][Self::bench_median]), which drive the sampling loop themselves.
///
/// # Examples
///
/// ```
/// use usec_timer::Timer;
///
/// let mut timer = Timer::new()?;
///
/// timer.sample_now();
/// std::thread::sleep(std::time::Duration::from_millis(2));
/// timer.sample_now();
///
/// println!("Elapsed: {:.3} ms", timer.last_delta_millis());
/// # Ok::<(), usec_timer::Error>(())
/// ```
///
/// # Thread safety
///
/// Every operation that samples the clock takes `&mut self`, so a timer can only be used by
/// one thread at a time. Wrap it in a mutex if it must be shared.
#[derive(Debug)]
pub struct Timer {
    platform: PlatformFacade,
    frequency: FrequencyFacade,
    last_sample: SampleFacade,
    last_delta_micros: f64,

    diagnostics: Arc<dyn DiagnosticSink>,
    even_median: EvenMedian,
}

impl Timer {
    /// Creates a timer with the default configuration and takes its initial sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockUnavailable`] if the platform clock cannot be read or its
    /// frequency cannot be resolved.
    pub fn new() -> Result<Self> {
        TimerBuilder::new().build()
    }

    /// Starts configuring a timer.
    pub fn builder() -> TimerBuilder {
        TimerBuilder::new()
    }

    pub(crate) fn from_parts(
        platform: PlatformFacade,
        diagnostics: Arc<dyn DiagnosticSink>,
        even_median: EvenMedian,
    ) -> Result<Self> {
        let initial = platform
            .frequency()
            .and_then(|frequency| Ok((frequency, platform.read_sample()?)));

        let (frequency, last_sample) = match initial {
            Ok(initial) => initial,
            Err(source) => {
                diagnostics.report(&Diagnostic::ConstructionFailed {
                    reason: source.to_string(),
                });
                return Err(Error::ClockUnavailable { source });
            }
        };

        Ok(Self {
            platform,
            frequency,
            last_sample,
            last_delta_micros: 0.0,
            diagnostics,
            even_median,
        })
    }

    /// Samples the clock and updates the stored delta.
    ///
    /// The delta becomes the time between this sample and the previous one (or construction,
    /// for the first call). Returns the current time in absolute microseconds, which can be
    /// used to measure across non-adjacent calls by subtracting two returned values.
    ///
    /// If the platform clock fails to produce a sample, a diagnostic is reported, the previous
    /// sample is kept, the delta becomes zero and the previous absolute time is returned.
    pub fn sample_now(&mut self) -> f64 {
        let sample = self.platform.read_sample();
        let previous = self.platform.to_micros(self.last_sample, self.frequency);

        match sample {
            Ok(sample) => {
                let now = self.platform.to_micros(sample, self.frequency);
                self.last_delta_micros = now - previous;
                self.last_sample = sample;
                now
            }
            Err(error) => {
                self.diagnostics.report(&Diagnostic::ClockReadFailed {
                    reason: error.to_string(),
                });
                self.last_delta_micros = 0.0;
                previous
            }
        }
    }

    /// The delta recorded by the most recent [`sample_now()`][Self::sample_now], in microseconds.
    ///
    /// Before the first `sample_now()` this is zero, which does not describe any measurement.
    #[must_use]
    pub fn last_delta_micros(&self) -> f64 {
        self.last_delta_micros
    }

    /// The delta recorded by the most recent [`sample_now()`][Self::sample_now], in milliseconds.
    #[must_use]
    pub fn last_delta_millis(&self) -> f64 {
        self.last_delta_micros * 0.001
    }

    /// The delta recorded by the most recent [`sample_now()`][Self::sample_now], in seconds.
    #[must_use]
    pub fn last_delta_secs(&self) -> f64 {
        self.last_delta_micros * 0.000_001
    }

    /// Measures the smallest time increment observable with this timer, in microseconds.
    ///
    /// Spins on [`sample_now()`][Self::sample_now] until the clock reports a strictly later time
    /// than at the start of the spin. This blocks the calling thread for an unbounded (though
    /// typically sub-millisecond) duration, so do not call it on a latency-sensitive path.
    pub fn measure_resolution(&mut self) -> f64 {
        let first = self.sample_now();

        loop {
            let next = self.sample_now();

            if next > first {
                return next - first;
            }
        }
    }

    /// Which platform clock this timer reads.
    #[must_use]
    pub fn clock_strategy(&self) -> ClockStrategy {
        self.platform.strategy()
    }

    /// How the median reducer combines the two middle samples of an even-sized run.
    #[must_use]
    pub fn even_median(&self) -> EvenMedian {
        self.even_median
    }

    pub(crate) fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics.report(diagnostic);
    }
}
