use std::sync::Arc;

use crate::pal::PlatformFacade;
use crate::{DiagnosticSink, EvenMedian, Result, Timer, TracingSink};

/// Configures and creates a [`Timer`].
///
/// # Examples
///
/// ```
/// use usec_timer::{EvenMedian, Timer, TracingSink};
///
/// let timer = Timer::builder()
///     .diagnostics(TracingSink)
///     .even_median(EvenMedian::Midpoint)
///     .build()?;
/// # Ok::<(), usec_timer::Error>(())
/// ```
#[derive(Debug)]
#[must_use]
pub struct TimerBuilder {
    platform: PlatformFacade,
    diagnostics: Arc<dyn DiagnosticSink>,
    even_median: EvenMedian,
}

impl TimerBuilder {
    /// Creates a builder that reads the build target's clock, reports diagnostics via
    /// [`TracingSink`] and computes even-sized medians with [`EvenMedian::UpperPair`].
    pub fn new() -> Self {
        Self {
            platform: PlatformFacade::real(),
            diagnostics: Arc::new(TracingSink),
            even_median: EvenMedian::default(),
        }
    }

    /// Sets the sink that receives diagnostics from the timer and its benchmark reducers.
    ///
    /// To keep access to the sink after handing it over, pass an `Arc` of it.
    pub fn diagnostics(mut self, sink: impl DiagnosticSink) -> Self {
        self.diagnostics = Arc::new(sink);
        self
    }

    /// Sets how the median reducer combines the two middle samples of an even-sized run.
    pub fn even_median(mut self, even_median: EvenMedian) -> Self {
        self.even_median = even_median;
        self
    }

    #[cfg(test)]
    pub(crate) fn platform(mut self, platform: PlatformFacade) -> Self {
        self.platform = platform;
        self
    }

    /// Creates the timer and takes its initial sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockUnavailable`][crate::Error::ClockUnavailable] if the platform
    /// clock cannot be read or its frequency cannot be resolved. The failure is also reported
    /// to the configured diagnostic sink.
    pub fn build(self) -> Result<Timer> {
        Timer::from_parts(self.platform, self.diagnostics, self.even_median)
    }
}

impl Default for TimerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::pal::FakePlatform;

    #[test]
    fn defaults_to_upper_pair_median() {
        let timer = TimerBuilder::new()
            .platform(PlatformFacade::fake(FakePlatform::new()))
            .build()
            .unwrap();

        assert_eq!(timer.even_median(), EvenMedian::UpperPair);
    }

    #[test]
    fn even_median_is_applied() {
        let timer = TimerBuilder::default()
            .platform(PlatformFacade::fake(FakePlatform::new()))
            .even_median(EvenMedian::Midpoint)
            .build()
            .unwrap();

        assert_eq!(timer.even_median(), EvenMedian::Midpoint);
    }
}
