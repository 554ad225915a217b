use std::io;
use std::num::NonZero;

use windows::Win32::System::Performance::{QueryPerformanceCounter, QueryPerformanceFrequency};

use crate::ClockStrategy;
use crate::pal::Platform;

/// Reads the high-resolution performance counter.
///
/// Samples are raw tick counts. The tick frequency is fixed at system boot, so it only needs
/// to be queried once per timer.
#[derive(Debug)]
pub(crate) struct PerformanceCounterPlatform;

impl PerformanceCounterPlatform {
    pub(crate) const fn new() -> Self {
        Self
    }
}

impl Platform for PerformanceCounterPlatform {
    type Sample = i64;
    type Frequency = NonZero<i64>;

    fn strategy(&self) -> ClockStrategy {
        ClockStrategy::PerformanceCounter
    }

    fn frequency(&self) -> io::Result<NonZero<i64>> {
        let mut frequency = 0_i64;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        unsafe { QueryPerformanceFrequency(&raw mut frequency) }?;

        NonZero::new(frequency)
            .ok_or_else(|| io::Error::other("performance counter reports a zero frequency"))
    }

    fn read_sample(&self) -> io::Result<i64> {
        let mut ticks = 0_i64;

        // SAFETY: We are passing a valid pointer to a local, no other safety requirements.
        unsafe { QueryPerformanceCounter(&raw mut ticks) }?;

        Ok(ticks)
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "conversion is done in floating point on purpose to avoid integer overflow"
    )]
    fn to_micros(&self, sample: i64, frequency: NonZero<i64>) -> f64 {
        (sample as f64 * 1_000_000.0) / frequency.get() as f64
    }
}
