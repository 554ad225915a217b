use std::io;

use cpu_time::ProcessTime;

use crate::ClockStrategy;
use crate::pal::Platform;

/// Ticks per second of the processor-time clock. One tick is one nanosecond.
pub(crate) const PROCESSOR_TICKS_PER_SECOND: u64 = 1_000_000_000;

/// Reads the processor time consumed by the current process.
///
/// This is the coarse strategy for targets without a dedicated high-resolution clock.
/// The tick counter is truncated to 64 bits and wraps around when it overflows; a delta
/// spanning the wrap is meaningless. This is a known limitation and is not compensated for.
#[derive(Debug)]
pub(crate) struct ProcessorClockPlatform;

impl ProcessorClockPlatform {
    pub(crate) const fn new() -> Self {
        Self
    }
}

impl Platform for ProcessorClockPlatform {
    type Sample = u64;
    type Frequency = u64;

    fn strategy(&self) -> ClockStrategy {
        ClockStrategy::ProcessorTime
    }

    fn frequency(&self) -> io::Result<u64> {
        Ok(PROCESSOR_TICKS_PER_SECOND)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "the tick counter is allowed to wrap, as documented"
    )]
    fn read_sample(&self) -> io::Result<u64> {
        let now = ProcessTime::try_now()?;

        Ok(now.as_duration().as_nanos() as u64)
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "conversion is done in floating point on purpose to avoid integer overflow"
    )]
    fn to_micros(&self, sample: u64, frequency: u64) -> f64 {
        (sample as f64 * 1_000_000.0) / frequency as f64
    }
}
